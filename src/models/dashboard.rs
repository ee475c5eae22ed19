//! Dashboard Snapshot
//!
//! The plain-data snapshot a host renders from. Built only through the
//! storage contract, so it is identical for both backends.

use serde::{Deserialize, Serialize};

use life_dash_core::{ChecklistItem, WipItem};

/// Everything a host needs to render the dashboard panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub today_emoji: String,
    pub today_label: String,
    /// Active WIP items in display order
    pub wip: Vec<WipItem>,
    /// Active (unchecked) checklist entries for the current week
    pub checklist: Vec<ChecklistItem>,
}
