//! Dashboard Snapshot Builder
//!
//! Collects the render snapshot through the storage contract.

use life_dash_core::{CoreResult, StorageProvider};

use crate::models::dashboard::DashboardData;

/// Collect everything the host renders: today's mode plus both active
/// collections.
pub async fn dashboard_snapshot(store: &dyn StorageProvider) -> CoreResult<DashboardData> {
    let mode = store.today_mode();
    Ok(DashboardData {
        today_emoji: mode.emoji,
        today_label: mode.label,
        wip: store.wip_items().await?,
        checklist: store.checklist_items().await?,
    })
}
