//! Dashboard Item Model
//!
//! Plain-data types shared by every storage backend: work-in-progress items,
//! weekly checklist entries, and the day-of-week mode shown on the dashboard.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Priority level for a checklist entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    P1,
    P2,
    P3,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::P1 => write!(f, "P1"),
            Priority::P2 => write!(f, "P2"),
            Priority::P3 => write!(f, "P3"),
        }
    }
}

impl FromStr for Priority {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "P1" => Ok(Priority::P1),
            "P2" => Ok(Priority::P2),
            "P3" => Ok(Priority::P3),
            other => Err(CoreError::parse(format!("unknown priority: {}", other))),
        }
    }
}

/// A work-in-progress item.
///
/// `ordinal` is the 1-based display position inside the active subset. It is
/// recomputed after every structural change; completed items keep whatever
/// ordinal text they carried when they left the active subset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WipItem {
    /// 1-based position in the active subset
    pub ordinal: usize,
    /// Optional free-text category tag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Item title
    pub title: String,
    /// Progress percentage; written verbatim, callers are trusted to pass 0-100
    pub progress: u32,
}

impl WipItem {
    /// Create a fresh item at the given position with zero progress.
    pub fn new(ordinal: usize, title: impl Into<String>) -> Self {
        Self {
            ordinal,
            category: None,
            title: title.into(),
            progress: 0,
        }
    }
}

/// A weekly checklist entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistItem {
    /// Entry text
    pub text: String,
    /// Whether the entry has been checked off (one-way)
    pub completed: bool,
    /// Optional priority tag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
}

impl ChecklistItem {
    /// Create a fresh unchecked entry.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            completed: false,
            priority: None,
        }
    }
}

/// The dashboard mode for a day of the week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodayMode {
    pub emoji: String,
    pub label: String,
}

/// Mode table entry for a day of the week, Sunday-indexed.
///
/// Both backends report the mode through this single table so that the
/// assistant context snapshot is backend-independent.
pub fn mode_for_weekday(days_from_sunday: u32) -> TodayMode {
    let (emoji, label) = match days_from_sunday % 7 {
        0 => ("🌙", "Rest"),
        1 => ("🔥", "Focus"),
        2 => ("💪", "Execute"),
        3 => ("🎯", "Target"),
        4 => ("🚀", "Velocity"),
        5 => ("🎨", "Create"),
        _ => ("⚡", "Energy"),
    };
    TodayMode {
        emoji: emoji.to_string(),
        label: label.to_string(),
    }
}
