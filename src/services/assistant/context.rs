//! Context Snapshot
//!
//! Renders the store into the fixed textual template the delegate prompt is
//! built from. Only the storage contract is consulted, so the snapshot is
//! identical no matter which backend is active.

use life_dash_core::{CoreResult, StorageProvider};

/// Build the snapshot block: active WIP items, active checklist entries, and
/// today's mode.
pub async fn build_context(store: &dyn StorageProvider) -> CoreResult<String> {
    let wip = store.wip_items().await?;
    let checklist = store.checklist_items().await?;
    let mode = store.today_mode();

    let mut out = String::new();
    out.push_str("## Current Snapshot\n\n");

    out.push_str(&format!("**Work in progress: {}**\n", wip.len()));
    for item in &wip {
        let category = item.category.as_deref().unwrap_or("None");
        out.push_str(&format!(
            "{}. [{}] {} - {}%\n",
            item.ordinal, category, item.title, item.progress
        ));
    }

    out.push_str(&format!("\n**Checklist: {}**\n", checklist.len()));
    for (i, entry) in checklist.iter().enumerate() {
        let priority = entry
            .priority
            .map(|p| format!("[{}] ", p))
            .unwrap_or_default();
        out.push_str(&format!("{}. ⬜ {}{}\n", i + 1, priority, entry.text));
    }

    out.push_str(&format!("\n**Today's mode**\n{} {}\n", mode.emoji, mode.label));

    Ok(out.trim().to_string())
}
