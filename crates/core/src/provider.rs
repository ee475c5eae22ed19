//! Storage Provider Contract
//!
//! The uniform mutation contract every backend implements. Two backends ship
//! with the workspace: the vault store (markdown documents) and the session
//! store (in-memory key-value state). The host talks only to this trait, so
//! the backends are interchangeable.
//!
//! Index semantics: every method that takes an `index` means the zero-based
//! logical position of the item inside the targeted subset (active vs.
//! completed), counting only rows that belong to that subset. Backends must
//! re-derive the physical location on every call rather than caching offsets.
//! An index outside the subset fails with [`CoreError::NotFound`].
//!
//! All methods are semantically synchronous: each call completes a full
//! read-modify-write before returning, and the observable state afterwards is
//! fully consistent with the ordering invariants.
//!
//! [`CoreError::NotFound`]: crate::error::CoreError::NotFound

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::items::{ChecklistItem, Priority, TodayMode, WipItem};

/// Uniform persistence contract for the dashboard collections.
#[async_trait]
pub trait StorageProvider: Send + Sync {
    // ── WIP operations ─────────────────────────────────────────────────

    /// Active work-in-progress items in display order, ordinals `1..N`.
    async fn wip_items(&self) -> CoreResult<Vec<WipItem>>;

    /// Completed work-in-progress items in append order. The completed subset
    /// carries no ordinal invariant.
    async fn completed_wip_items(&self) -> CoreResult<Vec<WipItem>>;

    /// Append a new item to the end of the active subset with progress 0.
    async fn add_wip(&self, title: &str) -> CoreResult<()>;

    /// Set the category tag of the active item at `index`.
    async fn update_wip_tag(&self, index: usize, tag: &str) -> CoreResult<()>;

    /// Set the progress of the active item at `index`.
    ///
    /// The value is written verbatim; no clamping is applied. Callers are
    /// expected to pass 0-100.
    async fn update_wip_progress(&self, index: usize, progress: u32) -> CoreResult<()>;

    /// Move the active item at `index` to the completed subset and renumber
    /// the remaining active items contiguously from 1.
    async fn complete_wip(&self, index: usize) -> CoreResult<()>;

    /// Delete the active item at `index` and renumber the remainder.
    async fn delete_wip(&self, index: usize) -> CoreResult<()>;

    /// Delete the completed item at `index`. Never triggers renumbering.
    async fn delete_completed_wip(&self, index: usize) -> CoreResult<()>;

    // ── Checklist operations ───────────────────────────────────────────

    /// Active (unchecked) checklist entries for the current week.
    async fn checklist_items(&self) -> CoreResult<Vec<ChecklistItem>>;

    /// Completed checklist entries for the current week, in append order.
    async fn completed_checklist_items(&self) -> CoreResult<Vec<ChecklistItem>>;

    /// Append a new unchecked entry to the end of the active subset.
    async fn add_checklist(&self, text: &str) -> CoreResult<()>;

    /// Check off the active entry at `index` and move it to the completed
    /// subset. One-way; there is no uncheck.
    async fn toggle_checklist(&self, index: usize) -> CoreResult<()>;

    /// Set or clear the priority of the active entry at `index`.
    async fn update_checklist_priority(
        &self,
        index: usize,
        priority: Option<Priority>,
    ) -> CoreResult<()>;

    /// Delete the active entry at `index`.
    async fn delete_checklist(&self, index: usize) -> CoreResult<()>;

    /// Delete the completed entry at `index`.
    async fn delete_completed_checklist(&self, index: usize) -> CoreResult<()>;

    // ── Common ─────────────────────────────────────────────────────────

    /// Dashboard mode for the current day of the week.
    ///
    /// Pure apart from reading the clock; both backends answer from the same
    /// table in [`crate::items::mode_for_weekday`].
    fn today_mode(&self) -> TodayMode;
}
