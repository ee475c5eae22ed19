//! Session Store
//!
//! In-memory implementation of the storage contract for hosts that run
//! without a vault. State lives in an opaque key-value map of JSON values
//! scoped to one host session; there is no textual document encoding and no
//! durability beyond the session.
//!
//! Mirrors the vault store's observable semantics: active WIP ordinals stay
//! contiguous from 1, completed subsets are append-only, and an out-of-range
//! logical index is a `NotFound` error.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{Datelike, Local};
use serde::de::DeserializeOwned;
use serde::Serialize;

use life_dash_core::{
    mode_for_weekday, ChecklistItem, CoreError, CoreResult, Priority, StorageProvider, TodayMode,
    WipItem,
};

const WIP_KEY: &str = "dashboard.wip";
const WIP_COMPLETED_KEY: &str = "dashboard.wipCompleted";
const CHECKLIST_KEY: &str = "dashboard.checklist";

/// Ephemeral key-value storage provider.
#[derive(Debug, Default)]
pub struct SessionStore {
    state: Mutex<HashMap<String, serde_json::Value>>,
}

impl SessionStore {
    /// Create an empty session store.
    pub fn new() -> Self {
        Self::default()
    }

    fn read_list<T: DeserializeOwned>(&self, key: &str) -> CoreResult<Vec<T>> {
        let state = self
            .state
            .lock()
            .map_err(|_| CoreError::internal("session state lock poisoned"))?;
        match state.get(key) {
            Some(value) => Ok(serde_json::from_value(value.clone())?),
            None => Ok(Vec::new()),
        }
    }

    fn write_list<T: Serialize>(&self, key: &str, items: &[T]) -> CoreResult<()> {
        let value = serde_json::to_value(items)?;
        let mut state = self
            .state
            .lock()
            .map_err(|_| CoreError::internal("session state lock poisoned"))?;
        state.insert(key.to_string(), value);
        Ok(())
    }

    /// The checklist is stored as a single list; the active/completed split
    /// is the `completed` flag. Resolve the logical active index to the
    /// position in the full list.
    fn resolve_active_checklist(items: &[ChecklistItem], index: usize) -> CoreResult<usize> {
        items
            .iter()
            .enumerate()
            .filter(|(_, item)| !item.completed)
            .nth(index)
            .map(|(i, _)| i)
            .ok_or_else(|| CoreError::not_found(format!("checklist item index {}", index)))
    }

    fn resolve_completed_checklist(items: &[ChecklistItem], index: usize) -> CoreResult<usize> {
        items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.completed)
            .nth(index)
            .map(|(i, _)| i)
            .ok_or_else(|| CoreError::not_found(format!("checklist item index {}", index)))
    }

    fn renumber(items: &mut [WipItem]) {
        for (i, item) in items.iter_mut().enumerate() {
            item.ordinal = i + 1;
        }
    }

    fn check_wip_index(items: &[WipItem], index: usize) -> CoreResult<()> {
        if index < items.len() {
            Ok(())
        } else {
            Err(CoreError::not_found(format!("wip item index {}", index)))
        }
    }
}

#[async_trait]
impl StorageProvider for SessionStore {
    // ── WIP operations ─────────────────────────────────────────────────

    async fn wip_items(&self) -> CoreResult<Vec<WipItem>> {
        self.read_list(WIP_KEY)
    }

    async fn completed_wip_items(&self) -> CoreResult<Vec<WipItem>> {
        self.read_list(WIP_COMPLETED_KEY)
    }

    async fn add_wip(&self, title: &str) -> CoreResult<()> {
        let mut items: Vec<WipItem> = self.read_list(WIP_KEY)?;
        items.push(WipItem::new(items.len() + 1, title));
        self.write_list(WIP_KEY, &items)
    }

    async fn update_wip_tag(&self, index: usize, tag: &str) -> CoreResult<()> {
        let mut items: Vec<WipItem> = self.read_list(WIP_KEY)?;
        Self::check_wip_index(&items, index)?;
        items[index].category = Some(tag.to_string());
        self.write_list(WIP_KEY, &items)
    }

    async fn update_wip_progress(&self, index: usize, progress: u32) -> CoreResult<()> {
        let mut items: Vec<WipItem> = self.read_list(WIP_KEY)?;
        Self::check_wip_index(&items, index)?;
        // Stored verbatim; the contract does not clamp.
        items[index].progress = progress;
        self.write_list(WIP_KEY, &items)
    }

    async fn complete_wip(&self, index: usize) -> CoreResult<()> {
        let mut items: Vec<WipItem> = self.read_list(WIP_KEY)?;
        Self::check_wip_index(&items, index)?;
        let item = items.remove(index);
        Self::renumber(&mut items);

        let mut completed: Vec<WipItem> = self.read_list(WIP_COMPLETED_KEY)?;
        completed.push(item);
        self.write_list(WIP_KEY, &items)?;
        self.write_list(WIP_COMPLETED_KEY, &completed)
    }

    async fn delete_wip(&self, index: usize) -> CoreResult<()> {
        let mut items: Vec<WipItem> = self.read_list(WIP_KEY)?;
        Self::check_wip_index(&items, index)?;
        items.remove(index);
        Self::renumber(&mut items);
        self.write_list(WIP_KEY, &items)
    }

    async fn delete_completed_wip(&self, index: usize) -> CoreResult<()> {
        let mut completed: Vec<WipItem> = self.read_list(WIP_COMPLETED_KEY)?;
        if index >= completed.len() {
            return Err(CoreError::not_found(format!("wip item index {}", index)));
        }
        completed.remove(index);
        self.write_list(WIP_COMPLETED_KEY, &completed)
    }

    // ── Checklist operations ───────────────────────────────────────────

    async fn checklist_items(&self) -> CoreResult<Vec<ChecklistItem>> {
        let items: Vec<ChecklistItem> = self.read_list(CHECKLIST_KEY)?;
        Ok(items.into_iter().filter(|item| !item.completed).collect())
    }

    async fn completed_checklist_items(&self) -> CoreResult<Vec<ChecklistItem>> {
        let items: Vec<ChecklistItem> = self.read_list(CHECKLIST_KEY)?;
        Ok(items.into_iter().filter(|item| item.completed).collect())
    }

    async fn add_checklist(&self, text: &str) -> CoreResult<()> {
        let mut items: Vec<ChecklistItem> = self.read_list(CHECKLIST_KEY)?;
        items.push(ChecklistItem::new(text));
        self.write_list(CHECKLIST_KEY, &items)
    }

    async fn toggle_checklist(&self, index: usize) -> CoreResult<()> {
        let mut items: Vec<ChecklistItem> = self.read_list(CHECKLIST_KEY)?;
        let at = Self::resolve_active_checklist(&items, index)?;
        items[at].completed = true;
        self.write_list(CHECKLIST_KEY, &items)
    }

    async fn update_checklist_priority(
        &self,
        index: usize,
        priority: Option<Priority>,
    ) -> CoreResult<()> {
        let mut items: Vec<ChecklistItem> = self.read_list(CHECKLIST_KEY)?;
        let at = Self::resolve_active_checklist(&items, index)?;
        items[at].priority = priority;
        self.write_list(CHECKLIST_KEY, &items)
    }

    async fn delete_checklist(&self, index: usize) -> CoreResult<()> {
        let mut items: Vec<ChecklistItem> = self.read_list(CHECKLIST_KEY)?;
        let at = Self::resolve_active_checklist(&items, index)?;
        items.remove(at);
        self.write_list(CHECKLIST_KEY, &items)
    }

    async fn delete_completed_checklist(&self, index: usize) -> CoreResult<()> {
        let mut items: Vec<ChecklistItem> = self.read_list(CHECKLIST_KEY)?;
        let at = Self::resolve_completed_checklist(&items, index)?;
        items.remove(at);
        self.write_list(CHECKLIST_KEY, &items)
    }

    // ── Common ─────────────────────────────────────────────────────────

    fn today_mode(&self) -> TodayMode {
        mode_for_weekday(Local::now().weekday().num_days_from_sunday())
    }
}
