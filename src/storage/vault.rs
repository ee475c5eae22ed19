//! Vault Store
//!
//! Document-backed implementation of the storage contract. Every call reads
//! the relevant document, decodes it, mutates the line list in memory, and
//! rewrites the whole document. Logical indexes are re-derived by a fresh
//! top-to-bottom scan on every call.
//!
//! The WIP document lives at a fixed path and is never auto-provisioned; a
//! missing file is a `DocumentMissing` error. The weekly checklist document
//! is keyed by the ISO week of "now" at call time and is provisioned with a
//! template on first touch.
//!
//! Concurrency: ownership of a document is per-call within one process. Two
//! processes rewriting the same document race with last-write-wins; this
//! store deliberately implements no file locking or versioning.

use std::fs;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{Datelike, Local};
use tracing::debug;

use life_dash_core::{
    mode_for_weekday, ChecklistItem, CoreError, CoreResult, Priority, StorageProvider, TodayMode,
    WipItem,
};

use crate::services::document::{
    format_checklist_row, format_wip_row, Document, CHECKLIST_COMPLETED_MARKER,
    CHECKLIST_SECTION_HEADING, WIP_COMPLETED_MARKER, WIP_SECTION_HEADING,
};
use crate::services::weekly::WeeklyLocator;
use crate::storage::config::VaultConfig;

/// Markdown-vault-backed storage provider.
#[derive(Debug)]
pub struct VaultStore {
    config: VaultConfig,
}

impl VaultStore {
    /// Create a store over an explicit vault configuration.
    pub fn new(config: VaultConfig) -> Self {
        Self { config }
    }

    fn load_wip(&self) -> CoreResult<Document> {
        let path = self.config.wip_path();
        if !path.exists() {
            return Err(CoreError::document_missing(path.display().to_string()));
        }
        let text = fs::read_to_string(&path)?;
        Ok(Document::parse(&text, WIP_COMPLETED_MARKER))
    }

    fn save_wip(&self, doc: &Document) -> CoreResult<()> {
        write_document(&self.config.wip_path(), &doc.render())
    }

    fn load_weekly(&self) -> CoreResult<(PathBuf, Document)> {
        let path = WeeklyLocator::resolve(&self.config)?;
        let text = fs::read_to_string(&path)?;
        Ok((path, Document::parse(&text, CHECKLIST_COMPLETED_MARKER)))
    }

    fn wip_not_found(index: usize) -> CoreError {
        CoreError::not_found(format!("wip item index {}", index))
    }

    fn checklist_not_found(index: usize) -> CoreError {
        CoreError::not_found(format!("checklist item index {}", index))
    }
}

/// Full rewrite via a temp file and rename, so a crashed writer never leaves
/// a truncated document behind.
fn write_document(path: &Path, content: &str) -> CoreResult<()> {
    let temp_path = path.with_extension("md.tmp");
    fs::write(&temp_path, content)?;
    fs::rename(&temp_path, path)?;
    debug!(path = %path.display(), bytes = content.len(), "rewrote document");
    Ok(())
}

#[async_trait]
impl StorageProvider for VaultStore {
    // ── WIP operations ─────────────────────────────────────────────────

    async fn wip_items(&self) -> CoreResult<Vec<WipItem>> {
        Ok(self.load_wip()?.wip_items())
    }

    async fn completed_wip_items(&self) -> CoreResult<Vec<WipItem>> {
        Ok(self.load_wip()?.completed_wip_items())
    }

    async fn add_wip(&self, title: &str) -> CoreResult<()> {
        let mut doc = self.load_wip()?;
        let next = doc.wip_items().len() + 1;
        doc.append_active_row(format_wip_row(next, None, title, 0), WIP_SECTION_HEADING);
        doc.renumber_wip();
        self.save_wip(&doc)
    }

    async fn update_wip_tag(&self, index: usize, tag: &str) -> CoreResult<()> {
        let mut doc = self.load_wip()?;
        let items = doc.wip_items();
        let item = items.get(index).ok_or_else(|| Self::wip_not_found(index))?;
        let at = doc
            .find_active_wip(index)
            .ok_or_else(|| Self::wip_not_found(index))?;
        doc.replace_line(
            at,
            format_wip_row(item.ordinal, Some(tag), &item.title, item.progress),
        );
        self.save_wip(&doc)
    }

    async fn update_wip_progress(&self, index: usize, progress: u32) -> CoreResult<()> {
        let mut doc = self.load_wip()?;
        let items = doc.wip_items();
        let item = items.get(index).ok_or_else(|| Self::wip_not_found(index))?;
        let at = doc
            .find_active_wip(index)
            .ok_or_else(|| Self::wip_not_found(index))?;
        // Written verbatim; the contract does not clamp.
        doc.replace_line(
            at,
            format_wip_row(item.ordinal, item.category.as_deref(), &item.title, progress),
        );
        self.save_wip(&doc)
    }

    async fn complete_wip(&self, index: usize) -> CoreResult<()> {
        let mut doc = self.load_wip()?;
        let at = doc
            .find_active_wip(index)
            .ok_or_else(|| Self::wip_not_found(index))?;
        doc.move_to_completed(at, |raw| raw.to_string());
        doc.renumber_wip();
        self.save_wip(&doc)
    }

    async fn delete_wip(&self, index: usize) -> CoreResult<()> {
        let mut doc = self.load_wip()?;
        let at = doc
            .find_active_wip(index)
            .ok_or_else(|| Self::wip_not_found(index))?;
        doc.remove_line(at);
        doc.renumber_wip();
        self.save_wip(&doc)
    }

    async fn delete_completed_wip(&self, index: usize) -> CoreResult<()> {
        let mut doc = self.load_wip()?;
        let at = doc
            .find_completed_wip(index)
            .ok_or_else(|| Self::wip_not_found(index))?;
        doc.remove_line(at);
        self.save_wip(&doc)
    }

    // ── Checklist operations ───────────────────────────────────────────

    async fn checklist_items(&self) -> CoreResult<Vec<ChecklistItem>> {
        let (_, doc) = self.load_weekly()?;
        Ok(doc.checklist_items())
    }

    async fn completed_checklist_items(&self) -> CoreResult<Vec<ChecklistItem>> {
        let (_, doc) = self.load_weekly()?;
        Ok(doc.completed_checklist_items())
    }

    async fn add_checklist(&self, text: &str) -> CoreResult<()> {
        let (path, mut doc) = self.load_weekly()?;
        doc.append_active_row(
            format_checklist_row(false, None, text),
            CHECKLIST_SECTION_HEADING,
        );
        write_document(&path, &doc.render())
    }

    async fn toggle_checklist(&self, index: usize) -> CoreResult<()> {
        let (path, mut doc) = self.load_weekly()?;
        let at = doc
            .find_active_checklist(index)
            .ok_or_else(|| Self::checklist_not_found(index))?;
        doc.move_to_completed(at, |raw| raw.replacen("[ ]", "[x]", 1));
        write_document(&path, &doc.render())
    }

    async fn update_checklist_priority(
        &self,
        index: usize,
        priority: Option<Priority>,
    ) -> CoreResult<()> {
        let (path, mut doc) = self.load_weekly()?;
        let items = doc.checklist_items();
        let item = items
            .get(index)
            .ok_or_else(|| Self::checklist_not_found(index))?;
        let at = doc
            .find_active_checklist(index)
            .ok_or_else(|| Self::checklist_not_found(index))?;
        doc.replace_line(at, format_checklist_row(false, priority, &item.text));
        write_document(&path, &doc.render())
    }

    async fn delete_checklist(&self, index: usize) -> CoreResult<()> {
        let (path, mut doc) = self.load_weekly()?;
        let at = doc
            .find_active_checklist(index)
            .ok_or_else(|| Self::checklist_not_found(index))?;
        doc.remove_line(at);
        write_document(&path, &doc.render())
    }

    async fn delete_completed_checklist(&self, index: usize) -> CoreResult<()> {
        let (path, mut doc) = self.load_weekly()?;
        let at = doc
            .find_completed_checklist(index)
            .ok_or_else(|| Self::checklist_not_found(index))?;
        doc.remove_line(at);
        write_document(&path, &doc.render())
    }

    // ── Common ─────────────────────────────────────────────────────────

    fn today_mode(&self) -> TodayMode {
        mode_for_weekday(Local::now().weekday().num_days_from_sunday())
    }
}
