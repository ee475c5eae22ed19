//! Life Dash - Personal Productivity Dashboard Store
//!
//! Persists two ordered collections - work-in-progress items and weekly
//! checklist entries - as human-editable markdown documents inside a vault,
//! and exposes one uniform mutation contract to two interchangeable backends:
//! a document-backed store and an ephemeral in-memory store. A chat assistant
//! layered on top can apply a single structured directive extracted from
//! free-form delegate output.
//!
//! The host UI is an external collaborator: it calls the storage contract,
//! re-renders from snapshots, and forwards chat messages to the assistant.

pub mod models;
pub mod services;
pub mod storage;

// Re-export the core contract and item model
pub use life_dash_core::{
    mode_for_weekday, ChecklistItem, CoreError, CoreResult, Priority, StorageProvider, TodayMode,
    WipItem,
};

// Re-export the pieces a host wires together
pub use models::{ChatResponse, DashboardData, Directive};
pub use services::{dashboard_snapshot, week_key, AssistantService, DelegateConfig};
pub use storage::{open_store, SessionStore, VaultConfig, VaultStore};
