//! Life Dash Core
//!
//! Foundational error types, item model, and the storage provider contract
//! for the Life Dash workspace. This crate has zero dependencies on
//! application-level code (vault layout, document codec, assistant).
//!
//! ## Module Organization
//!
//! - `error` - Core error types (`CoreError`, `CoreResult`)
//! - `items` - Dashboard item model (`WipItem`, `ChecklistItem`, `Priority`, `TodayMode`)
//! - `provider` - Uniform persistence contract (`StorageProvider`)
//!
//! ## Design Principles
//!
//! 1. **Zero external dependencies beyond serde/async-trait/thiserror** - keeps build times minimal
//! 2. **Trait-based storage seam** - the host never learns which backend it is talking to
//! 3. **Unidirectional dependency** - this crate depends on nothing else in the workspace

pub mod error;
pub mod items;
pub mod provider;

// ── Error Types ────────────────────────────────────────────────────────
pub use error::{CoreError, CoreResult};

// ── Item Model ─────────────────────────────────────────────────────────
pub use items::{mode_for_weekday, ChecklistItem, Priority, TodayMode, WipItem};

// ── Storage Contract ───────────────────────────────────────────────────
pub use provider::StorageProvider;
