//! Storage Layer
//!
//! The two interchangeable storage backends plus the vault configuration
//! they are constructed from.

use std::sync::Arc;

use life_dash_core::StorageProvider;

pub mod config;
pub mod session;
pub mod vault;

pub use config::{VaultConfig, VAULT_ENV_VAR};
pub use session::SessionStore;
pub use vault::VaultStore;

/// Pick a backend for the host: the vault store when a document root is
/// configured, the ephemeral session store otherwise.
pub fn open_store(config: Option<VaultConfig>) -> Arc<dyn StorageProvider> {
    match config {
        Some(config) => Arc::new(VaultStore::new(config)),
        None => Arc::new(SessionStore::new()),
    }
}
