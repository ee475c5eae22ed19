//! Vault Configuration
//!
//! The vault root is an explicit value injected into each store at
//! construction; nothing in the workspace keeps ambient global state about
//! where documents live. `discover` checks an environment override first,
//! then a well-known `vault` folder under the home directory.

use std::env;
use std::path::{Path, PathBuf};

use tracing::info;

use life_dash_core::{CoreError, CoreResult};

/// Environment variable that overrides vault discovery.
pub const VAULT_ENV_VAR: &str = "LIFE_DASH_VAULT";

/// Location of the dashboard documents inside a vault directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaultConfig {
    root: PathBuf,
}

impl VaultConfig {
    /// Configuration for an explicit vault root.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Discover a vault root: `$LIFE_DASH_VAULT` if it points at an existing
    /// directory, otherwise `~/vault` if present.
    pub fn discover() -> CoreResult<Self> {
        if let Ok(configured) = env::var(VAULT_ENV_VAR) {
            let path = PathBuf::from(&configured);
            if path.is_dir() {
                info!(path = %path.display(), "vault found via {}", VAULT_ENV_VAR);
                return Ok(Self::new(path));
            }
        }

        if let Some(home) = dirs::home_dir() {
            let candidate = home.join("vault");
            if candidate.is_dir() {
                info!(path = %candidate.display(), "vault found under home directory");
                return Ok(Self::new(candidate));
            }
        }

        Err(CoreError::config(format!(
            "no vault directory found; set {} or create ~/vault",
            VAULT_ENV_VAR
        )))
    }

    /// The vault root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The fixed, non-dated WIP document.
    pub fn wip_path(&self) -> PathBuf {
        self.root.join("projects").join("current-wip.md")
    }

    /// Directory holding the weekly checklist documents.
    pub fn weekly_dir(&self) -> PathBuf {
        self.root.join("journal").join("weekly")
    }
}
