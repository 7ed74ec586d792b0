use std::sync::Arc;

use crate::authz::NavItem;
use crate::config::{self, AppConfig};
use crate::directory::UserDirectory;
use crate::navigation;

/// Shared request state: the account directory and the declared menu.
///
/// Both are loaded once at startup and read-only afterwards; handlers and
/// middleware receive them through the router rather than ambient globals
/// so the gate stays testable in isolation.
#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<UserDirectory>,
    pub nav_tree: Arc<Vec<NavItem>>,
}

impl AppState {
    /// Build state from configuration, falling back to the built-in
    /// development fixtures and menu when no files are configured.
    pub fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        let directory = match &config.gate.users_file {
            Some(path) => UserDirectory::load(path)?,
            None => {
                if !config.is_development() {
                    tracing::warn!(
                        "no GATE_USERS_FILE configured outside development; using fixture accounts"
                    );
                }
                UserDirectory::development()
            }
        };

        let nav_tree = match &config.gate.navigation_file {
            Some(path) => navigation::load(path)?,
            None => navigation::default_tree(),
        };

        tracing::info!(
            "gate state loaded: {} accounts, {} top-level menu entries",
            directory.len(),
            nav_tree.len()
        );

        Ok(Self {
            directory: Arc::new(directory),
            nav_tree: Arc::new(nav_tree),
        })
    }
}

/// Convenience constructor from the global config singleton
pub fn from_global_config() -> anyhow::Result<AppState> {
    AppState::from_config(config::config())
}
