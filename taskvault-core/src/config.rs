//! Store location configuration.

use std::path::{Path, PathBuf};

/// Filesystem locations for the durable stores.
///
/// Passed explicitly to store constructors; there is no process-wide
/// default or hidden global state.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// File holding the username -> credential digest mapping.
    pub account_store_path: PathBuf,
    /// Directory holding one task list file per username.
    pub task_store_root: PathBuf,
}

impl StoreConfig {
    /// Derives the well-known store locations beneath a data directory:
    /// `users.json` for accounts and `tasks/` for per-user task lists.
    #[must_use]
    pub fn under(data_dir: &Path) -> Self {
        Self {
            account_store_path: data_dir.join("users.json"),
            task_store_root: data_dir.join("tasks"),
        }
    }
}
