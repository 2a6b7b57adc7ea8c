//! `TaskVault` — password-gated local task tracker.
//!
//! Launches the interactive menu shell over JSON-backed account and task
//! stores. Configuration via CLI flags, environment variables, or config
//! file (`~/.config/taskvault/config.toml`).
//!
//! ```bash
//! # Run with storage in the current directory
//! cargo run --bin taskvault
//!
//! # Keep storage elsewhere
//! cargo run --bin taskvault -- --data-dir ~/.local/share/taskvault
//!
//! # Or via environment variable
//! TASKVAULT_DATA=~/.local/share/taskvault cargo run --bin taskvault
//! ```

use std::io;
use std::path::Path;

use clap::Parser;
use tracing_appender::non_blocking::WorkerGuard;

use taskvault::config::{AppConfig, CliArgs};
use taskvault::shell::Shell;
use taskvault_core::accounts::AccountStore;
use taskvault_core::tasks::TaskStore;

fn main() -> io::Result<()> {
    let cli = CliArgs::parse();

    // Load and resolve configuration (CLI args > config file > defaults).
    let config = match AppConfig::load(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading configuration: {e}");
            std::process::exit(1);
        }
    };

    // Logs go to a file, never stdout — stdout belongs to the menus.
    let _log_guard = init_logging(&config.log_level, config.log_file.as_deref());

    tracing::info!(data_dir = %config.data_dir.display(), "taskvault starting");

    let stores = config.store_config();
    let accounts = AccountStore::sha256(stores.account_store_path);
    let tasks = TaskStore::new(stores.task_store_root);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let result = Shell::new(stdin.lock(), stdout.lock(), accounts, tasks).run();

    tracing::info!("taskvault exiting");
    result
}

/// Initialize file-based logging.
///
/// Returns a [`WorkerGuard`] that must be held until shutdown to ensure all
/// buffered log entries are flushed.
fn init_logging(level: &str, file_path: Option<&Path>) -> Option<WorkerGuard> {
    let default_path = std::env::temp_dir().join("taskvault.log");
    let log_path = file_path.unwrap_or(&default_path);

    let log_dir = log_path.parent()?;
    let file_name = log_path.file_name()?.to_str()?;

    let file_appender = tracing_appender::rolling::never(log_dir, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(env_filter)
        .with_ansi(false)
        .init();

    Some(guard)
}
