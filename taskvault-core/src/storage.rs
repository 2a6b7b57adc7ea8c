//! Shared JSON persistence helpers.
//!
//! Both stores use the same load-whole-file, mutate, rewrite-whole-file
//! cycle. A missing file is a valid empty state, not an error. Writes are
//! atomic-enough for a single process only; nothing here guards against
//! concurrent external writers touching the same files.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Errors raised by the durable storage layer.
///
/// A storage fault aborts the current operation but never the process;
/// callers surface the message and return to the menu loop.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Failed to read a storage file.
    #[error("failed to read {path}: {source}")]
    Read {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to write a storage file or create its parent directory.
    #[error("failed to write {path}: {source}")]
    Write {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A storage file exists but does not contain valid JSON.
    #[error("malformed storage file {path}: {source}")]
    Parse {
        /// Path of the malformed file.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },

    /// A record could not be serialized to JSON.
    #[error("failed to serialize record: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Loads one JSON record from `path`.
///
/// Returns `Ok(None)` if the file does not exist yet.
///
/// # Errors
///
/// Returns [`StorageError::Read`] on I/O faults other than a missing file,
/// or [`StorageError::Parse`] if the file contents are not valid JSON.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, StorageError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(StorageError::Read {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };

    serde_json::from_str(&contents)
        .map(Some)
        .map_err(|e| StorageError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
}

/// Serializes `value` and rewrites the whole record at `path`.
///
/// The parent directory is created if it does not exist yet, so stores can
/// be pointed at a fresh data directory without a bootstrap step.
///
/// # Errors
///
/// Returns [`StorageError::Serialize`] if the value cannot be encoded, or
/// [`StorageError::Write`] if the directory or file cannot be written.
pub fn save_json<T: Serialize>(path: &Path, value: &T) -> Result<(), StorageError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|e| StorageError::Write {
            path: path.to_path_buf(),
            source: e,
        })?;
    }

    let contents = serde_json::to_string(value).map_err(StorageError::Serialize)?;
    std::fs::write(path, contents).map_err(|e| StorageError::Write {
        path: path.to_path_buf(),
        source: e,
    })
}
