//! Account registration and authentication.
//!
//! The account store maps usernames to one-way credential digests in a
//! single JSON file. Every successful registration rewrites the whole
//! mapping; see [`crate::storage`] for the persistence contract. Accounts
//! are never mutated or deleted once created.

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::digest::{PasswordDigest, Sha256Digest};
use crate::storage::{self, StorageError};

/// Errors that can occur during account operations.
#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    /// Usernames must be non-empty.
    #[error("username cannot be empty")]
    InvalidUsername,

    /// Registration collision: the username is already taken.
    #[error("username already exists")]
    AlreadyExists,

    /// Authentication failure. Covers both unknown usernames and wrong
    /// passwords so callers cannot tell which one occurred.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// The durable account mapping could not be read or written.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Username -> credential digest store backed by one JSON file.
///
/// A `BTreeMap` keeps the on-disk record deterministic across rewrites.
pub struct AccountStore<D: PasswordDigest> {
    path: PathBuf,
    digest: D,
}

impl AccountStore<Sha256Digest> {
    /// Creates a store using the default SHA-256 digest.
    #[must_use]
    pub const fn sha256(path: PathBuf) -> Self {
        Self::new(path, Sha256Digest)
    }
}

impl<D: PasswordDigest> AccountStore<D> {
    /// Creates a store with a custom digest implementation.
    pub const fn new(path: PathBuf, digest: D) -> Self {
        Self { path, digest }
    }

    /// Registers a new account and persists the full mapping.
    ///
    /// Returns the registered username so the caller can open a session
    /// with it directly.
    ///
    /// # Errors
    ///
    /// Returns [`AccountError::InvalidUsername`] for an empty username,
    /// [`AccountError::AlreadyExists`] if the username is taken, or
    /// [`AccountError::Storage`] if the mapping cannot be read or written.
    pub fn register(&self, username: &str, password: &str) -> Result<String, AccountError> {
        if username.is_empty() {
            return Err(AccountError::InvalidUsername);
        }

        let mut accounts = self.load()?;
        if accounts.contains_key(username) {
            return Err(AccountError::AlreadyExists);
        }

        accounts.insert(username.to_string(), self.digest.digest(password));
        storage::save_json(&self.path, &accounts)?;
        tracing::info!(username, "account registered");
        Ok(username.to_string())
    }

    /// Verifies a username/password pair.
    ///
    /// Returns the username on success, for use as the task list owner.
    ///
    /// # Errors
    ///
    /// Returns [`AccountError::InvalidCredentials`] if the username is
    /// unknown or the password does not match; the two cases are
    /// indistinguishable by design. Returns [`AccountError::Storage`] if
    /// the mapping cannot be read.
    pub fn authenticate(&self, username: &str, password: &str) -> Result<String, AccountError> {
        // The candidate digest is computed before the lookup so the
        // unknown-username and wrong-password paths do the same work.
        let candidate = self.digest.digest(password);
        let accounts = self.load()?;

        match accounts.get(username) {
            Some(stored) if *stored == candidate => {
                tracing::debug!(username, "authentication succeeded");
                Ok(username.to_string())
            }
            _ => {
                tracing::debug!(username, "authentication failed");
                Err(AccountError::InvalidCredentials)
            }
        }
    }

    /// Loads the full username -> digest mapping, empty if none exists yet.
    fn load(&self) -> Result<BTreeMap<String, String>, AccountError> {
        Ok(storage::load_json(&self.path)?.unwrap_or_default())
    }
}
