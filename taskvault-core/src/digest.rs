//! One-way credential digest seam.
//!
//! Passwords are never stored or compared in the clear: registration stores
//! a digest, authentication re-computes the digest and compares. The digest
//! function is a trait so it can be swapped without touching the account
//! store logic.

/// Computes a one-way digest of a password for storage and comparison.
pub trait PasswordDigest {
    /// Returns the digest of `password` as a printable string.
    fn digest(&self, password: &str) -> String;
}

/// SHA-256 of the UTF-8 password bytes, rendered as lowercase hex.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Digest;

impl PasswordDigest for Sha256Digest {
    fn digest(&self, password: &str) -> String {
        use sha2::{Digest, Sha256};
        hex::encode(Sha256::digest(password.as_bytes()))
    }
}
