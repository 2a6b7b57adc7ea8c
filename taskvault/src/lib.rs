//! `TaskVault` client library: configuration and the interactive shell.
//!
//! The binary in `main.rs` wires these together; the modules are exposed
//! here so integration tests can drive the shell with scripted input.

pub mod config;
pub mod shell;
