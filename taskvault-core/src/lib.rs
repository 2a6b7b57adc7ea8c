//! Persistence and state-consistency layer for `TaskVault`.
//!
//! Two independent stores share only the username as an identity key:
//! [`accounts::AccountStore`] maps usernames to one-way credential digests,
//! and [`tasks::TaskStore`] keeps one ordered task list per username. Both
//! follow the same durable contract: load the whole record, mutate in
//! memory, rewrite the whole record. See [`storage`] for the details of
//! that contract and its single-process assumptions.

pub mod accounts;
pub mod config;
pub mod digest;
pub mod storage;
pub mod tasks;
