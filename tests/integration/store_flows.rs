//! Store-level integration tests covering the documented account and task
//! flows, including the renumbering scenario and the credential policies.

use taskvault_core::accounts::{AccountError, AccountStore};
use taskvault_core::config::StoreConfig;
use taskvault_core::digest::Sha256Digest;
use taskvault_core::tasks::{TaskError, TaskStatus, TaskStore};

fn make_stores(dir: &tempfile::TempDir) -> (AccountStore<Sha256Digest>, TaskStore) {
    let config = StoreConfig::under(dir.path());
    (
        AccountStore::sha256(config.account_store_path),
        TaskStore::new(config.task_store_root),
    )
}

#[test]
fn register_add_delete_renumber_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let (accounts, tasks) = make_stores(&dir);

    let owner = accounts.register("alice", "pw1").unwrap();

    let first = tasks.add(&owner, "buy milk").unwrap();
    assert_eq!(first.id, 1);
    let second = tasks.add(&owner, "call bob").unwrap();
    assert_eq!(second.id, 2);

    tasks.delete(&owner, 1).unwrap();

    let remaining = tasks.list(&owner).unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, 1);
    assert_eq!(remaining[0].description, "call bob");
    assert_eq!(remaining[0].status, TaskStatus::Pending);
}

#[test]
fn duplicate_registration_fails_and_first_password_still_authenticates() {
    let dir = tempfile::tempdir().unwrap();
    let (accounts, _) = make_stores(&dir);

    accounts.register("alice", "pw1").unwrap();
    let err = accounts.register("alice", "pw2").unwrap_err();
    assert!(matches!(err, AccountError::AlreadyExists));

    assert!(accounts.authenticate("alice", "pw1").is_ok());
    assert!(matches!(
        accounts.authenticate("alice", "pw2").unwrap_err(),
        AccountError::InvalidCredentials
    ));
}

#[test]
fn authentication_succeeds_only_for_the_registered_pair() {
    let dir = tempfile::tempdir().unwrap();
    let (accounts, _) = make_stores(&dir);
    accounts.register("alice", "pw1").unwrap();

    assert!(accounts.authenticate("alice", "pw1").is_ok());
    for (user, password) in [("alice", "wrong"), ("bob", "pw1"), ("bob", "wrong")] {
        assert!(
            matches!(
                accounts.authenticate(user, password).unwrap_err(),
                AccountError::InvalidCredentials
            ),
            "expected invalid credentials for {user}/{password}"
        );
    }
}

#[test]
fn set_status_on_empty_list_is_not_found_and_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let (_, tasks) = make_stores(&dir);

    let err = tasks
        .set_status("alice", 99, TaskStatus::Completed)
        .unwrap_err();
    assert!(matches!(err, TaskError::NotFound(99)));

    // The failed update must not create or modify any storage.
    assert!(!dir.path().join("tasks").join("alice_tasks.json").exists());
    assert!(tasks.list("alice").unwrap().is_empty());
}

#[test]
fn added_task_round_trips_through_a_fresh_store() {
    let dir = tempfile::tempdir().unwrap();
    let (_, tasks) = make_stores(&dir);
    tasks.add("alice", "water the plants").unwrap();

    // A brand-new store instance over the same root sees the same record.
    let (_, fresh) = make_stores(&dir);
    let loaded = fresh.load("alice").unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].description, "water the plants");
    assert_eq!(loaded[0].status, TaskStatus::Pending);
}

#[test]
fn completing_then_deleting_other_tasks_preserves_status() {
    let dir = tempfile::tempdir().unwrap();
    let (_, tasks) = make_stores(&dir);
    tasks.add("alice", "first").unwrap();
    tasks.add("alice", "second").unwrap();
    tasks.add("alice", "third").unwrap();

    tasks.set_status("alice", 2, TaskStatus::Completed).unwrap();
    tasks.delete("alice", 1).unwrap();

    let remaining = tasks.list("alice").unwrap();
    assert_eq!(remaining.len(), 2);
    // "second" was renumbered to id 1 but kept its status.
    assert_eq!(remaining[0].description, "second");
    assert_eq!(remaining[0].status, TaskStatus::Completed);
    assert_eq!(remaining[1].description, "third");
    assert_eq!(remaining[1].status, TaskStatus::Pending);
}
