//! Per-username task lists with dense sequential ids.
//!
//! Each owner has one JSON file holding an ordered list of tasks. Ids are
//! always a contiguous 1..N sequence in insertion order, scoped per owner;
//! there is no global id space. `add` derives the next id from the current
//! list length, which is only valid because `delete` renumbers the
//! survivors — the two operations maintain the invariant together.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::storage::{self, StorageError};

/// Status of a task.
///
/// Serialized as `"Pending"` / `"Completed"` in the on-disk record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    /// Task has been created but not finished.
    Pending,
    /// Task has been marked as done.
    Completed,
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "Pending"),
            Self::Completed => write!(f, "Completed"),
        }
    }
}

/// A single task owned by one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Position in the owner's list; always contiguous starting at 1.
    pub id: usize,
    /// Free-form task description.
    pub description: String,
    /// Current status.
    pub status: TaskStatus,
}

/// Errors that can occur during task operations.
#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    /// No task with the given id exists in the owner's list.
    #[error("task not found: {0}")]
    NotFound(usize),

    /// The owner's task list could not be read or written.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Per-username task list store, one JSON file per owner.
///
/// The file name is derived deterministically from the owner's username,
/// so the store needs no index of its own.
pub struct TaskStore {
    root: PathBuf,
}

impl TaskStore {
    /// Creates a store rooted at the given directory.
    ///
    /// The directory is created lazily on the first write.
    #[must_use]
    pub const fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Loads the owner's task list. A missing file is an empty list, not
    /// an error.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::Storage`] if an existing file cannot be read
    /// or parsed.
    pub fn load(&self, owner: &str) -> Result<Vec<Task>, TaskError> {
        Ok(storage::load_json(&self.task_file(owner))?.unwrap_or_default())
    }

    /// Appends a new pending task and persists the whole list.
    ///
    /// The id is derived from the current list length; see the module
    /// docs for why this stays valid across deletions.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::Storage`] if the list cannot be read or
    /// written.
    pub fn add(&self, owner: &str, description: &str) -> Result<Task, TaskError> {
        let mut tasks = self.load(owner)?;
        let task = Task {
            id: tasks.len() + 1,
            description: description.to_string(),
            status: TaskStatus::Pending,
        };
        tasks.push(task.clone());
        storage::save_json(&self.task_file(owner), &tasks)?;
        tracing::debug!(owner, id = task.id, "task added");
        Ok(task)
    }

    /// Read-only view of the owner's tasks in id order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::Storage`] if an existing file cannot be read
    /// or parsed.
    pub fn list(&self, owner: &str) -> Result<Vec<Task>, TaskError> {
        self.load(owner)
    }

    /// Sets the status of the task with the given id and persists the
    /// whole list.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::NotFound`] if no task has that id (persisted
    /// state is left untouched), or [`TaskError::Storage`] on read/write
    /// faults.
    pub fn set_status(&self, owner: &str, id: usize, status: TaskStatus) -> Result<(), TaskError> {
        let mut tasks = self.load(owner)?;
        let task = tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(TaskError::NotFound(id))?;
        task.status = status;
        storage::save_json(&self.task_file(owner), &tasks)?;
        tracing::debug!(owner, id, status = %status, "task status updated");
        Ok(())
    }

    /// Deletes the task with the given id, renumbers the survivors 1..N
    /// in their current order, and persists the whole list.
    ///
    /// An absent id is a no-op, not an error. Renumbering restores the
    /// dense id invariant that `add` relies on.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::Storage`] if the list cannot be read or
    /// written.
    pub fn delete(&self, owner: &str, id: usize) -> Result<(), TaskError> {
        let mut tasks = self.load(owner)?;
        tasks.retain(|t| t.id != id);
        for (index, task) in tasks.iter_mut().enumerate() {
            task.id = index + 1;
        }
        storage::save_json(&self.task_file(owner), &tasks)?;
        tracing::debug!(owner, id, "task deleted");
        Ok(())
    }

    /// File holding the given owner's task list.
    fn task_file(&self, owner: &str) -> PathBuf {
        self.root.join(format!("{owner}_tasks.json"))
    }
}
