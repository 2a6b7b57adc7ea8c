//! Interactive menu shell over the account and task stores.
//!
//! Two menus map one-to-one onto the core API: pre-auth Register / Login /
//! Exit, and the post-auth task menu Add / View / Mark Completed / Delete /
//! Logout. Every core error is rendered as a single user-facing line and
//! never escapes the current menu iteration; a storage fault aborts the
//! operation, not the session. No retries anywhere — the user retries
//! manually.
//!
//! The shell is generic over its I/O streams so tests can drive it with
//! in-memory buffers instead of stdin/stdout.

use std::io::{BufRead, Write};

use taskvault_core::accounts::{AccountError, AccountStore};
use taskvault_core::digest::PasswordDigest;
use taskvault_core::tasks::{TaskError, TaskStatus, TaskStore};

/// Errors from caller-side input validation.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum InputError {
    /// Task ids must be entered as positive integers.
    #[error("invalid input: expected a numeric task id")]
    InvalidId,
}

/// Parses a task id entered by the user.
///
/// Validation happens before any store operation so malformed input never
/// touches persisted state.
///
/// # Errors
///
/// Returns [`InputError::InvalidId`] if the input is not a non-negative
/// integer.
pub fn parse_task_id(raw: &str) -> Result<usize, InputError> {
    raw.trim().parse().map_err(|_| InputError::InvalidId)
}

/// The interactive session shell.
///
/// Reads menu choices and field values from `input`, writes prompts and
/// results to `output`, and calls into the two stores. One authenticated
/// user at a time; logging out returns to the pre-auth menu.
pub struct Shell<R, W, D: PasswordDigest> {
    input: R,
    output: W,
    accounts: AccountStore<D>,
    tasks: TaskStore,
}

impl<R: BufRead, W: Write, D: PasswordDigest> Shell<R, W, D> {
    /// Creates a shell over the given streams and stores.
    pub const fn new(input: R, output: W, accounts: AccountStore<D>, tasks: TaskStore) -> Self {
        Self {
            input,
            output,
            accounts,
            tasks,
        }
    }

    /// Runs the pre-auth menu until the user exits or input ends.
    ///
    /// # Errors
    ///
    /// Returns an error only if the I/O streams themselves fail; store
    /// errors are rendered and swallowed.
    pub fn run(&mut self) -> std::io::Result<()> {
        loop {
            writeln!(self.output)?;
            writeln!(self.output, "Task Manager")?;
            writeln!(self.output, "1. Register")?;
            writeln!(self.output, "2. Login")?;
            writeln!(self.output, "3. Exit")?;
            let Some(choice) = self.prompt("Choose an option: ")? else {
                return Ok(());
            };
            match choice.as_str() {
                "1" => {
                    if let Some(user) = self.register()? {
                        self.task_menu(&user)?;
                    }
                }
                "2" => {
                    if let Some(user) = self.login()? {
                        self.task_menu(&user)?;
                    }
                }
                "3" => {
                    writeln!(self.output, "Goodbye!")?;
                    return Ok(());
                }
                _ => writeln!(self.output, "Invalid choice.")?,
            }
        }
    }

    /// Registration flow. Returns the new username on success so the
    /// caller drops straight into the task menu, same as login.
    fn register(&mut self) -> std::io::Result<Option<String>> {
        let Some(username) = self.prompt("Choose a username: ")? else {
            return Ok(None);
        };
        let Some(password) = self.prompt("Choose a password: ")? else {
            return Ok(None);
        };

        match self.accounts.register(&username, &password) {
            Ok(user) => {
                writeln!(self.output, "Registration successful!")?;
                Ok(Some(user))
            }
            Err(e) => {
                if matches!(e, AccountError::Storage(_)) {
                    tracing::warn!(error = %e, "registration aborted by storage fault");
                }
                writeln!(self.output, "{e}")?;
                Ok(None)
            }
        }
    }

    /// Login flow. Returns the authenticated username on success.
    fn login(&mut self) -> std::io::Result<Option<String>> {
        let Some(username) = self.prompt("Username: ")? else {
            return Ok(None);
        };
        let Some(password) = self.prompt("Password: ")? else {
            return Ok(None);
        };

        match self.accounts.authenticate(&username, &password) {
            Ok(user) => {
                writeln!(self.output, "Login successful!")?;
                Ok(Some(user))
            }
            Err(e) => {
                if matches!(e, AccountError::Storage(_)) {
                    tracing::warn!(error = %e, "login aborted by storage fault");
                }
                writeln!(self.output, "{e}")?;
                Ok(None)
            }
        }
    }

    /// Runs the task menu for one authenticated owner until logout.
    fn task_menu(&mut self, owner: &str) -> std::io::Result<()> {
        loop {
            writeln!(self.output)?;
            writeln!(self.output, "Task Menu - logged in as {owner}")?;
            writeln!(self.output, "1. Add Task")?;
            writeln!(self.output, "2. View Tasks")?;
            writeln!(self.output, "3. Mark Task as Completed")?;
            writeln!(self.output, "4. Delete Task")?;
            writeln!(self.output, "5. Logout")?;
            let Some(choice) = self.prompt("Choose an option: ")? else {
                return Ok(());
            };
            match choice.as_str() {
                "1" => self.add_task(owner)?,
                "2" => self.view_tasks(owner)?,
                "3" => self.complete_task(owner)?,
                "4" => self.delete_task(owner)?,
                "5" => {
                    writeln!(self.output, "Logged out.")?;
                    return Ok(());
                }
                _ => writeln!(self.output, "Invalid option.")?,
            }
        }
    }

    fn add_task(&mut self, owner: &str) -> std::io::Result<()> {
        let Some(description) = self.prompt("Enter task description: ")? else {
            return Ok(());
        };
        match self.tasks.add(owner, &description) {
            Ok(_) => writeln!(self.output, "Task added."),
            Err(e) => self.report_task_error(&e),
        }
    }

    fn view_tasks(&mut self, owner: &str) -> std::io::Result<()> {
        match self.tasks.list(owner) {
            Ok(tasks) if tasks.is_empty() => writeln!(self.output, "No tasks found."),
            Ok(tasks) => {
                for task in tasks {
                    writeln!(self.output, "{}. {} - {}", task.id, task.description, task.status)?;
                }
                Ok(())
            }
            Err(e) => self.report_task_error(&e),
        }
    }

    fn complete_task(&mut self, owner: &str) -> std::io::Result<()> {
        self.view_tasks(owner)?;
        let Some(raw) = self.prompt("Enter task ID to mark as completed: ")? else {
            return Ok(());
        };
        let id = match parse_task_id(&raw) {
            Ok(id) => id,
            Err(e) => return writeln!(self.output, "{e}"),
        };
        match self.tasks.set_status(owner, id, TaskStatus::Completed) {
            Ok(()) => writeln!(self.output, "Task marked as completed."),
            Err(e) => self.report_task_error(&e),
        }
    }

    fn delete_task(&mut self, owner: &str) -> std::io::Result<()> {
        self.view_tasks(owner)?;
        let Some(raw) = self.prompt("Enter task ID to delete: ")? else {
            return Ok(());
        };
        let id = match parse_task_id(&raw) {
            Ok(id) => id,
            Err(e) => return writeln!(self.output, "{e}"),
        };
        match self.tasks.delete(owner, id) {
            Ok(()) => writeln!(self.output, "Task deleted."),
            Err(e) => self.report_task_error(&e),
        }
    }

    /// Renders a task store error as one user-facing line.
    fn report_task_error(&mut self, e: &TaskError) -> std::io::Result<()> {
        if matches!(e, TaskError::Storage(_)) {
            tracing::warn!(error = %e, "task operation aborted by storage fault");
        }
        writeln!(self.output, "{e}")
    }

    /// Writes a prompt, flushes, and reads one trimmed line.
    ///
    /// Returns `None` at end of input so scripted and piped sessions
    /// terminate cleanly instead of spinning on an empty stream.
    fn prompt(&mut self, label: &str) -> std::io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
