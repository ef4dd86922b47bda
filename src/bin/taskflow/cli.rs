//! Command-line surface.

use camino::Utf8PathBuf;
use chrono::{DateTime, NaiveDate, Utc};
use clap::{Args, Parser, Subcommand};
use taskflow::board::domain::ColumnId;
use taskflow::config::ConfigOverrides;

/// Kanban task boards kept in a local snapshot directory.
#[derive(Debug, Parser)]
#[command(name = "taskflow", version)]
pub struct Cli {
    /// Directory holding the snapshot files.
    #[arg(long, global = true, value_name = "PATH")]
    pub data_dir: Option<Utf8PathBuf>,

    /// Emit log lines as JSON.
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Log filter directives, for example `taskflow=debug`.
    #[arg(long, global = true, value_name = "FILTER")]
    pub log_filter: Option<String>,

    /// Operation to perform.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Returns the settings given on the command line.
    #[must_use]
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            data_dir: self.data_dir.clone(),
            log_json: self.log_json,
            log_filter: self.log_filter.clone(),
        }
    }
}

/// Top-level commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sign in with an email and password.
    Login {
        /// Account email.
        #[arg(long)]
        email: String,
        /// Account password.
        #[arg(long)]
        password: String,
    },
    /// Create an account and sign in.
    ///
    /// Accounts live only for this invocation: the user directory is
    /// rebuilt from the demo accounts on every run. The resulting session
    /// is persisted, so later commands still see you signed in.
    Signup {
        /// Account email.
        #[arg(long)]
        email: String,
        /// Account password.
        #[arg(long)]
        password: String,
        /// Display name.
        #[arg(long)]
        name: String,
    },
    /// Sign out.
    Logout,
    /// Show the signed-in user.
    Whoami,
    /// List boards with their progress.
    Dashboard,
    /// Manage boards.
    #[command(subcommand)]
    Board(BoardCommand),
    /// Manage tasks.
    #[command(subcommand)]
    Task(TaskCommand),
}

/// Board commands.
#[derive(Debug, Subcommand)]
pub enum BoardCommand {
    /// Create a board.
    Create {
        /// Board title.
        #[arg(long)]
        title: String,
        /// Board description.
        #[arg(long)]
        description: Option<String>,
    },
    /// Show a board and its columns.
    Show {
        /// Board identifier.
        board: String,
    },
    /// Edit a board's title or description.
    Update {
        /// Board identifier.
        board: String,
        /// New title.
        #[arg(long)]
        title: Option<String>,
        /// New description.
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete a board.
    Delete {
        /// Board identifier.
        board: String,
    },
}

/// Task commands.
#[derive(Debug, Subcommand)]
pub enum TaskCommand {
    /// Create a task on a board.
    Create(CreateTaskArgs),
    /// Show a task.
    Show(TaskRef),
    /// Edit a task.
    Update(UpdateTaskArgs),
    /// Delete a task.
    Delete(TaskRef),
    /// Move a task between columns.
    Move {
        /// Task to move.
        #[command(flatten)]
        task: TaskRef,
        /// Column the task is in.
        #[arg(long)]
        from: ColumnId,
        /// Column to move the task to.
        #[arg(long)]
        to: ColumnId,
    },
}

/// Identifies a task on a board.
#[derive(Debug, Args)]
pub struct TaskRef {
    /// Board identifier.
    pub board: String,
    /// Task identifier.
    pub task: String,
}

/// Arguments for `task create`.
#[derive(Debug, Args)]
pub struct CreateTaskArgs {
    /// Board identifier.
    pub board: String,
    /// Task title.
    #[arg(long)]
    pub title: String,
    /// Task description.
    #[arg(long)]
    pub description: Option<String>,
    /// Column to create the task in.
    #[arg(long, default_value = "todo")]
    pub status: ColumnId,
    /// Assigned user identifier.
    #[arg(long)]
    pub assignee: Option<String>,
    /// Due date as `YYYY-MM-DD`.
    #[arg(long, value_name = "DATE")]
    pub due: Option<NaiveDate>,
    /// Label to attach; repeatable.
    #[arg(long = "label", value_name = "LABEL")]
    pub labels: Vec<String>,
}

/// Arguments for `task update`.
#[derive(Debug, Args)]
pub struct UpdateTaskArgs {
    /// Task to update.
    #[command(flatten)]
    pub task: TaskRef,
    /// New title.
    #[arg(long)]
    pub title: Option<String>,
    /// New description.
    #[arg(long)]
    pub description: Option<String>,
    /// New status; the task moves to the matching column.
    #[arg(long)]
    pub status: Option<ColumnId>,
    /// New assignee.
    #[arg(long, conflicts_with = "unassign")]
    pub assignee: Option<String>,
    /// Remove the assignee.
    #[arg(long)]
    pub unassign: bool,
    /// New due date as `YYYY-MM-DD`.
    #[arg(long, value_name = "DATE", conflicts_with = "clear_due")]
    pub due: Option<NaiveDate>,
    /// Remove the due date.
    #[arg(long)]
    pub clear_due: bool,
    /// Replacement labels; repeatable.
    #[arg(long = "label", value_name = "LABEL")]
    pub labels: Vec<String>,
}

/// Returns the last second of `date` in UTC, the deadline a calendar due
/// date stands for.
#[must_use]
pub fn end_of_day(date: NaiveDate) -> Option<DateTime<Utc>> {
    date.and_hms_opt(23, 59, 59).map(|naive| naive.and_utc())
}
