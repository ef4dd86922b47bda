//! Dashboard progress figures for a board.

use serde::{Deserialize, Serialize};

/// Task counts and completion for a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSummary {
    total_tasks: usize,
    completed_tasks: usize,
    completion_percent: u8,
}

impl BoardSummary {
    /// Computes a summary from task counts.
    ///
    /// The percentage is rounded half up and is zero for an empty board.
    #[must_use]
    pub fn new(total_tasks: usize, completed_tasks: usize) -> Self {
        let completed = completed_tasks.min(total_tasks);
        let percent = completed
            .saturating_mul(200)
            .saturating_add(total_tasks)
            .checked_div(total_tasks.saturating_mul(2))
            .unwrap_or(0);
        Self {
            total_tasks,
            completed_tasks: completed,
            completion_percent: u8::try_from(percent).unwrap_or(100),
        }
    }

    /// Returns the number of tasks on the board.
    #[must_use]
    pub const fn total_tasks(self) -> usize {
        self.total_tasks
    }

    /// Returns the number of tasks in the done column.
    #[must_use]
    pub const fn completed_tasks(self) -> usize {
        self.completed_tasks
    }

    /// Returns the rounded completion percentage.
    #[must_use]
    pub const fn completion_percent(self) -> u8 {
        self.completion_percent
    }
}
