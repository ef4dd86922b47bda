//! Serializable view models handed to the templates.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::auth::domain::User;
use crate::board::domain::{Board, BoardSummary, Column, Task};

const SHORT_DATE: &str = "%b %-d";
const LONG_DATE: &str = "%b %-d, %Y";

#[derive(Debug, Serialize)]
pub(super) struct UserView<'a> {
    id: &'a str,
    name: &'a str,
    email: &'a str,
    role: &'static str,
    avatar: &'a str,
}

impl<'a> UserView<'a> {
    pub(super) fn new(user: &'a User) -> Self {
        Self {
            id: user.id().as_str(),
            name: user.name(),
            email: user.email().as_str(),
            role: user.role().as_str(),
            avatar: user.avatar(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(super) struct BoardHeaderView<'a> {
    id: &'a str,
    title: &'a str,
    description: &'a str,
    total_tasks: usize,
    completed_tasks: usize,
    completion_percent: u8,
}

impl<'a> BoardHeaderView<'a> {
    pub(super) fn new(board: &'a Board, summary: BoardSummary) -> Self {
        Self {
            id: board.id().as_str(),
            title: board.title(),
            description: board.description(),
            total_tasks: summary.total_tasks(),
            completed_tasks: summary.completed_tasks(),
            completion_percent: summary.completion_percent(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(super) struct ColumnView<'a> {
    title: &'static str,
    count: usize,
    tasks: Vec<TaskCardView<'a>>,
}

impl<'a> ColumnView<'a> {
    pub(super) fn new(column: &'a Column, now: DateTime<Utc>) -> Self {
        Self {
            title: column.title(),
            count: column.len(),
            tasks: column
                .tasks()
                .iter()
                .map(|task| TaskCardView::new(task, now))
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
struct TaskCardView<'a> {
    id: &'a str,
    title: &'a str,
    due: Option<String>,
    overdue: bool,
    labels: Vec<&'a str>,
    hidden_labels: usize,
}

/// Labels shown on a board card; the rest collapse into a `+N` marker.
const CARD_LABELS: usize = 2;

impl<'a> TaskCardView<'a> {
    fn new(task: &'a Task, now: DateTime<Utc>) -> Self {
        let mut labels: Vec<&str> = task.labels().iter().collect();
        let hidden_labels = labels.len().saturating_sub(CARD_LABELS);
        labels.truncate(CARD_LABELS);
        Self {
            id: task.id().as_str(),
            title: task.title(),
            due: task.due_date().map(|due| due.format(SHORT_DATE).to_string()),
            overdue: task.is_overdue(now),
            labels,
            hidden_labels,
        }
    }
}

#[derive(Debug, Serialize)]
pub(super) struct TaskDetailView<'a> {
    id: &'a str,
    title: &'a str,
    description: &'a str,
    status: &'static str,
    created_at: String,
    created_by: &'a str,
    assignee: Option<&'a str>,
    due: Option<String>,
    overdue: bool,
    labels: Vec<&'a str>,
}

impl<'a> TaskDetailView<'a> {
    pub(super) fn new(task: &'a Task, now: DateTime<Utc>) -> Self {
        Self {
            id: task.id().as_str(),
            title: task.title(),
            description: task.description(),
            status: task.status().title(),
            created_at: task.created_at().format(LONG_DATE).to_string(),
            created_by: task.created_by().as_str(),
            assignee: task.assignee_id().map(|id| id.as_str()),
            due: task.due_date().map(|due| due.format(LONG_DATE).to_string()),
            overdue: task.is_overdue(now),
            labels: task.labels().iter().collect(),
        }
    }
}
