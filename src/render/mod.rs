//! Text rendering of users, boards, and tasks for the command line.
//!
//! Views are `minijinja` templates fed with small serializable view models,
//! so the domain types stay free of presentation concerns.

mod templates;
mod views;

use chrono::{DateTime, Utc};
use minijinja::{Environment, context};
use thiserror::Error;

use crate::auth::domain::User;
use crate::board::domain::{Board, BoardSummary, Task};
use views::{BoardHeaderView, ColumnView, TaskDetailView, UserView};

/// Errors raised while rendering a view.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// A template failed to compile or render.
    #[error("failed to render {view} view: {reason}")]
    Template {
        /// Name of the view.
        view: &'static str,
        /// Underlying template engine message.
        reason: String,
    },
}

/// Result type for rendering.
pub type RenderResult<T> = Result<T, RenderError>;

/// Renders plain-text views.
#[derive(Debug)]
pub struct Renderer {
    environment: Environment<'static>,
}

impl Renderer {
    /// Compiles the view templates.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Template`] when a template fails to compile.
    pub fn new() -> RenderResult<Self> {
        let mut environment = Environment::new();
        environment.set_trim_blocks(true);
        environment.set_lstrip_blocks(true);
        for (name, source) in [
            ("user", templates::USER),
            ("dashboard", templates::DASHBOARD),
            ("board", templates::BOARD),
            ("task", templates::TASK),
        ] {
            environment
                .add_template(name, source)
                .map_err(|err| template_error(name, &err))?;
        }
        Ok(Self { environment })
    }

    /// Renders the signed-in user.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Template`] when rendering fails.
    pub fn user(&self, user: &User) -> RenderResult<String> {
        self.render("user", context! { user => UserView::new(user) })
    }

    /// Renders the dashboard: the board list with progress summaries.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Template`] when rendering fails.
    pub fn dashboard(
        &self,
        user: Option<&User>,
        boards: &[(Board, BoardSummary)],
    ) -> RenderResult<String> {
        let cards: Vec<_> = boards
            .iter()
            .map(|(board, summary)| BoardHeaderView::new(board, *summary))
            .collect();
        self.render(
            "dashboard",
            context! { user => user.map(UserView::new), boards => cards },
        )
    }

    /// Renders a board with its four columns.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Template`] when rendering fails.
    pub fn board(&self, board: &Board, now: DateTime<Utc>) -> RenderResult<String> {
        let columns: Vec<_> = board
            .columns()
            .map(|column| ColumnView::new(column, now))
            .collect();
        self.render(
            "board",
            context! {
                board => BoardHeaderView::new(board, board.summary()),
                columns => columns,
            },
        )
    }

    /// Renders the detail view of one task.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Template`] when rendering fails.
    pub fn task(&self, board: &Board, task: &Task, now: DateTime<Utc>) -> RenderResult<String> {
        self.render(
            "task",
            context! {
                board => BoardHeaderView::new(board, board.summary()),
                task => TaskDetailView::new(task, now),
            },
        )
    }

    fn render(&self, view: &'static str, ctx: minijinja::Value) -> RenderResult<String> {
        self.environment
            .get_template(view)
            .and_then(|template| template.render(ctx))
            .map_err(|err| template_error(view, &err))
    }
}

fn template_error(view: &'static str, err: &minijinja::Error) -> RenderError {
    RenderError::Template {
        view,
        reason: err.to_string(),
    }
}
