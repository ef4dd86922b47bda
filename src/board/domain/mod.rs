//! Domain model for boards and tasks.
//!
//! All state mutation happens on the [`Board`] aggregate so that the
//! column/status correspondence of each task cannot be broken from outside.

mod board;
mod column;
mod error;
mod ids;
mod label;
pub mod seed;
mod summary;
mod task;

pub use board::{Board, BoardPatch, PersistedBoardData};
pub use column::{Column, ColumnId};
pub use error::{BoardDomainError, ParseColumnIdError};
pub use ids::{BoardId, TaskId};
pub use label::{DEFAULT_LABEL_COLOR, Labels, label_color};
pub use summary::BoardSummary;
pub use task::{PersistedTaskData, Task, TaskDraft, TaskPatch};
