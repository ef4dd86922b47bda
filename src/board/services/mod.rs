//! Application services for board and task management.

mod boards;
mod requests;

pub use boards::{BoardService, BoardServiceError, BoardServiceResult};
pub use requests::{CreateBoardRequest, CreateTaskRequest};
