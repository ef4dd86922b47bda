//! Starter boards written to an empty store on first load.

use super::{Board, BoardId, ColumnId, Labels, PersistedBoardData, PersistedTaskData, Task, TaskId};
use crate::auth::domain::UserId;
use chrono::{DateTime, NaiveDate, Utc};

/// Returns the two starter boards.
#[must_use]
pub fn initial_boards() -> Vec<Board> {
    vec![product_development(), marketing_campaign()]
}

fn product_development() -> Board {
    Board::from_persisted(PersistedBoardData {
        id: BoardId::new("1"),
        title: "Product Development".to_owned(),
        description: "Track our product development lifecycle".to_owned(),
        tasks: vec![
            task(SeedTask {
                id: "101",
                title: "Design new landing page",
                description: "Create wireframes and mockups for the new landing page",
                status: ColumnId::Todo,
                assignee: Some("2"),
                created_at: at(2025, 5, 18, 10, 0, 0),
                due: (2025, 5, 25),
                labels: &["design", "high-priority"],
            }),
            task(SeedTask {
                id: "102",
                title: "Update user profile page",
                description: "Add new fields and improve the layout",
                status: ColumnId::Todo,
                assignee: None,
                created_at: at(2025, 5, 19, 14, 30, 0),
                due: (2025, 5, 28),
                labels: &["frontend"],
            }),
            task(SeedTask {
                id: "201",
                title: "Implement authentication",
                description: "Add login, signup, and password reset functionality",
                status: ColumnId::InProgress,
                assignee: Some("1"),
                created_at: at(2025, 5, 15, 9, 15, 0),
                due: (2025, 5, 22),
                labels: &["backend", "security"],
            }),
            task(SeedTask {
                id: "301",
                title: "API documentation",
                description: "Document all API endpoints and parameters",
                status: ColumnId::Review,
                assignee: Some("2"),
                created_at: at(2025, 5, 12, 16, 45, 0),
                due: (2025, 5, 20),
                labels: &["documentation"],
            }),
            task(SeedTask {
                id: "401",
                title: "Setup CI/CD pipeline",
                description: "Configure automated testing and deployment",
                status: ColumnId::Done,
                assignee: Some("1"),
                created_at: at(2025, 5, 10, 11, 30, 0),
                due: (2025, 5, 17),
                labels: &["devops"],
            }),
        ],
        members: vec![UserId::new("1"), UserId::new("2")],
        created_by: UserId::new("1"),
        created_at: at(2025, 5, 10, 10, 0, 0),
    })
}

fn marketing_campaign() -> Board {
    Board::from_persisted(PersistedBoardData {
        id: BoardId::new("2"),
        title: "Marketing Campaign".to_owned(),
        description: "Q2 marketing initiatives".to_owned(),
        tasks: vec![
            task(SeedTask {
                id: "501",
                title: "Create social media content calendar",
                description: "Plan content for the next month",
                status: ColumnId::Todo,
                assignee: Some("2"),
                created_at: at(2025, 5, 17, 9, 0, 0),
                due: (2025, 5, 24),
                labels: &["marketing", "content"],
            }),
            task(SeedTask {
                id: "601",
                title: "Email newsletter draft",
                description: "Design and write copy for monthly newsletter",
                status: ColumnId::Review,
                assignee: Some("2"),
                created_at: at(2025, 5, 16, 13, 20, 0),
                due: (2025, 5, 21),
                labels: &["marketing", "content"],
            }),
        ],
        members: vec![UserId::new("1"), UserId::new("2")],
        created_by: UserId::new("1"),
        created_at: at(2025, 5, 15, 14, 0, 0),
    })
}

struct SeedTask {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    status: ColumnId,
    assignee: Option<&'static str>,
    created_at: DateTime<Utc>,
    due: (i32, u32, u32),
    labels: &'static [&'static str],
}

fn task(seed: SeedTask) -> Task {
    let (year, month, day) = seed.due;
    Task::from_persisted(PersistedTaskData {
        id: TaskId::new(seed.id),
        title: seed.title.to_owned(),
        description: seed.description.to_owned(),
        status: seed.status,
        assignee_id: seed.assignee.map(UserId::new),
        created_by: UserId::new("1"),
        created_at: seed.created_at,
        due_date: Some(at(year, month, day, 23, 59, 59)),
        labels: seed.labels.iter().collect::<Labels>(),
    })
}

/// Builds a UTC timestamp from literal calendar values.
fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, second))
        .map(|naive| naive.and_utc())
        .unwrap_or_default()
}
