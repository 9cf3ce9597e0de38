use serde::{Deserialize, Serialize};

use crate::domain::{BoardId, ColumnId, TaskId, UserId};

/// Element of the boards list; the column graph is only carried by a full
/// board fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardSummary {
    pub id: BoardId,
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// Full board graph as returned by `GET /boards/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub id: BoardId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub columns: Vec<Column>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    pub order: i64,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    pub done: bool,
    pub order: i64,
    /// Assignee reference; lookup-only, resolved against `GET /users`.
    pub user_id: UserId,
    pub board_id: BoardId,
    pub column_id: ColumnId,
}

/// External, read-only directory entry for assignee selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub login: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBoard {
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewColumn {
    pub title: String,
    pub order: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub done: bool,
    pub order: i64,
    pub user_id: UserId,
}

/// Body of `PUT /boards/{b}/columns/{c}/tasks/{t}`; the store expects the
/// full field set, not a diff.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskUpdate {
    pub title: String,
    pub description: String,
    pub done: bool,
    pub order: i64,
    pub user_id: UserId,
    pub board_id: BoardId,
    pub column_id: ColumnId,
}

impl From<&Task> for TaskUpdate {
    fn from(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
            done: task.done,
            order: task.order,
            user_id: task.user_id,
            board_id: task.board_id,
            column_id: task.column_id,
        }
    }
}
