//! Mutate-then-refetch reconciliation against the remote store.

use std::sync::Arc;

use shared::{
    domain::{ColumnId, UserId},
    protocol::{Board, NewColumn, NewTask, Task},
};
use tracing::{debug, warn};

use crate::{error::GatewayError, gateway::BoardGateway, notify::Notifier, ordering};

/// What the add-task form produces; position and completion state are
/// filled in by the reconciler at creation time.
#[derive(Debug, Clone)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub user_id: UserId,
}

/// A user intent against one board.
#[derive(Debug, Clone)]
pub enum BoardMutation {
    CreateColumn { title: String },
    DeleteColumn { column_id: ColumnId },
    CreateTask { column_id: ColumnId, draft: TaskDraft },
    UpdateTask { task: Task },
    DeleteTask { task: Task },
}

impl BoardMutation {
    fn name(&self) -> &'static str {
        match self {
            Self::CreateColumn { .. } => "create_column",
            Self::DeleteColumn { .. } => "delete_column",
            Self::CreateTask { .. } => "create_task",
            Self::UpdateTask { .. } => "update_task",
            Self::DeleteTask { .. } => "delete_task",
        }
    }
}

/// Runs one mutation cycle: `Idle -> Mutating -> Refetching -> Idle`.
///
/// On success the full board graph is refetched and returned as the next
/// snapshot; the extra round trip buys freedom from client/server
/// divergence (stale order values, orphaned references) that optimistic
/// local patching would risk. On failure at either step the caller's
/// snapshot is left untouched, exactly one notice is published, and the
/// error is returned; no local guess is ever applied.
///
/// Overlapping cycles on the same board are not serialized: if two race,
/// the last refetch to resolve is the snapshot the caller ends up keeping.
pub struct BoardReconciler {
    gateway: Arc<dyn BoardGateway>,
    notifier: Notifier,
}

impl BoardReconciler {
    pub fn new(gateway: Arc<dyn BoardGateway>, notifier: Notifier) -> Self {
        Self { gateway, notifier }
    }

    pub async fn perform(
        &self,
        board: &Board,
        mutation: BoardMutation,
    ) -> Result<Board, GatewayError> {
        let mutation_name = mutation.name();
        debug!(board_id = %board.id.0, mutation = mutation_name, "mutating");
        if let Err(err) = self.mutate(board, mutation).await {
            return Err(self.report(mutation_name, err));
        }

        debug!(board_id = %board.id.0, mutation = mutation_name, "refetching");
        match self.gateway.fetch_board(board.id).await {
            Ok(fresh) => Ok(fresh),
            Err(err) => Err(self.report(mutation_name, err)),
        }
    }

    async fn mutate(&self, board: &Board, mutation: BoardMutation) -> Result<(), GatewayError> {
        match mutation {
            BoardMutation::CreateColumn { title } => {
                let column = NewColumn {
                    title,
                    order: ordering::next_order(&board.columns),
                };
                self.gateway.create_column(board.id, column).await?;
            }
            BoardMutation::DeleteColumn { column_id } => {
                self.gateway.delete_column(board.id, column_id).await?;
            }
            BoardMutation::CreateTask { column_id, draft } => {
                // A task is never constructed against a column the current
                // snapshot has not confirmed.
                let Some(column) = board.columns.iter().find(|column| column.id == column_id)
                else {
                    return Err(GatewayError::Validation(format!(
                        "column {} is not part of the current board",
                        column_id.0
                    )));
                };
                let task = NewTask {
                    title: draft.title,
                    description: draft.description,
                    done: false,
                    order: ordering::next_order(&column.tasks),
                    user_id: draft.user_id,
                };
                self.gateway.create_task(board.id, column_id, task).await?;
            }
            BoardMutation::UpdateTask { task } => {
                self.gateway.update_task(&task).await?;
            }
            BoardMutation::DeleteTask { task } => {
                self.gateway.delete_task(&task).await?;
            }
        }
        Ok(())
    }

    fn report(&self, mutation: &str, err: GatewayError) -> GatewayError {
        warn!(mutation, error = %err, "board mutation failed; snapshot kept");
        self.notifier.notify(err.to_string());
        err
    }
}
