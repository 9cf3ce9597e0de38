//! Per-screen state holders wiring user intents to the reconciler.

use std::collections::HashMap;
use std::sync::Arc;

use shared::{
    domain::{BoardId, ColumnId, TaskId},
    protocol::{Board, BoardSummary, Column, Task, User},
};
use tracing::debug;

use crate::{
    colors,
    gateway::BoardGateway,
    notify::Notifier,
    ordering,
    reconciler::{BoardMutation, BoardReconciler, TaskDraft},
};

/// The one transient dialog a board screen may have open.
///
/// A tagged variant instead of independent flags: at most one dialog is
/// active at a time, and a confirm always names its target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DialogState {
    #[default]
    None,
    AddColumn,
    ConfirmDeleteColumn(Column),
    AddTask { column: Column },
    EditTask { task: Task },
    ConfirmDeleteTask(Task),
}

impl DialogState {
    /// Whether this dialog still points at entities present in `board`.
    fn survives(&self, board: &Board) -> bool {
        match self {
            Self::None | Self::AddColumn => true,
            Self::ConfirmDeleteColumn(column) | Self::AddTask { column } => board
                .columns
                .iter()
                .any(|candidate| candidate.id == column.id),
            Self::EditTask { task } | Self::ConfirmDeleteTask(task) => board
                .columns
                .iter()
                .flat_map(|column| column.tasks.iter())
                .any(|candidate| candidate.id == task.id),
        }
    }
}

/// Top-level state holder for one board screen.
///
/// Owns the current snapshot and the dialog state; every mutation flows
/// through the reconciler and, on success, replaces the board reference
/// wholesale. Nested collections are never mutated in place.
pub struct BoardController {
    board_id: BoardId,
    board: Option<Board>,
    dialog: DialogState,
    gateway: Arc<dyn BoardGateway>,
    reconciler: BoardReconciler,
    notifier: Notifier,
}

impl BoardController {
    pub fn new(board_id: BoardId, gateway: Arc<dyn BoardGateway>, notifier: Notifier) -> Self {
        Self {
            board_id,
            board: None,
            dialog: DialogState::None,
            reconciler: BoardReconciler::new(Arc::clone(&gateway), notifier.clone()),
            gateway,
            notifier,
        }
    }

    /// Fetch the board for this screen. On failure the board stays absent
    /// (the screen renders its empty state) and the failure is notified.
    pub async fn load(&mut self) {
        match self.gateway.fetch_board(self.board_id).await {
            Ok(board) => self.replace_board(board),
            Err(err) => self.notifier.notify(err.to_string()),
        }
    }

    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    pub fn dialog(&self) -> &DialogState {
        &self.dialog
    }

    /// Columns in display order.
    pub fn columns(&self) -> Vec<Column> {
        self.board
            .as_ref()
            .map_or_else(Vec::new, |board| ordering::display_order(&board.columns))
    }

    /// Tasks of one column in display order; empty for unknown columns.
    pub fn tasks_of(&self, column_id: ColumnId) -> Vec<Task> {
        self.board
            .as_ref()
            .and_then(|board| board.columns.iter().find(|column| column.id == column_id))
            .map_or_else(Vec::new, |column| ordering::display_order(&column.tasks))
    }

    /// Display colors for the current columns.
    pub fn colors(&self) -> HashMap<ColumnId, &'static str> {
        self.board
            .as_ref()
            .map_or_else(HashMap::new, |board| colors::assign_colors(&board.columns))
    }

    /// Assignee candidates for the task forms; notifies and yields an empty
    /// list on failure.
    pub async fn assignees(&self) -> Vec<User> {
        match self.gateway.list_users().await {
            Ok(users) => users,
            Err(err) => {
                self.notifier.notify(err.to_string());
                Vec::new()
            }
        }
    }

    pub fn open_add_column(&mut self) {
        self.dialog = DialogState::AddColumn;
    }

    pub fn open_add_task(&mut self, column_id: ColumnId) {
        if let Some(column) = self.find_column(column_id) {
            self.dialog = DialogState::AddTask { column };
        }
    }

    pub fn open_edit_task(&mut self, task_id: TaskId) {
        if let Some(task) = self.find_task(task_id) {
            self.dialog = DialogState::EditTask { task };
        }
    }

    /// Arm the confirm dialog; nothing is deleted until [`Self::confirm`].
    pub fn request_delete_column(&mut self, column_id: ColumnId) {
        if let Some(column) = self.find_column(column_id) {
            self.dialog = DialogState::ConfirmDeleteColumn(column);
        }
    }

    pub fn request_delete_task(&mut self, task_id: TaskId) {
        if let Some(task) = self.find_task(task_id) {
            self.dialog = DialogState::ConfirmDeleteTask(task);
        }
    }

    pub fn cancel_dialog(&mut self) {
        self.dialog = DialogState::None;
    }

    /// Execute whichever destructive action is armed. A no-op unless a
    /// confirm dialog is open.
    pub async fn confirm(&mut self) {
        let mutation = match std::mem::take(&mut self.dialog) {
            DialogState::ConfirmDeleteColumn(column) => BoardMutation::DeleteColumn {
                column_id: column.id,
            },
            DialogState::ConfirmDeleteTask(task) => BoardMutation::DeleteTask { task },
            other => {
                self.dialog = other;
                return;
            }
        };
        self.run_mutation(mutation).await;
    }

    pub async fn add_column(&mut self, title: String) {
        self.run_mutation(BoardMutation::CreateColumn { title })
            .await;
    }

    /// Submit the add-task form against the dialog's column.
    pub async fn submit_task(&mut self, draft: TaskDraft) {
        let column_id = match &self.dialog {
            DialogState::AddTask { column } => column.id,
            _ => return,
        };
        self.run_mutation(BoardMutation::CreateTask { column_id, draft })
            .await;
    }

    pub async fn save_task(&mut self, task: Task) {
        self.run_mutation(BoardMutation::UpdateTask { task }).await;
    }

    async fn run_mutation(&mut self, mutation: BoardMutation) {
        let Some(board) = self.board.as_ref() else {
            self.dialog = DialogState::None;
            return;
        };
        let outcome = self.reconciler.perform(board, mutation).await;
        // The triggering dialog closes on success and failure alike; the
        // reconciler already notified on failure.
        self.dialog = DialogState::None;
        if let Ok(fresh) = outcome {
            self.replace_board(fresh);
        }
    }

    fn replace_board(&mut self, board: Board) {
        if !self.dialog.survives(&board) {
            debug!(board_id = %board.id.0, "dialog target gone from new snapshot; clearing");
            self.dialog = DialogState::None;
        }
        self.board = Some(board);
    }

    fn find_column(&self, column_id: ColumnId) -> Option<Column> {
        self.board
            .as_ref()?
            .columns
            .iter()
            .find(|column| column.id == column_id)
            .cloned()
    }

    fn find_task(&self, task_id: TaskId) -> Option<Task> {
        self.board
            .as_ref()?
            .columns
            .iter()
            .flat_map(|column| column.tasks.iter())
            .find(|task| task.id == task_id)
            .cloned()
    }
}

/// State holder for the boards-list screen.
pub struct BoardsController {
    boards: Vec<BoardSummary>,
    board_to_delete: Option<BoardSummary>,
    gateway: Arc<dyn BoardGateway>,
    notifier: Notifier,
}

impl BoardsController {
    pub fn new(gateway: Arc<dyn BoardGateway>, notifier: Notifier) -> Self {
        Self {
            boards: Vec::new(),
            board_to_delete: None,
            gateway,
            notifier,
        }
    }

    pub async fn load(&mut self) {
        match self.gateway.list_boards().await {
            Ok(boards) => self.boards = boards,
            Err(err) => self.notifier.notify(err.to_string()),
        }
    }

    pub fn boards(&self) -> &[BoardSummary] {
        &self.boards
    }

    pub fn board_to_delete(&self) -> Option<&BoardSummary> {
        self.board_to_delete.as_ref()
    }

    pub async fn create_board(&mut self, title: &str) {
        match self.gateway.create_board(title).await {
            Ok(board) => self.boards.push(board),
            Err(err) => self.notifier.notify(err.to_string()),
        }
    }

    pub fn request_delete(&mut self, board_id: BoardId) {
        self.board_to_delete = self
            .boards
            .iter()
            .find(|board| board.id == board_id)
            .cloned();
    }

    pub fn cancel_delete(&mut self) {
        self.board_to_delete = None;
    }

    /// Confirmed deletion. The entry leaves the local list only after the
    /// store confirms; the list endpoint is not refetched for this.
    pub async fn confirm_delete(&mut self) {
        let Some(board) = self.board_to_delete.take() else {
            return;
        };
        match self.gateway.delete_board(board.id).await {
            Ok(()) => self.boards.retain(|candidate| candidate.id != board.id),
            Err(err) => self.notifier.notify(err.to_string()),
        }
    }
}
