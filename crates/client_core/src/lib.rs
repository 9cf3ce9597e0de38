//! Board state synchronization core for the kanban client.
//!
//! The crate keeps one consistent, correctly ordered in-memory board
//! snapshot per screen. Every mutation runs a mutate-then-refetch cycle
//! against the remote store ([`reconciler::BoardReconciler`]); the fetched
//! graph is the only thing ever displayed, so the snapshot is always either
//! the previous fully reconciled one or a newly fetched one, never a
//! partially applied mix. Failures short-circuit to the notification
//! channel ([`notify::Notifier`]) instead of touching the snapshot.

pub mod colors;
pub mod controller;
pub mod error;
pub mod gateway;
pub mod notify;
pub mod ordering;
pub mod reconciler;
pub mod session;

pub use controller::{BoardController, BoardsController, DialogState};
pub use error::GatewayError;
pub use gateway::{BoardGateway, HttpBoardGateway};
pub use notify::{Notice, Notifier, NOTICE_DISMISS_AFTER};
pub use reconciler::{BoardMutation, BoardReconciler, TaskDraft};
pub use session::Session;

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
