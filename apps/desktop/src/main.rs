use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use client_core::{
    colors, BoardController, BoardGateway, BoardsController, HttpBoardGateway, Notifier, Session,
};
use shared::domain::BoardId;
use uuid::Uuid;

#[derive(Parser, Debug)]
struct Args {
    #[arg(long)]
    server_url: String,
    /// Bearer token issued at sign-in.
    #[arg(long)]
    token: String,
    /// Board to display after the listing; only lists when omitted.
    #[arg(long)]
    board_id: Option<Uuid>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();
    let args = Args::parse();

    let gateway: Arc<dyn BoardGateway> = Arc::new(HttpBoardGateway::new(
        &args.server_url,
        Session::new(args.token),
    )?);
    let notifier = Notifier::new();
    let mut notices = notifier.subscribe();

    let mut boards = BoardsController::new(Arc::clone(&gateway), notifier.clone());
    boards.load().await;
    println!("Boards:");
    for board in boards.boards() {
        println!("  {}  {}", board.id.0, board.title);
    }

    if let Some(board_id) = args.board_id {
        let mut controller =
            BoardController::new(BoardId(board_id), Arc::clone(&gateway), notifier.clone());
        controller.load().await;

        let palette = controller.colors();
        for column in controller.columns() {
            println!(
                "[{}] {} (order {})",
                colors::color_for(&palette, column.id),
                column.title,
                column.order
            );
            for task in controller.tasks_of(column.id) {
                let mark = if task.done { "x" } else { " " };
                println!("  [{mark}] {}", task.title);
            }
        }
    }

    while let Ok(notice) = notices.try_recv() {
        tracing::warn!(message = %notice.message, "notice");
    }

    Ok(())
}
