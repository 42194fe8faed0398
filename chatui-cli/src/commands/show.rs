use anyhow::{Context, Result};
use clap::Args;
use shared::ChatController;
use shared::config::ClientConfig;
use shared::models::ThreadId;

use super::build_client;
use crate::GlobalArgs;
use crate::terminal::TerminalView;

#[derive(Args, Debug)]
#[command(about = "Show the messages of one thread")]
pub struct ShowArgs {
    /// Thread identifier
    #[arg(value_name = "THREAD_ID")]
    pub thread_id: String,

    /// Also print the thread list with this thread marked
    #[arg(long)]
    pub sidebar: bool,
}

/// Select a thread and print its messages.
///
/// # Errors
/// Returns an error if the thread or the thread list cannot be fetched.
pub async fn handle_show(args: ShowArgs, config: &ClientConfig, global: &GlobalArgs) -> Result<()> {
    let view = TerminalView::stdout();
    let view = if args.sidebar { view } else { view.without_sidebar() };
    let controller = ChatController::new(build_client(config, global)?, view);
    let thread_id = ThreadId::from(args.thread_id);

    controller
        .select_thread(thread_id.clone())
        .await
        .with_context(|| format!("failed to load thread {thread_id}"))
}
