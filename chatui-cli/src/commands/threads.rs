use anyhow::{Context, Result};
use clap::Args;
use shared::ChatController;
use shared::config::ClientConfig;
use shared::models::ThreadId;

use super::build_client;
use crate::GlobalArgs;
use crate::terminal::TerminalView;

#[derive(Args, Debug)]
#[command(about = "List conversation threads, newest first as ordered by the server")]
pub struct ThreadsArgs {
    /// Thread to mark as selected in the listing
    #[arg(long)]
    pub selected: Option<String>,
}

/// Print the sidebar.
///
/// # Errors
/// Returns an error if the thread list cannot be fetched.
pub async fn handle_threads(
    args: ThreadsArgs,
    config: &ClientConfig,
    global: &GlobalArgs,
) -> Result<()> {
    let controller = ChatController::new(build_client(config, global)?, TerminalView::stdout());
    let selected = args.selected.map(ThreadId::from);
    controller
        .refresh_thread_list(selected.as_ref())
        .await
        .context("failed to list threads")
}
