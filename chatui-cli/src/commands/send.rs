use anyhow::{Context, Result, bail};
use clap::Args;
use shared::config::ClientConfig;
use shared::models::ThreadId;
use shared::{ChatController, SendOutcome, SessionState};

use super::build_client;
use crate::GlobalArgs;
use crate::terminal::TerminalView;

#[derive(Args, Debug)]
#[command(about = "Send a message, opening a new thread unless --thread is given")]
pub struct SendArgs {
    /// Existing thread to continue
    #[arg(long)]
    pub thread: Option<String>,

    /// Route the message through the deep-research workflow
    #[arg(long)]
    pub deep_research: bool,

    /// Message text
    #[arg(value_name = "MESSAGE")]
    pub message: String,
}

/// Send one message and print the resulting conversation.
///
/// # Errors
/// Returns an error if the message is blank or the backend rejects it.
pub async fn handle_send(args: SendArgs, config: &ClientConfig, global: &GlobalArgs) -> Result<()> {
    let mut session = SessionState::new();
    session.set_selected_thread(args.thread.map(ThreadId::from));
    session.set_deep_research(args.deep_research);

    let controller = ChatController::with_session(
        build_client(config, global)?,
        TerminalView::stdout().without_sidebar(),
        session,
    );

    let new_chat = controller.session().is_new_chat();
    match controller
        .send_message(&args.message)
        .await
        .context("failed to send message")?
    {
        SendOutcome::Delivered { thread_id } if new_chat => {
            eprintln!("new thread: {thread_id}");
            Ok(())
        }
        SendOutcome::Delivered { thread_id } => {
            eprintln!("thread: {thread_id}");
            Ok(())
        }
        SendOutcome::Empty => bail!("message is empty"),
        SendOutcome::InFlight => bail!("another message is still being sent"),
    }
}
