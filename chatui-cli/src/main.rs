//! Command-line client for the chat backend.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use dotenv::dotenv;
use tracing_subscriber::EnvFilter;

mod commands;
mod terminal;

use commands::send::SendArgs;
use commands::show::ShowArgs;
use commands::threads::ThreadsArgs;

/// chatui CLI
#[derive(Parser, Debug)]
#[command(name = "chatui")]
#[command(about = "Command-line client for the chat backend", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

/// Options shared by every backend command.
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Backend base URL, e.g. <http://localhost:8000>; overrides the configuration file
    #[arg(long, global = true)]
    pub server: Option<String>,

    /// Path to a configuration file (YAML, JSON or TOML)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Anti-forgery token sent with messages
    #[arg(long, global = true, env = "CHATUI_CSRF_TOKEN", hide_env_values = true)]
    pub csrf_token: Option<String>,
}

/// Subcommands for the chatui CLI
#[derive(Subcommand, Debug)]
enum Commands {
    /// List conversation threads
    Threads(ThreadsArgs),

    /// Show the messages of a thread
    Show(ShowArgs),

    /// Send a message
    Send(SendArgs),

    /// Generate shell completion scripts for the CLI
    Completion {
        /// The shell to generate the completion script for
        #[arg(long, short, value_enum)]
        shell: clap_complete::Shell,
    },

    /// Generate a configuration file with the default settings
    Config {
        /// Format of the configuration file (yaml, json or toml)
        #[arg(long, short, default_value = "yaml")]
        format: String,
    },
}

fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

// The controller's futures are not `Send`, so everything runs on one thread.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenv().ok();
    let cli = Cli::parse();

    match &cli.command {
        Commands::Completion { shell } => {
            commands::completion::generate_completion(*shell);
            return Ok(());
        }
        Commands::Config { format } => return commands::config::generate_config(format),
        _ => {}
    }

    let config = commands::resolve_config(&cli.global)?;
    init_tracing(&config.log_level);
    tracing::debug!(server = %config.server_url, prefix = %config.api_prefix, "resolved configuration");

    match cli.command {
        Commands::Threads(args) => {
            commands::threads::handle_threads(args, &config, &cli.global).await
        }
        Commands::Show(args) => commands::show::handle_show(args, &config, &cli.global).await,
        Commands::Send(args) => commands::send::handle_send(args, &config, &cli.global).await,
        Commands::Completion { .. } | Commands::Config { .. } => Ok(()),
    }
}
