pub mod completion;
pub mod config;
pub mod send;
pub mod show;
pub mod threads;

use std::env;

use anyhow::{Context, Result};
use shared::config::ClientConfig;
use shared::{ChatClient, StaticCsrfToken};

use crate::GlobalArgs;

/// Resolve the client configuration: file, then `CHATUI_*` variables, then
/// command-line flags.
///
/// # Errors
/// Returns an error if the configuration file cannot be loaded or the final
/// server URL is invalid.
pub fn resolve_config(args: &GlobalArgs) -> Result<ClientConfig> {
    resolve_config_with(args, |key| env::var(key).ok())
}

fn resolve_config_with(
    args: &GlobalArgs,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<ClientConfig> {
    let mut config = ClientConfig::load_config_with(args.config.as_deref(), lookup)
        .context("failed to load configuration")?;
    if let Some(server) = &args.server {
        config.server_url.clone_from(server);
    }
    config.api_base().context("invalid configuration")?;
    Ok(config)
}

/// Build the HTTP client for the resolved configuration.
///
/// # Errors
/// Returns an error if the server URL cannot be turned into an API base.
pub fn build_client(config: &ClientConfig, args: &GlobalArgs) -> Result<ChatClient> {
    ChatClient::from_config(config, StaticCsrfToken::new(args.csrf_token.clone()))
        .with_context(|| format!("invalid server URL '{}'", config.server_url))
}
