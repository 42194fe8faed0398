//! Frontend configuration module
//!
//! Values are fixed at build time through `option_env!`; the backend origin is
//! whatever origin served the page.

use shared::config::ClientConfig;
use tracing::Level;

/// Frontend configuration for API location, anti-forgery token and logging
#[derive(Debug, Clone)]
pub struct FrontendConfig {
    /// Path under the page origin where the chat API is mounted
    pub api_prefix: String,
    /// Cookie holding the anti-forgery token
    pub csrf_cookie_name: String,
    /// Header the anti-forgery token is sent in
    pub csrf_header_name: String,
    /// Maximum level written to the browser console
    pub log_level: String,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        let defaults = ClientConfig::with_defaults();
        Self {
            api_prefix: option_env!("CHATUI_API_PREFIX")
                .map_or(defaults.api_prefix, str::to_string),
            csrf_cookie_name: option_env!("CHATUI_CSRF_COOKIE")
                .map_or(defaults.csrf_cookie_name, str::to_string),
            csrf_header_name: option_env!("CHATUI_CSRF_HEADER")
                .map_or(defaults.csrf_header_name, str::to_string),
            log_level: option_env!("CHATUI_LOG_LEVEL").map_or(defaults.log_level, str::to_string),
        }
    }
}

impl FrontendConfig {
    /// Create a new frontend configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Client configuration for a backend served from `origin`.
    pub fn client_config(&self, origin: &str) -> ClientConfig {
        ClientConfig {
            server_url: origin.to_string(),
            api_prefix: self.api_prefix.clone(),
            csrf_cookie_name: self.csrf_cookie_name.clone(),
            csrf_header_name: self.csrf_header_name.clone(),
            log_level: self.log_level.clone(),
        }
    }

    /// Console log level; unknown values fall back to `INFO`.
    pub fn max_level(&self) -> Level {
        self.log_level.parse().unwrap_or(Level::INFO)
    }
}
