use serde::{Deserialize, Serialize};
use std::env;
use thiserror::Error;
use url::Url;

#[cfg(not(target_arch = "wasm32"))]
use std::{fs, path::Path};

/// Errors raised while resolving a [`ClientConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file is not valid for its format.
    #[error("failed to parse configuration file: {0}")]
    Parse(String),

    /// The file extension names no known format.
    #[error("unsupported configuration format '{0}'. Use 'yaml', 'json' or 'toml'.")]
    UnsupportedFormat(String),

    /// `server_url` is not an absolute URL.
    #[error("invalid server URL '{url}': {reason}")]
    InvalidServerUrl {
        /// The rejected value.
        url: String,
        /// Why parsing failed.
        reason: String,
    },
}

/// Settings for reaching the chat backend.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ClientConfig {
    /// Scheme and authority of the backend, e.g. `http://localhost:8000`.
    pub server_url: String,

    /// Path under which the chat API is mounted.
    pub api_prefix: String,

    /// Cookie that carries the anti-forgery token.
    pub csrf_cookie_name: String,

    /// Request header the anti-forgery token is sent in.
    pub csrf_header_name: String,

    /// Default tracing filter for binaries.
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl ClientConfig {
    /// Generates a default configuration.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            server_url: "http://localhost:8000".to_string(),
            api_prefix: "/chat/api".to_string(),
            csrf_cookie_name: "csrftoken".to_string(),
            csrf_header_name: "X-CSRFToken".to_string(),
            log_level: "info".to_string(),
        }
    }

    /// Overrides fields from `CHATUI_*` environment variables.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| env::var(key).ok());
    }

    /// Overrides fields from `CHATUI_*` variables resolved through `lookup`.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let fields = [
            ("CHATUI_SERVER_URL", &mut self.server_url),
            ("CHATUI_API_PREFIX", &mut self.api_prefix),
            ("CHATUI_CSRF_COOKIE", &mut self.csrf_cookie_name),
            ("CHATUI_CSRF_HEADER", &mut self.csrf_header_name),
            ("CHATUI_LOG_LEVEL", &mut self.log_level),
        ];
        for (key, field) in fields {
            if let Some(value) = lookup(key) {
                *field = value;
            }
        }
    }

    /// Loads the configuration from a file, environment variables, or defaults.
    ///
    /// File values replace the defaults; environment variables win over both.
    /// The server URL is not checked here so callers can still override it;
    /// [`api_base`](Self::api_base) validates the final value.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed, or has an
    /// unknown extension.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_config(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_config_with(config_path, |key| env::var(key).ok())
    }

    /// [`load_config`](Self::load_config) with variables resolved through
    /// `lookup` instead of the process environment.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed, or has an
    /// unknown extension.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_config_with(
        config_path: Option<&Path>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = match config_path {
            Some(path) => Self::from_file(path)?,
            None => Self::with_defaults(),
        };
        config.apply_overrides(lookup);
        Ok(config)
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();
        match extension {
            "yaml" | "yml" => {
                serde_yml::from_str(&content).map_err(|err| ConfigError::Parse(err.to_string()))
            }
            "json" => {
                serde_json::from_str(&content).map_err(|err| ConfigError::Parse(err.to_string()))
            }
            "toml" => toml::from_str(&content).map_err(|err| ConfigError::Parse(err.to_string())),
            other => Err(ConfigError::UnsupportedFormat(other.to_string())),
        }
    }

    /// Base URL of the chat API, always ending in `/` so endpoint paths join
    /// underneath it.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidServerUrl`] when `server_url` is not an
    /// absolute URL.
    pub fn api_base(&self) -> Result<Url, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidServerUrl {
            url: self.server_url.clone(),
            reason,
        };
        let server = Url::parse(&self.server_url).map_err(|err| invalid(err.to_string()))?;
        if server.cannot_be_a_base() {
            return Err(invalid("URL cannot be a base".to_string()));
        }
        let prefix = self.api_prefix.trim_matches('/');
        let path = if prefix.is_empty() {
            String::from("/")
        } else {
            format!("/{prefix}/")
        };
        server.join(&path).map_err(|err| invalid(err.to_string()))
    }
}
