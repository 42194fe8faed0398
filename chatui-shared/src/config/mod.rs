//! # Configuration
//!
//! Client-side settings shared by the web frontend and the command-line
//! client: where the backend lives and how the anti-forgery token travels.

/// Client configuration: backend endpoint and anti-forgery token settings.
pub mod client;

pub use client::{ClientConfig, ConfigError};
