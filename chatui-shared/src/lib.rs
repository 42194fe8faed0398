#![cfg_attr(not(test), forbid(unsafe_code))]
#![deny(warnings, clippy::pedantic)]

//! Shared building blocks for the chatui clients.
//!
//! The wire models, the HTTP backend client and the thread synchronisation
//! controller live here so the web frontend and the command-line client drive
//! the same state machine.

pub mod client;
pub mod config;
pub mod controller;
pub mod errors;
pub mod models;

pub use client::{ChatBackend, ChatClient, CsrfSource, StaticCsrfToken};
pub use controller::{ChatController, ChatView, MessageBlock, SendOutcome, SessionState, ThreadEntry};
pub use errors::ChatError;
