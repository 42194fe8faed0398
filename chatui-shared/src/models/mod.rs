//! Wire types exchanged with the chat backend.

pub mod errors;
pub mod message;
pub mod send;
pub mod threads;

pub use errors::ErrorResponse;
pub use message::{Message, MessageRole, ThreadMessagesResponse};
pub use send::{SendMessageRequest, SendMessageResponse};
pub use threads::{ThreadId, ThreadListResponse, ThreadSummary};
