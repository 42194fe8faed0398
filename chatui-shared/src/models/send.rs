//! Request and response bodies of the send endpoint.

use serde::{Deserialize, Serialize};

use super::{Message, ThreadId};

/// Body of `POST /send/`.
///
/// A missing `thread_id` is sent as `null` and asks the server to open a new
/// thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendMessageRequest {
    /// Thread to continue, or `None` for a new one.
    pub thread_id: Option<ThreadId>,
    /// Trimmed message text.
    pub message: String,
    /// Route the message through the deep-research workflow.
    pub deep_research: bool,
}

/// Response of `POST /send/`: the thread the message landed in and its full
/// history, including the new human turn and the agent's reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendMessageResponse {
    /// Thread the message was stored in; newly allocated for a new chat.
    pub thread_id: ThreadId,
    /// Full thread history in conversation order.
    #[serde(default)]
    pub messages: Vec<Message>,
}
