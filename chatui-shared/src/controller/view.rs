//! What the controller renders and the surface it renders to.

use crate::models::{Message, MessageRole, ThreadId, ThreadSummary};

/// One sidebar row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadEntry {
    /// Thread a click on the row selects.
    pub thread_id: ThreadId,
    /// Display text, see [`ThreadSummary::display_label`].
    pub label: String,
    /// Whether this row is the active selection.
    pub selected: bool,
}

impl ThreadEntry {
    /// Row for `summary`, marked when it matches `selected`.
    #[must_use]
    pub fn from_summary(summary: &ThreadSummary, selected: Option<&ThreadId>) -> Self {
        Self {
            thread_id: summary.thread_id.clone(),
            label: summary.display_label(),
            selected: selected == Some(&summary.thread_id),
        }
    }
}

/// One message block in the conversation pane. `text` is plain text and must
/// never be interpreted as markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageBlock {
    /// Human or agent styling.
    pub role: MessageRole,
    /// Message content.
    pub text: String,
}

impl From<&Message> for MessageBlock {
    fn from(message: &Message) -> Self {
        Self {
            role: message.role(),
            text: message.content.clone(),
        }
    }
}

/// The UI surface the controller drives.
///
/// Every call replaces what was shown before; implementations do not diff.
pub trait ChatView {
    /// Replace the sidebar with `entries`, in order.
    fn render_thread_list(&self, entries: Vec<ThreadEntry>);

    /// Replace the message pane with `blocks` and scroll to the latest one.
    fn render_messages(&self, blocks: Vec<MessageBlock>);

    /// Empty the message pane.
    fn clear_messages(&self);

    /// Enable or disable the input field and the send control together.
    fn set_busy(&self, busy: bool);

    /// Empty the text input.
    fn clear_input(&self);

    /// Move keyboard focus to the text input.
    fn focus_input(&self);

    /// Show a notification the user has to acknowledge.
    fn notify_blocking(&self, message: &str);

    /// Show a non-blocking error, e.g. a banner.
    fn report_error(&self, message: &str);
}
