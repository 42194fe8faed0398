use shared::{ChatView, MessageBlock, ThreadEntry};
use yewdux::{Dispatch, Store};

/// Everything the chat page renders. Only [`StoreView`] writes to it, on
/// behalf of the controller, apart from the composer text and the banner
/// dismissal.
#[derive(Debug, Default, Clone, PartialEq, Store)]
pub struct ChatStore {
    pub threads: Vec<ThreadEntry>,
    pub messages: Vec<MessageBlock>,
    pub busy: bool,
    pub input: String,
    pub error: Option<String>,
    /// Bumped whenever the message pane is replaced; the pane scrolls to the
    /// bottom on change.
    pub scroll_epoch: u32,
    /// Bumped whenever the input should take focus.
    pub focus_epoch: u32,
}

/// [`ChatView`] backed by the yewdux store.
#[derive(Clone)]
pub struct StoreView {
    dispatch: Dispatch<ChatStore>,
}

impl std::fmt::Debug for StoreView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreView").finish_non_exhaustive()
    }
}

impl StoreView {
    pub fn new(dispatch: Dispatch<ChatStore>) -> Self {
        Self { dispatch }
    }
}

impl ChatView for StoreView {
    fn render_thread_list(&self, entries: Vec<ThreadEntry>) {
        self.dispatch.reduce_mut(|store| store.threads = entries);
    }

    fn render_messages(&self, blocks: Vec<MessageBlock>) {
        self.dispatch.reduce_mut(|store| {
            store.messages = blocks;
            store.scroll_epoch = store.scroll_epoch.wrapping_add(1);
        });
    }

    fn clear_messages(&self) {
        self.dispatch.reduce_mut(|store| store.messages.clear());
    }

    fn set_busy(&self, busy: bool) {
        self.dispatch.reduce_mut(|store| store.busy = busy);
    }

    fn clear_input(&self) {
        self.dispatch.reduce_mut(|store| store.input.clear());
    }

    fn focus_input(&self) {
        self.dispatch
            .reduce_mut(|store| store.focus_epoch = store.focus_epoch.wrapping_add(1));
    }

    fn notify_blocking(&self, message: &str) {
        if let Some(window) = web_sys::window()
            && window.alert_with_message(message).is_err()
        {
            tracing::error!(message, "failed to show alert");
        }
    }

    fn report_error(&self, message: &str) {
        let message = message.to_string();
        self.dispatch.reduce_mut(|store| store.error = Some(message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{MessageRole, ThreadId};

    fn view() -> (Dispatch<ChatStore>, StoreView) {
        let cx = yewdux::Context::new();
        let dispatch = Dispatch::<ChatStore>::new(&cx);
        (dispatch.clone(), StoreView::new(dispatch))
    }

    #[test]
    fn test_render_messages_replaces_pane_and_requests_scroll() {
        let (dispatch, view) = view();
        view.render_messages(vec![MessageBlock {
            role: MessageRole::Human,
            text: "one".into(),
        }]);
        view.render_messages(vec![MessageBlock {
            role: MessageRole::Ai,
            text: "two".into(),
        }]);

        let store = dispatch.get();
        assert_eq!(store.messages.len(), 1);
        assert_eq!(store.messages[0].text, "two");
        assert_eq!(store.scroll_epoch, 2);
    }

    #[test]
    fn test_busy_input_and_focus() {
        let (dispatch, view) = view();
        dispatch.reduce_mut(|store| store.input = "draft".into());

        view.clear_input();
        view.set_busy(true);
        assert!(dispatch.get().busy);
        assert!(dispatch.get().input.is_empty());

        view.set_busy(false);
        view.focus_input();
        assert!(!dispatch.get().busy);
        assert_eq!(dispatch.get().focus_epoch, 1);
    }

    #[test]
    fn test_thread_list_and_error_banner() {
        let (dispatch, view) = view();
        view.render_thread_list(vec![ThreadEntry {
            thread_id: ThreadId::new("t1"),
            label: "#t1".into(),
            selected: true,
        }]);
        view.report_error("Failed to load threads: boom");
        view.clear_messages();

        let store = dispatch.get();
        assert_eq!(store.threads.len(), 1);
        assert_eq!(store.error.as_deref(), Some("Failed to load threads: boom"));
        assert!(store.messages.is_empty());
    }
}
