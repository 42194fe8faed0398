use crate::models::ThreadId;

/// Page-lifetime client state.
///
/// `selected_thread` is `None` exactly while the user is composing a new chat.
/// Setters only record the new value; the caller decides what to re-render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    selected_thread: Option<ThreadId>,
    deep_research: bool,
}

impl SessionState {
    /// New-chat mode with deep research off, as on page load.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The active thread, if any.
    #[must_use]
    pub fn selected_thread(&self) -> Option<&ThreadId> {
        self.selected_thread.as_ref()
    }

    /// Select `thread_id`, or enter new-chat mode with `None`.
    pub fn set_selected_thread(&mut self, thread_id: Option<ThreadId>) {
        self.selected_thread = thread_id;
    }

    /// Whether the next message opens a new thread.
    #[must_use]
    pub fn is_new_chat(&self) -> bool {
        self.selected_thread.is_none()
    }

    /// Whether messages are routed through deep research.
    #[must_use]
    pub const fn deep_research(&self) -> bool {
        self.deep_research
    }

    /// Record the deep-research checkbox state.
    pub fn set_deep_research(&mut self, enabled: bool) {
        self.deep_research = enabled;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_session_is_new_chat() {
        let session = SessionState::new();
        assert!(session.is_new_chat());
        assert!(session.selected_thread().is_none());
        assert!(!session.deep_research());
    }

    #[test]
    fn test_selection_round_trip() {
        let mut session = SessionState::new();
        session.set_selected_thread(Some(ThreadId::new("abc")));
        assert_eq!(session.selected_thread(), Some(&ThreadId::new("abc")));
        assert!(!session.is_new_chat());

        session.set_selected_thread(None);
        assert!(session.is_new_chat());
    }

    #[test]
    fn test_deep_research_flag() {
        let mut session = SessionState::new();
        session.set_deep_research(true);
        assert!(session.deep_research());
        session.set_deep_research(false);
        assert!(!session.deep_research());
    }
}
