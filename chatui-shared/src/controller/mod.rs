//! Thread and message synchronisation.
//!
//! [`ChatController`] owns the [`SessionState`] and is the only thing that
//! mutates it. User actions call into it; it talks to a [`ChatBackend`] and
//! pushes results to a [`ChatView`].
//!
//! Sidebar refreshes and message-pane fetches each carry a generation number.
//! A response is rendered only if no newer request of the same kind started
//! while it was in flight, so rapid thread switching never lets an older
//! response overwrite a newer one.

mod session;
mod view;


use std::cell::{Cell, RefCell};

use tracing::{debug, info, warn};

use crate::client::ChatBackend;
use crate::errors::ChatError;
use crate::models::{Message, SendMessageRequest, SendMessageResponse, ThreadId};

pub use session::SessionState;
pub use view::{ChatView, MessageBlock, ThreadEntry};

/// Shown when a send fails; the user must acknowledge it.
pub const SEND_FAILURE_NOTICE: &str = "Error sending message.";

/// What [`ChatController::send_message`] did with the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// The input was empty after trimming; nothing was sent.
    Empty,
    /// Another send is still in flight; nothing was sent.
    InFlight,
    /// The message was accepted and now lives in `thread_id`.
    Delivered {
        /// Thread the message landed in, now the selection.
        thread_id: ThreadId,
    },
}

/// Coordinates session state, backend calls and view updates.
#[derive(Debug)]
pub struct ChatController<B, V> {
    backend: B,
    view: V,
    session: RefCell<SessionState>,
    sending: Cell<bool>,
    list_generation: Cell<u64>,
    pane_generation: Cell<u64>,
}

/// Leaves the busy state when dropped, whichever way the send ended.
struct BusyGuard<'a, V: ChatView> {
    sending: &'a Cell<bool>,
    view: &'a V,
}

impl<'a, V: ChatView> BusyGuard<'a, V> {
    fn enter(sending: &'a Cell<bool>, view: &'a V) -> Self {
        sending.set(true);
        view.clear_input();
        view.set_busy(true);
        Self { sending, view }
    }
}

impl<V: ChatView> Drop for BusyGuard<'_, V> {
    fn drop(&mut self) {
        self.sending.set(false);
        self.view.set_busy(false);
        self.view.focus_input();
    }
}

fn advance(generation: &Cell<u64>) -> u64 {
    let next = generation.get().wrapping_add(1);
    generation.set(next);
    next
}

impl<B: ChatBackend, V: ChatView> ChatController<B, V> {
    /// Controller for a fresh page: new-chat mode, deep research off.
    #[must_use]
    pub fn new(backend: B, view: V) -> Self {
        Self::with_session(backend, view, SessionState::new())
    }

    /// Start from an existing session, e.g. a thread picked on the command line.
    #[must_use]
    pub fn with_session(backend: B, view: V, session: SessionState) -> Self {
        Self {
            backend,
            view,
            session: RefCell::new(session),
            sending: Cell::new(false),
            list_generation: Cell::new(0),
            pane_generation: Cell::new(0),
        }
    }

    /// The backend requests go to.
    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// The view being driven.
    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Snapshot of the current session state.
    #[must_use]
    pub fn session(&self) -> SessionState {
        self.session.borrow().clone()
    }

    /// The active thread, `None` in new-chat mode.
    #[must_use]
    pub fn selected_thread(&self) -> Option<ThreadId> {
        self.session.borrow().selected_thread().cloned()
    }

    /// Whether sends request deep research.
    #[must_use]
    pub fn deep_research(&self) -> bool {
        self.session.borrow().deep_research()
    }

    /// Follow the deep-research checkbox.
    pub fn set_deep_research(&self, enabled: bool) {
        debug!(enabled, "deep research toggled");
        self.session.borrow_mut().set_deep_research(enabled);
    }

    /// Whether a send is in flight.
    #[must_use]
    pub fn is_sending(&self) -> bool {
        self.sending.get()
    }

    /// Rebuild the sidebar, marking `selected` if it is listed.
    ///
    /// # Errors
    /// Returns the backend error after reporting it to the view. A failure of
    /// a request that has since been superseded is only logged.
    pub async fn refresh_thread_list(&self, selected: Option<&ThreadId>) -> Result<(), ChatError> {
        let generation = advance(&self.list_generation);
        let selected = selected.cloned();
        let result = self.backend.list_threads().await;

        if generation != self.list_generation.get() {
            debug!(generation, "discarding superseded thread list");
            return Ok(());
        }

        match result {
            Ok(threads) => {
                let entries = threads
                    .iter()
                    .map(|summary| ThreadEntry::from_summary(summary, selected.as_ref()))
                    .collect();
                self.view.render_thread_list(entries);
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "failed to load threads");
                self.view
                    .report_error(&format!("Failed to load threads: {err}"));
                Err(err)
            }
        }
    }

    /// Replace the message pane with `messages`, in order.
    pub fn render_messages(&self, messages: &[Message]) {
        self.view
            .render_messages(messages.iter().map(MessageBlock::from).collect());
    }

    /// Fetch the messages of `thread_id` and render them.
    ///
    /// # Errors
    /// Returns the backend error after reporting it to the view. A failure of
    /// a request that has since been superseded is only logged.
    pub async fn fetch_and_render_messages(&self, thread_id: &ThreadId) -> Result<(), ChatError> {
        let generation = advance(&self.pane_generation);
        let result = self.backend.get_thread(thread_id).await;

        if generation != self.pane_generation.get() {
            debug!(thread_id = %thread_id, generation, "discarding superseded messages");
            return Ok(());
        }

        match result {
            Ok(messages) => {
                self.render_messages(&messages);
                Ok(())
            }
            Err(err) => {
                warn!(thread_id = %thread_id, error = %err, "failed to load thread");
                self.view
                    .report_error(&format!("Failed to load thread: {err}"));
                Err(err)
            }
        }
    }

    /// Make `thread_id` the active thread: highlight it in the sidebar and
    /// show its messages. Both fetches run concurrently.
    ///
    /// # Errors
    /// Returns the first failure of the two fetches; the other one still
    /// completes.
    pub async fn select_thread(&self, thread_id: ThreadId) -> Result<(), ChatError> {
        info!(thread_id = %thread_id, "selecting thread");
        self.session
            .borrow_mut()
            .set_selected_thread(Some(thread_id.clone()));

        let (list, pane) = futures::join!(
            self.refresh_thread_list(Some(&thread_id)),
            self.fetch_and_render_messages(&thread_id)
        );
        list.and(pane)
    }

    /// Synchronous half of [`start_new_chat`](Self::start_new_chat): clear the
    /// selection and the pane without touching the network.
    pub fn reset_to_new_chat(&self) {
        info!("starting new chat");
        self.session.borrow_mut().set_selected_thread(None);
        advance(&self.pane_generation);
        self.view.clear_messages();
    }

    /// Switch to "new chat" mode and refresh the sidebar without a selection.
    ///
    /// # Errors
    /// Returns the sidebar refresh failure.
    pub async fn start_new_chat(&self) -> Result<(), ChatError> {
        self.reset_to_new_chat();
        self.refresh_thread_list(None).await
    }

    /// Send `raw_input` to the current thread, or open a new one.
    ///
    /// Input and send control are disabled while the request is in flight and
    /// re-enabled (with the input focused) however it ends.
    ///
    /// # Errors
    /// Returns the backend error after showing a blocking notice. Selection
    /// and rendered messages are left untouched on failure.
    pub async fn send_message(&self, raw_input: &str) -> Result<SendOutcome, ChatError> {
        let message = raw_input.trim();
        if message.is_empty() {
            return Ok(SendOutcome::Empty);
        }
        if self.sending.get() {
            debug!("send already in flight");
            return Ok(SendOutcome::InFlight);
        }

        let request = {
            let session = self.session.borrow();
            debug!(
                new_chat = session.is_new_chat(),
                deep_research = session.deep_research(),
                "sending message"
            );
            SendMessageRequest {
                thread_id: session.selected_thread().cloned(),
                message: message.to_owned(),
                deep_research: session.deep_research(),
            }
        };

        let busy = BusyGuard::enter(&self.sending, &self.view);
        let response = match self.backend.post_message(&request).await {
            Ok(response) => response,
            Err(err) => {
                warn!(error = %err, "failed to send message");
                self.view.notify_blocking(SEND_FAILURE_NOTICE);
                return Err(err);
            }
        };

        let thread_id = self.adopt_send_response(response);
        drop(busy);

        // Failures are already reported to the view; the message itself landed.
        let _ = self.refresh_thread_list(Some(&thread_id)).await;
        Ok(SendOutcome::Delivered { thread_id })
    }

    fn adopt_send_response(&self, response: SendMessageResponse) -> ThreadId {
        let SendMessageResponse {
            thread_id,
            messages,
        } = response;
        info!(thread_id = %thread_id, messages = messages.len(), "message delivered");

        self.session
            .borrow_mut()
            .set_selected_thread(Some(thread_id.clone()));
        advance(&self.pane_generation);
        self.render_messages(&messages);
        thread_id
    }
}
