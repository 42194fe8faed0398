//! Plain-text rendering of the chat state for the terminal.

use std::cell::RefCell;
use std::io::{self, Stdout, Write};

use shared::models::MessageRole;
use shared::{ChatView, MessageBlock, ThreadEntry};

/// [`ChatView`] that prints to a writer, stdout by default.
///
/// Errors go to stderr so that stdout only carries rendered chat content.
#[derive(Debug)]
pub struct TerminalView<W: Write = Stdout> {
    out: RefCell<W>,
    show_sidebar: bool,
}

impl TerminalView {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: RefCell::new(out),
            show_sidebar: true,
        }
    }

    /// Skip printing sidebar refreshes.
    #[must_use]
    pub fn without_sidebar(mut self) -> Self {
        self.show_sidebar = false;
        self
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }

    fn write_lines(&self, lines: impl IntoIterator<Item = String>) {
        let mut out = self.out.borrow_mut();
        for line in lines {
            if let Err(err) = writeln!(out, "{line}") {
                tracing::error!(error = %err, "failed to write output");
                return;
            }
        }
    }
}

pub fn thread_line(entry: &ThreadEntry) -> String {
    let marker = if entry.selected { '*' } else { ' ' };
    format!("{marker} {}", entry.label)
}

pub fn message_line(block: &MessageBlock) -> String {
    let speaker = match block.role {
        MessageRole::Human => "you",
        MessageRole::Ai => "ai",
    };
    format!("[{speaker}] {}", block.text)
}

impl<W: Write> ChatView for TerminalView<W> {
    fn render_thread_list(&self, entries: Vec<ThreadEntry>) {
        if !self.show_sidebar {
            return;
        }
        if entries.is_empty() {
            self.write_lines(["No threads yet.".to_string()]);
        } else {
            self.write_lines(entries.iter().map(thread_line));
        }
    }

    fn render_messages(&self, blocks: Vec<MessageBlock>) {
        self.write_lines(blocks.iter().map(message_line));
    }

    fn clear_messages(&self) {}

    fn set_busy(&self, busy: bool) {
        tracing::debug!(busy, "busy state changed");
    }

    fn clear_input(&self) {}

    fn focus_input(&self) {}

    fn notify_blocking(&self, message: &str) {
        eprintln!("error: {message}");
    }

    fn report_error(&self, message: &str) {
        eprintln!("warning: {message}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::ThreadId;

    fn entry(id: &str, selected: bool) -> ThreadEntry {
        ThreadEntry {
            thread_id: ThreadId::new(id),
            label: format!("#{id}"),
            selected,
        }
    }

    #[test]
    fn test_sidebar_marks_selected_thread() {
        let view = TerminalView::new(Vec::new());
        view.render_thread_list(vec![entry("t1", false), entry("t2", true)]);

        let output = String::from_utf8(view.into_inner()).unwrap();
        assert_eq!(output, "  #t1\n* #t2\n");
    }

    #[test]
    fn test_empty_sidebar_hint() {
        let view = TerminalView::new(Vec::new());
        view.render_thread_list(Vec::new());

        let output = String::from_utf8(view.into_inner()).unwrap();
        assert_eq!(output, "No threads yet.\n");
    }

    #[test]
    fn test_sidebar_can_be_hidden() {
        let view = TerminalView::new(Vec::new()).without_sidebar();
        view.render_thread_list(vec![entry("t1", true)]);
        view.render_messages(vec![
            MessageBlock {
                role: MessageRole::Human,
                text: "hello".into(),
            },
            MessageBlock {
                role: MessageRole::Ai,
                text: "hi there".into(),
            },
        ]);

        let output = String::from_utf8(view.into_inner()).unwrap();
        assert_eq!(output, "[you] hello\n[ai] hi there\n");
    }
}
