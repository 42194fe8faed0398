//! End-to-end flows: controller + HTTP client against a mock backend.

use std::cell::RefCell;

use serde_json::json;
use shared::models::{MessageRole, ThreadId};
use shared::{
    ChatClient, ChatController, ChatView, MessageBlock, SendOutcome, StaticCsrfToken, ThreadEntry,
};
use url::Url;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, method, path},
};

#[derive(Default)]
struct PageView {
    sidebar: RefCell<Vec<ThreadEntry>>,
    pane: RefCell<Vec<MessageBlock>>,
    alerts: RefCell<Vec<String>>,
}

impl ChatView for PageView {
    fn render_thread_list(&self, entries: Vec<ThreadEntry>) {
        *self.sidebar.borrow_mut() = entries;
    }

    fn render_messages(&self, blocks: Vec<MessageBlock>) {
        *self.pane.borrow_mut() = blocks;
    }

    fn clear_messages(&self) {
        self.pane.borrow_mut().clear();
    }

    fn set_busy(&self, _busy: bool) {}

    fn clear_input(&self) {}

    fn focus_input(&self) {}

    fn notify_blocking(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }

    fn report_error(&self, _message: &str) {}
}

fn page(server: &MockServer) -> ChatController<ChatClient, PageView> {
    let base = Url::parse(&format!("{}/chat/api/", server.uri())).unwrap();
    ChatController::new(
        ChatClient::new(base, StaticCsrfToken::default()),
        PageView::default(),
    )
}

#[tokio::test]
async fn test_fresh_page_with_no_threads() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/chat/api/threads/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"threads": []})))
        .mount(&server)
        .await;
    let chat = page(&server);

    chat.refresh_thread_list(None).await.unwrap();

    assert!(chat.view().sidebar.borrow().is_empty());
    assert!(chat.selected_thread().is_none());
}

#[tokio::test]
async fn test_first_message_creates_and_selects_thread() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/api/send/"))
        .and(body_json(json!({
            "thread_id": null,
            "message": "hello",
            "deep_research": false
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "thread_id": "abc123",
            "messages": [
                {"type": "human", "content": "hello"},
                {"type": "ai", "content": "hi there"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/chat/api/threads/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "threads": [{"thread_id": "abc123", "updated_at": null}]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/chat/api/thread/abc123/"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;
    let chat = page(&server);

    let outcome = chat.send_message("hello").await.unwrap();

    assert_eq!(
        outcome,
        SendOutcome::Delivered {
            thread_id: ThreadId::new("abc123")
        }
    );
    let pane = chat.view().pane.borrow();
    assert_eq!(pane.len(), 2);
    assert_eq!(pane[0].role, MessageRole::Human);
    assert_eq!(pane[0].text, "hello");
    assert_eq!(pane[1].role, MessageRole::Ai);
    assert_eq!(pane[1].text, "hi there");

    let sidebar = chat.view().sidebar.borrow();
    assert_eq!(sidebar.len(), 1);
    assert!(sidebar[0].selected);
    assert!(sidebar[0].label.starts_with("#abc123"));
}

#[tokio::test]
async fn test_switching_threads_shows_server_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/chat/api/threads/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "threads": [
                {"thread_id": "t-1", "updated_at": null},
                {"thread_id": "t-2", "updated_at": null}
            ]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/chat/api/thread/t-2/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "messages": [
                {"type": "human", "content": "3"},
                {"type": "ai", "content": "1"},
                {"type": "human", "content": "2"}
            ]
        })))
        .mount(&server)
        .await;
    let chat = page(&server);

    chat.select_thread(ThreadId::new("t-2")).await.unwrap();

    let texts: Vec<_> = chat
        .view()
        .pane
        .borrow()
        .iter()
        .map(|block| block.text.clone())
        .collect();
    assert_eq!(texts, ["3", "1", "2"]);
    let selected: Vec<_> = chat
        .view()
        .sidebar
        .borrow()
        .iter()
        .filter(|entry| entry.selected)
        .map(|entry| entry.thread_id.clone())
        .collect();
    assert_eq!(selected, [ThreadId::new("t-2")]);
}

#[tokio::test]
async fn test_rejected_send_shows_one_notice() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/api/send/"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({"detail": "CSRF Failed"})))
        .expect(1)
        .mount(&server)
        .await;
    let chat = page(&server);

    let err = chat.send_message("hello").await.unwrap_err();

    assert_eq!(err.status(), Some(403));
    assert_eq!(chat.view().alerts.borrow().len(), 1);
    assert!(chat.selected_thread().is_none());
    assert!(chat.view().pane.borrow().is_empty());
}
