use shared::MessageBlock;
use web_sys::Element;
use yew::{Html, NodeRef, Properties, function_component, html, use_effect_with, use_node_ref};

use super::message_node::MessageNode;

#[derive(Properties, PartialEq)]
pub struct ThreadViewProps {
    pub messages: Vec<MessageBlock>,
    /// Changes whenever the pane content is replaced.
    #[prop_or_default]
    pub scroll_epoch: u32,
}

fn scroll_to_bottom(node: &NodeRef) {
    if let Some(pane) = node.cast::<Element>() {
        pane.set_scroll_top(pane.scroll_height());
    }
}

#[function_component(ThreadView)]
pub fn thread_view(props: &ThreadViewProps) -> Html {
    let pane = use_node_ref();

    {
        let pane = pane.clone();
        use_effect_with(props.scroll_epoch, move |_| {
            scroll_to_bottom(&pane);
            || ()
        });
    }

    html! {
        <div id="chat-messages" ref={pane} class="flex-1 overflow-y-auto p-4 flex flex-col gap-2">
            if props.messages.is_empty() {
                <div class="p-6 text-sm text-base-content/70">
                    {"Select a thread or type a message to start a new chat."}
                </div>
            } else {
                { for props.messages.iter().cloned().map(|block| html! { <MessageNode {block} /> }) }
            }
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use shared::models::MessageRole;
    use yew::ServerRenderer;

    #[tokio::test]
    async fn test_messages_render_in_order() {
        let html = ServerRenderer::<ThreadView>::with_props(|| ThreadViewProps {
            messages: vec![
                MessageBlock {
                    role: MessageRole::Human,
                    text: "first".into(),
                },
                MessageBlock {
                    role: MessageRole::Ai,
                    text: "second".into(),
                },
            ],
            scroll_epoch: 1,
        })
        .render()
        .await;

        assert!(html.contains("id=\"chat-messages\""));
        assert!(html.find("first").unwrap() < html.find("second").unwrap());
        assert_eq!(html.matches("message-box").count(), 2);
    }

    #[tokio::test]
    async fn test_empty_pane_shows_hint() {
        let html = ServerRenderer::<ThreadView>::with_props(|| ThreadViewProps {
            messages: Vec::new(),
            scroll_epoch: 0,
        })
        .render()
        .await;

        assert!(html.contains("start a new chat"));
        assert!(!html.contains("message-box"));
    }
}
