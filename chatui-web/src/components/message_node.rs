use shared::MessageBlock;
use shared::models::MessageRole;
use yew::{Html, Properties, classes, function_component, html};

#[derive(Properties, PartialEq, Clone)]
pub struct MessageNodeProps {
    pub block: MessageBlock,
}

const fn role_classes(role: MessageRole) -> (&'static str, &'static str) {
    match role {
        MessageRole::Human => ("message-human", "bg-primary text-primary-content self-end"),
        MessageRole::Ai => ("message-ai", "bg-base-200 text-base-content self-start"),
    }
}

/// One message, rendered as text; markup in the content is escaped.
#[function_component(MessageNode)]
pub fn message_node(props: &MessageNodeProps) -> Html {
    let (role_class, palette) = role_classes(props.block.role);
    let class = classes!(
        "message-box",
        role_class,
        "rounded-xl",
        "px-4",
        "py-3",
        "shadow-sm",
        "whitespace-pre-wrap",
        palette
    );

    html! {
        <div class={class}>{ props.block.text.clone() }</div>
    }
}
