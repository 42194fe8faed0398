use shared::ThreadEntry;
use shared::models::ThreadId;
use yew::{Callback, Html, Properties, classes, function_component, html};

#[derive(Properties, PartialEq)]
pub struct ThreadListProps {
    pub threads: Vec<ThreadEntry>,
    pub on_select: Callback<ThreadId>,
}

#[function_component(ThreadList)]
pub fn thread_list(props: &ThreadListProps) -> Html {
    if props.threads.is_empty() {
        return html! {
            <ul id="thread-list" class="divide-y divide-base-300">
                <li class="p-4 text-sm text-base-content/70">
                    {"No threads yet. Send a message to start one."}
                </li>
            </ul>
        };
    }

    html! {
        <ul id="thread-list" class="divide-y divide-base-300">
            { for props.threads.iter().map(|entry| {
                let thread_id = entry.thread_id.clone();
                let on_select = props.on_select.clone();
                let class = if entry.selected {
                    classes!("thread-item", "p-3", "bg-base-300", "cursor-pointer", "selected")
                } else {
                    classes!("thread-item", "p-3", "hover:bg-base-200", "cursor-pointer")
                };
                html! {
                    <li
                        key={entry.thread_id.as_str()}
                        class={class}
                        data-thread-id={entry.thread_id.to_string()}
                        onclick={Callback::from(move |_| on_select.emit(thread_id.clone()))}
                    >
                        { entry.label.clone() }
                    </li>
                }
            })}
        </ul>
    }
}
