use std::ops::Deref;
use std::rc::Rc;

use shared::ChatClient;
use shared::controller::ChatController;
use shared::models::ThreadId;
use wasm_bindgen_futures::spawn_local;
use yew::{Callback, Html, Properties, function_component, html, use_effect_with, use_memo};
use yewdux::prelude::{use_dispatch, use_store};

use crate::api::{CookieCsrfToken, browser_client};
use crate::components::{DeepResearchToggle, ThreadComposer, ThreadList, ThreadView};
use crate::config::FrontendConfig;
use crate::models::app_state::{ChatStore, StoreView};

type PageController = ChatController<ChatClient<CookieCsrfToken>, StoreView>;

/// Shared handle to the page's controller; equal only to itself.
#[derive(Clone, Debug)]
pub struct ControllerHandle(Rc<PageController>);

impl PartialEq for ControllerHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for ControllerHandle {
    type Target = PageController;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[function_component(ChatPage)]
pub fn chat_page() -> Html {
    let dispatch = use_dispatch::<ChatStore>();
    let controller = use_memo((), move |_| {
        browser_client(&FrontendConfig::new()).map(|client| {
            ControllerHandle(Rc::new(ChatController::new(
                client,
                StoreView::new(dispatch),
            )))
        })
    });

    match &*controller {
        Ok(handle) => html! { <ChatWorkspace controller={handle.clone()} /> },
        Err(err) => {
            tracing::error!(error = %err, "chat client could not be created");
            html! {
                <div class="alert alert-error rounded-none">
                    { format!("Chat is unavailable: {err}") }
                </div>
            }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ChatWorkspaceProps {
    pub controller: ControllerHandle,
}

// Controller failures are already reported to the store, so the spawned
// tasks below drop their results.
#[function_component(ChatWorkspace)]
pub fn chat_workspace(props: &ChatWorkspaceProps) -> Html {
    let (store, dispatch) = use_store::<ChatStore>();

    {
        let controller = props.controller.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let _ = controller.refresh_thread_list(None).await;
            });
            || ()
        });
    }

    let on_select_thread = {
        let controller = props.controller.clone();
        Callback::from(move |thread_id: ThreadId| {
            let controller = controller.clone();
            spawn_local(async move {
                let _ = controller.select_thread(thread_id).await;
            });
        })
    };

    let on_new_chat = {
        let controller = props.controller.clone();
        Callback::from(move |_| {
            controller.reset_to_new_chat();
            let controller = controller.clone();
            spawn_local(async move {
                let _ = controller.refresh_thread_list(None).await;
            });
        })
    };

    let on_composer_text = {
        let dispatch = dispatch.clone();
        Callback::from(move |text: String| dispatch.reduce_mut(|store| store.input = text))
    };

    let on_submit_message = {
        let controller = props.controller.clone();
        let dispatch = dispatch.clone();
        Callback::from(move |_| {
            let input = dispatch.get().input.clone();
            let controller = controller.clone();
            spawn_local(async move {
                let _ = controller.send_message(&input).await;
            });
        })
    };

    let on_deep_research = {
        let controller = props.controller.clone();
        Callback::from(move |enabled: bool| controller.set_deep_research(enabled))
    };

    let on_dismiss_error = {
        let dispatch = dispatch.clone();
        Callback::from(move |_| dispatch.reduce_mut(|store| store.error = None))
    };

    html! {
        <div class="h-full flex">
            <div class="w-full md:w-1/3 border-r border-base-300 flex flex-col">
                <div class="flex items-center justify-between p-3 border-b border-base-300">
                    <h2 class="font-semibold">{"Threads"}</h2>
                    <button id="new-chat-btn" class="btn btn-sm btn-primary" type="button" onclick={on_new_chat}>
                        {"New Chat"}
                    </button>
                </div>
                <div class="flex-1 overflow-y-auto">
                    <ThreadList threads={store.threads.clone()} on_select={on_select_thread} />
                </div>
            </div>
            <div class="flex-1 flex flex-col">
                {
                    store.error.clone().map_or_else(
                        || html! {},
                        |error| html! {
                            <div class="alert alert-error rounded-none flex justify-between">
                                <span>{ error }</span>
                                <button class="btn btn-ghost btn-xs" type="button" onclick={on_dismiss_error}>
                                    {"Dismiss"}
                                </button>
                            </div>
                        },
                    )
                }
                <ThreadView messages={store.messages.clone()} scroll_epoch={store.scroll_epoch} />
                <div class="border-t border-base-300 p-4 bg-base-200 space-y-2">
                    <DeepResearchToggle on_toggle={on_deep_research} />
                    <ThreadComposer
                        text={store.input.clone()}
                        on_text_change={on_composer_text}
                        on_submit={on_submit_message}
                        disabled={store.busy}
                        focus_epoch={store.focus_epoch}
                    />
                </div>
            </div>
        </div>
    }
}
