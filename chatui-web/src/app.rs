use yew::{Html, function_component, html};
use yewdux::YewduxRoot;

use crate::pages::ChatPage;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <YewduxRoot>
            <div class="h-screen flex flex-col">
                <header class="navbar bg-base-200 border-b border-base-300">
                    <span class="text-lg font-semibold px-2">{"Chat"}</span>
                </header>
                <main class="flex-1 min-h-0">
                    <ChatPage />
                </main>
            </div>
        </YewduxRoot>
    }
}
