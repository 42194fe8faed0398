use web_sys::HtmlInputElement;
use yew::{
    Callback, Html, Properties, TargetCast, classes, function_component, html, use_effect_with,
    use_node_ref,
};

#[derive(Properties, PartialEq, Clone)]
pub struct ThreadComposerProps {
    pub text: String,
    pub on_text_change: Callback<String>,
    pub on_submit: Callback<()>,
    #[prop_or(false)]
    pub disabled: bool,
    /// Changes whenever the input should take focus.
    #[prop_or_default]
    pub focus_epoch: u32,
}

#[function_component(ThreadComposer)]
pub fn thread_composer(props: &ThreadComposerProps) -> Html {
    let input_ref = use_node_ref();

    {
        let input_ref = input_ref.clone();
        use_effect_with(props.focus_epoch, move |_| {
            if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                let _ = input.focus();
            }
            || ()
        });
    }

    let on_input = {
        let on_text_change = props.on_text_change.clone();
        Callback::from(move |event: yew::events::InputEvent| {
            let target: HtmlInputElement = event.target_unchecked_into();
            on_text_change.emit(target.value());
        })
    };

    let on_keydown = {
        let on_submit = props.on_submit.clone();
        let disabled = props.disabled;
        Callback::from(move |event: yew::events::KeyboardEvent| {
            if event.key() == "Enter" && !disabled {
                event.prevent_default();
                on_submit.emit(());
            }
        })
    };

    let on_click = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |_| on_submit.emit(()))
    };

    html! {
        <div class="flex items-center gap-3">
            <input
                id="chat-input"
                ref={input_ref}
                type="text"
                class={classes!("input", "input-bordered", "flex-1")}
                placeholder="Type your message"
                value={props.text.clone()}
                oninput={on_input}
                onkeydown={on_keydown}
                disabled={props.disabled}
            />
            <button
                id="send-btn"
                class="btn btn-primary"
                type="button"
                onclick={on_click}
                disabled={props.disabled}
            >
                {"Send"}
            </button>
        </div>
    }
}
