use web_sys::HtmlInputElement;
use yew::{Callback, Html, Properties, TargetCast, function_component, html};

#[derive(Properties, PartialEq, Clone)]
pub struct DeepResearchToggleProps {
    pub on_toggle: Callback<bool>,
}

/// Unchecked on every page load.
#[function_component(DeepResearchToggle)]
pub fn deep_research_toggle(props: &DeepResearchToggleProps) -> Html {
    let on_change = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |event: yew::events::Event| {
            let target: HtmlInputElement = event.target_unchecked_into();
            on_toggle.emit(target.checked());
        })
    };

    html! {
        <label class="label cursor-pointer gap-2">
            <input
                id="deep-research-toggle"
                type="checkbox"
                class="toggle toggle-sm"
                onchange={on_change}
            />
            <span class="label-text">{"Deep research"}</span>
        </label>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    #[tokio::test]
    async fn test_toggle_starts_unchecked() {
        let html = ServerRenderer::<DeepResearchToggle>::with_props(|| DeepResearchToggleProps {
            on_toggle: Callback::noop(),
        })
        .render()
        .await;

        assert!(html.contains("id=\"deep-research-toggle\""));
        assert!(!html.contains("checked"));
    }
}
