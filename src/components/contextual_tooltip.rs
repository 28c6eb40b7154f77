use super::tutorial_provider::TutorialContext;
use crate::state::tooltip;
use crate::storage::DeviceStore;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ContextualTooltipProps {
    /// Tooltip id; also the storage key suffix for one-shot tips.
    pub id: AttrValue,
    /// When set, the tooltip follows this tutorial step instead of its own flag.
    #[prop_or_default]
    pub step_id: Option<AttrValue>,
    #[prop_or_default]
    pub text: AttrValue,
    #[prop_or_default]
    pub children: Html,
}

#[function_component]
pub fn ContextualTooltip(props: &ContextualTooltipProps) -> Html {
    let tutorial = use_context::<TutorialContext>();
    let store = use_context::<DeviceStore>();
    let dismissed = {
        let store = store.clone();
        let id = props.id.clone();
        use_state(move || store.is_some_and(|s| tooltip::is_dismissed(&*s, &id)))
    };

    let (show, title, body) = match &props.step_id {
        Some(step_id) => match tutorial.as_ref().filter(|t| t.is_step_active(step_id)) {
            Some(t) => match t.state.step(step_id) {
                Some(step) => (true, step.title.to_string(), step.description.to_string()),
                None => (false, String::new(), String::new()),
            },
            None => (false, String::new(), String::new()),
        },
        None => (!*dismissed, String::new(), props.text.to_string()),
    };

    if !show {
        return html! { <>{ props.children.clone() }</> };
    }

    let got_it = {
        let dismissed = dismissed.clone();
        let id = props.id.clone();
        let standalone = props.step_id.is_none();
        Callback::from(move |_| {
            if standalone {
                if let Some(s) = &store {
                    tooltip::dismiss(&**s, &id);
                }
                dismissed.set(true);
            }
        })
    };

    html! {
        <div style="position:relative; display:inline-block;">
            <div style="border-radius:8px; box-shadow:0 0 0 2px #58a6ff, 0 0 12px rgba(88,166,255,0.6);">
                { props.children.clone() }
            </div>
            <div style="position:absolute; top:calc(100% + 8px); left:0; z-index:20; background:#0d1117; border:1px solid #58a6ff; border-radius:8px; padding:8px 10px; min-width:200px; max-width:260px; font-size:12px; line-height:1.4;">
                if !title.is_empty() {
                    <div style="font-weight:600; margin-bottom:4px;">{ title }</div>
                }
                <div style="opacity:0.85;">{ body }</div>
                if props.step_id.is_none() {
                    <button onclick={got_it} style="margin-top:6px; padding:2px 8px; font-size:11px;">{"Got it"}</button>
                }
            </div>
        </div>
    }
}
