use crate::state::onboarding::{self, SLIDES};
use crate::state::{OnboardingAction, OnboardingState};
use crate::storage::DeviceStore;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct OnboardingOverlayProps {
    pub store: DeviceStore,
}

#[function_component]
pub fn OnboardingOverlay(props: &OnboardingOverlayProps) -> Html {
    let state = {
        let store = props.store.clone();
        use_reducer(move || OnboardingState::load(&*store))
    };

    // Remember completion as soon as the user finishes or skips
    {
        let store = props.store.clone();
        use_effect_with(state.finished, move |finished| {
            if *finished {
                onboarding::mark_complete(&*store);
            }
            || ()
        });
    }

    if state.finished {
        return html! {};
    }
    let Some(slide) = SLIDES.get(state.slide) else {
        return html! {};
    };

    let next_btn = {
        let state = state.clone();
        Callback::from(move |_| state.dispatch(OnboardingAction::Next))
    };
    let back_btn = {
        let state = state.clone();
        Callback::from(move |_| state.dispatch(OnboardingAction::Back))
    };
    let skip_btn = {
        let state = state.clone();
        Callback::from(move |_| state.dispatch(OnboardingAction::Skip))
    };
    let next_label = if state.is_last() { "Let's go" } else { "Next" };

    html! {
        <div style="position:fixed; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.7); z-index:50;">
            <div style="background:rgba(0,0,0,0.87); border:2px solid #30363d; padding:28px 36px; border-radius:14px; max-width:420px; width:90%; box-shadow:0 0 0 1px #1a1f24, 0 6px 18px rgba(0,0,0,0.6); font-size:14px; line-height:1.4;">
                <h2 style="margin:0 0 12px 0; font-size:22px; color:#d4af37; text-align:center;">{ slide.title }</h2>
                <p style="margin:4px 0 16px 0; text-align:center; opacity:0.85;">{ slide.body }</p>
                <div style="display:flex; gap:6px; justify-content:center; margin-bottom:14px;">
                    { for (0..state.total).map(|i| {
                        let bg = if i == state.slide { "#d4af37" } else { "#30363d" };
                        html! { <span key={i} style={format!("width:8px; height:8px; border-radius:50%; background:{};", bg)}></span> }
                    }) }
                </div>
                <div style="display:flex; gap:12px; justify-content:center;">
                    if state.slide > 0 {
                        <button onclick={back_btn}>{"Back"}</button>
                    }
                    <button onclick={next_btn}>{ next_label }</button>
                    <button onclick={skip_btn}>{"Skip"}</button>
                </div>
            </div>
        </div>
    }
}
