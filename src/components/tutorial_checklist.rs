use super::tutorial_provider::TutorialContext;
use crate::state::TutorialPhase;
use yew::prelude::*;

#[function_component]
pub fn TutorialChecklist() -> Html {
    let Some(ctx) = use_context::<TutorialContext>() else {
        return html! {};
    };
    if !ctx.state.is_active() {
        return html! {};
    }
    let state = &ctx.state;
    let current_id = state.current_step().map(|s| s.id);
    let go_cb = {
        let cb = ctx.go_to_current.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let skip_cb = {
        let cb = ctx.dismiss.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let heading = match state.phase() {
        TutorialPhase::NotStarted => "Getting started".to_string(),
        _ => format!("Getting started ({}/{})", state.completed_count(), state.total_steps()),
    };

    html! {
        <div style="background:#161b22; border:1px solid #30363d; border-radius:10px; padding:12px 14px; display:flex; flex-direction:column; gap:8px; font-size:13px;">
            <div style="display:flex; justify-content:space-between; align-items:center;">
                <h3 style="margin:0; font-size:15px;">{ heading }</h3>
                <button onclick={skip_cb} style="padding:2px 8px; font-size:11px;">{"Skip tutorial"}</button>
            </div>
            <ul style="margin:0; padding:0; list-style:none; display:flex; flex-direction:column; gap:6px;">
                { for state.steps.iter().map(|step| {
                    let is_current = Some(step.id) == current_id;
                    let mark = if step.completed { "✔" } else if is_current { "▶" } else { "○" };
                    let style = if step.completed {
                        "display:flex; gap:8px; opacity:0.5; text-decoration:line-through;"
                    } else if is_current {
                        "display:flex; gap:8px; color:#58a6ff; font-weight:600;"
                    } else {
                        "display:flex; gap:8px;"
                    };
                    html! {
                        <li key={step.id} style={style}>
                            <span style="width:14px;">{ mark }</span>
                            <span style="flex:1;">{ step.title }</span>
                            if let Some(r) = step.reward {
                                <span style="color:#d4af37; font-variant-numeric:tabular-nums;">{ r.label() }</span>
                            }
                        </li>
                    }
                }) }
            </ul>
            if let Some(step) = state.current_step() {
                <div style="display:flex; gap:8px; align-items:center;">
                    <span style="flex:1; opacity:0.8;">{ step.description }</span>
                    <button onclick={go_cb}>{ format!("Go to {}", step.target_page.title()) }</button>
                </div>
            }
        </div>
    }
}
