use crate::hooks::use_countdown;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CountdownLabelProps {
    pub label: AttrValue,
    /// Epoch milliseconds.
    pub deadline: u64,
}

#[function_component]
pub fn CountdownLabel(props: &CountdownLabelProps) -> Html {
    let cd = use_countdown(props.deadline);
    let color = if cd.done { "#2ea043" } else { "#8b949e" };
    html! {
        <div style="display:flex; gap:6px; font-size:12px;">
            <span style="opacity:0.7;">{ props.label.clone() }</span>
            <span style={format!("font-variant-numeric:tabular-nums; color:{};", color)}>{ cd.label }</span>
        </div>
    }
}
