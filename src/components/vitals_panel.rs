use super::regen_meter::RegenMeter;
use crate::config::{ENERGY_REGEN_MS, STAMINA_REGEN_MS};
use crate::model::PlayerVitals;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct VitalsPanelProps {
    pub vitals: PlayerVitals,
}

#[function_component]
pub fn VitalsPanel(props: &VitalsPanelProps) -> Html {
    html! {
        <div id="top-bar" style="display:flex; gap:16px; background:rgba(22,27,34,0.9); border-bottom:1px solid #30363d; padding:10px 14px; font-size:14px;">
            <RegenMeter label="Energy" icon="⚡" color="#eab308"
                snapshot={props.vitals.energy} fallback_interval_ms={ENERGY_REGEN_MS} />
            <RegenMeter label="Stamina" icon="🔥" color="#f85149"
                snapshot={props.vitals.stamina} fallback_interval_ms={STAMINA_REGEN_MS} />
        </div>
    }
}
