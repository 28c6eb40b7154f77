use crate::hooks::use_regen;
use crate::model::ResourceSnapshot;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct RegenMeterProps {
    pub label: AttrValue,
    pub icon: AttrValue,
    pub color: AttrValue,
    pub snapshot: ResourceSnapshot,
    /// Used when the server did not send an interval.
    pub fallback_interval_ms: u64,
}

#[function_component]
pub fn RegenMeter(props: &RegenMeterProps) -> Html {
    let snap = props.snapshot;
    let regen = use_regen(
        snap.current,
        snap.max,
        snap.interval_or(props.fallback_interval_ms),
        snap.next_regen_at,
    );
    let res = regen.resource;
    let pct = (res.progress() * 100.0).round();

    let row_style = "display:flex; align-items:center; gap:8px;";
    let icon_style = "width:20px; text-align:center; flex-shrink:0;";
    let value_style = "min-width:70px; text-align:right; font-variant-numeric:tabular-nums; font-weight:600;";
    html! {
        <div style="display:flex; flex-direction:column; gap:4px; min-width:150px;">
            <div style={row_style}>
                <span style={format!("{} color:{};", icon_style, props.color)}>{ props.icon.clone() }</span>
                <span style="flex:1; font-weight:500;">{ props.label.clone() }</span>
                <span style={value_style}>{ format!("{}/{}", res.current, res.max) }</span>
            </div>
            <div style="height:6px; background:#30363d; border-radius:3px; overflow:hidden;">
                <div style={format!("height:100%; width:{}%; background:{};", pct, props.color)}></div>
            </div>
            <div style="font-size:11px; opacity:0.7; text-align:right; font-variant-numeric:tabular-nums;">{ regen.label() }</div>
        </div>
    }
}
