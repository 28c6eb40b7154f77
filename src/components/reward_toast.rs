use crate::events::{RewardBus, RewardEvent};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::prelude::*;

const TOAST_MS: i32 = 2_500;

/// The toast on screen, tagged with the sequence number of the event that showed it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastState {
    pub shown: Option<(u64, RewardEvent)>,
}

pub enum ToastAction {
    Show(u64, RewardEvent),
    /// Hide timer for toast `seq`; a newer toast stays up.
    Expire(u64),
}

impl Reducible for ToastState {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ToastAction::Show(seq, ev) => Rc::new(ToastState {
                shown: Some((seq, ev)),
            }),
            ToastAction::Expire(seq) => match self.shown {
                Some((current, _)) if current == seq => Rc::new(ToastState::default()),
                _ => self,
            },
        }
    }
}

#[function_component]
pub fn RewardToast() -> Html {
    let bus = use_context::<RewardBus>();
    let toast = use_reducer(ToastState::default);
    let next_seq = use_mut_ref(|| 0u64);

    {
        let toast = toast.clone();
        use_effect_with(bus, move |bus| {
            let sub = bus.as_ref().map(|bus| {
                bus.subscribe(Callback::from(move |ev: RewardEvent| {
                    let seq = {
                        let mut next = next_seq.borrow_mut();
                        *next += 1;
                        *next
                    };
                    toast.dispatch(ToastAction::Show(seq, ev));
                    let toast = toast.clone();
                    let hide =
                        Closure::once_into_js(move || toast.dispatch(ToastAction::Expire(seq)));
                    if let Some(win) = web_sys::window() {
                        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
                            hide.unchecked_ref(),
                            TOAST_MS,
                        );
                    }
                }))
            });
            move || drop(sub)
        });
    }

    let Some((_, ev)) = toast.shown else {
        return html! {};
    };
    html! {
        <div style="position:fixed; top:72px; left:50%; transform:translateX(-50%); background:rgba(13,17,23,0.95); border:1px solid #d4af37; color:#d4af37; border-radius:999px; padding:6px 16px; font-weight:600; z-index:60;">
            { format!("+{} {}", ev.amount, ev.kind.icon()) }
        </div>
    }
}
