// Timer hooks: regen meters and countdowns. Each owns at most one interval,
// cleared when it is no longer needed or the component unmounts.
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::prelude::*;

use crate::config::REGEN_TICK_MS;
use crate::state::{Countdown, RegenAction, RegenResource, RegenState};
use crate::util::{cwarn, now_ms};

struct Interval {
    window: web_sys::Window,
    id: i32,
    _tick: Closure<dyn FnMut()>,
}

impl Interval {
    fn start(period_ms: u32, tick: impl FnMut() + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let tick = Closure::wrap(Box::new(tick) as Box<dyn FnMut()>);
        match window.set_interval_with_callback_and_timeout_and_arguments_0(
            tick.as_ref().unchecked_ref(),
            period_ms as i32,
        ) {
            Ok(id) => Some(Self {
                window,
                id,
                _tick: tick,
            }),
            Err(e) => {
                cwarn(&format!("setInterval failed: {:?}", e));
                None
            }
        }
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        self.window.clear_interval_with_handle(self.id);
    }
}

/// Locally regenerates a capped resource between server syncs.
/// Any change to the inputs re-seeds from them; no timer runs while full.
#[hook]
pub fn use_regen(
    initial: u32,
    max: u32,
    regen_interval_ms: u64,
    next_regen_at: Option<u64>,
) -> UseReducerHandle<RegenState> {
    let regen = use_reducer(move || {
        let now = now_ms();
        let mut resource = RegenResource::seeded(initial, max, regen_interval_ms, now);
        if let Some(deadline) = next_regen_at {
            resource = resource.with_deadline(deadline);
        }
        RegenState { resource, now }
    });

    {
        let regen = regen.clone();
        use_effect_with(
            (initial, max, regen_interval_ms, next_regen_at),
            move |&(current, max, regen_interval_ms, next_regen_at)| {
                regen.dispatch(RegenAction::Seed {
                    current,
                    max,
                    regen_interval_ms,
                    next_regen_at,
                    now: now_ms(),
                });
                || ()
            },
        );
    }

    let ticking = regen.needs_ticker();
    {
        let regen = regen.clone();
        use_effect_with((ticking, initial), move |&(ticking, _)| {
            let interval = if ticking {
                Interval::start(REGEN_TICK_MS, move || {
                    regen.dispatch(RegenAction::Tick { now: now_ms() })
                })
            } else {
                None
            };
            move || drop(interval)
        });
    }

    regen
}

#[derive(Clone, Debug, PartialEq)]
pub struct CountdownView {
    pub label: String,
    pub done: bool,
}

#[hook]
pub fn use_countdown(deadline: u64) -> CountdownView {
    let now = use_state(now_ms);
    let countdown = Countdown::new(deadline);
    let done = countdown.is_done(*now);
    {
        let now = now.clone();
        use_effect_with((deadline, done), move |&(_, done)| {
            now.set(now_ms());
            let interval = if done {
                None
            } else {
                Interval::start(REGEN_TICK_MS, move || now.set(now_ms()))
            };
            move || drop(interval)
        });
    }
    CountdownView {
        label: countdown.label(*now),
        done,
    }
}
