// Local regeneration simulation between server syncs. Display only: the server
// applies the real increments and every sync overwrites what we computed here.
use std::rc::Rc;
use yew::Reducible;

use crate::util::format_countdown;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegenResource {
    pub current: u32,
    pub max: u32,
    pub regen_interval_ms: u64,
    /// Epoch milliseconds at which the next +1 is due.
    pub next_regen_at: u64,
}

impl RegenResource {
    pub fn seeded(initial: u32, max: u32, regen_interval_ms: u64, now: u64) -> Self {
        Self {
            current: initial.min(max),
            max,
            regen_interval_ms,
            next_regen_at: now.saturating_add(regen_interval_ms),
        }
    }

    /// Seed with a server-supplied deadline. A deadline already in the past
    /// makes the very next tick apply the increment.
    pub fn with_deadline(mut self, deadline: u64) -> Self {
        self.next_regen_at = deadline;
        self
    }

    pub fn is_full(&self) -> bool {
        self.current >= self.max
    }

    /// Applies at most one unit of regen. Returns true if `current` changed.
    pub fn tick(&mut self, now: u64) -> bool {
        if self.is_full() || now < self.next_regen_at {
            return false;
        }
        self.current = (self.current + 1).min(self.max);
        self.next_regen_at = now.saturating_add(self.regen_interval_ms);
        true
    }

    pub fn remaining_ms(&self, now: u64) -> u64 {
        if self.is_full() {
            0
        } else {
            self.next_regen_at.saturating_sub(now)
        }
    }

    pub fn countdown_label(&self, now: u64) -> String {
        if self.is_full() {
            "Full".to_string()
        } else {
            format_countdown(self.remaining_ms(now))
        }
    }

    pub fn progress(&self) -> f64 {
        if self.max == 0 {
            return 1.0;
        }
        (self.current as f64 / self.max as f64).clamp(0.0, 1.0)
    }
}

#[derive(Clone, Debug)]
pub enum RegenAction {
    /// Authoritative value from the server; always wins over local state.
    Seed {
        current: u32,
        max: u32,
        regen_interval_ms: u64,
        next_regen_at: Option<u64>,
        now: u64,
    },
    Tick { now: u64 },
}

/// Reducer state for `use_regen`. `now` is carried so the label re-renders every tick
/// even when `current` does not move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegenState {
    pub resource: RegenResource,
    pub now: u64,
}

impl RegenState {
    pub fn label(&self) -> String {
        self.resource.countdown_label(self.now)
    }

    /// Whether a tick interval should be running. A full resource has nothing to count.
    pub fn needs_ticker(&self) -> bool {
        !self.resource.is_full()
    }
}

impl Reducible for RegenState {
    type Action = RegenAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            RegenAction::Seed {
                current,
                max,
                regen_interval_ms,
                next_regen_at,
                now,
            } => {
                let mut resource = RegenResource::seeded(current, max, regen_interval_ms, now);
                if let Some(deadline) = next_regen_at {
                    resource = resource.with_deadline(deadline);
                }
                Rc::new(RegenState { resource, now })
            }
            RegenAction::Tick { now } => {
                if self.resource.is_full() {
                    return self;
                }
                let mut new = *self;
                new.resource.tick(now);
                new.now = now;
                Rc::new(new)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const T0: u64 = 1_700_000_000_000;

    #[test]
    fn full_resource_reads_full_and_never_ticks() {
        let mut r = RegenResource::seeded(10, 10, 60_000, T0);
        assert!(r.is_full());
        assert_eq!(r.countdown_label(T0), "Full");
        assert!(!r.tick(T0 + 10 * 60_000));
        assert_eq!(r.current, 10);
    }

    #[test]
    fn sixty_one_second_ticks_fill_last_unit() {
        let mut r = RegenResource::seeded(9, 10, 60_000, T0);
        assert_eq!(r.countdown_label(T0), "1m 0s");
        for i in 1..=59 {
            r.tick(T0 + i * 1000);
            assert_eq!(r.current, 9);
        }
        assert_eq!(r.countdown_label(T0 + 59_000), "0m 1s");
        r.tick(T0 + 60_000);
        assert_eq!(r.current, 10);
        assert_eq!(r.countdown_label(T0 + 60_000), "Full");
    }

    #[test]
    fn one_unit_per_tick_even_after_long_gap() {
        let mut r = RegenResource::seeded(0, 10, 1_000, T0);
        assert!(r.tick(T0 + 3_600_000));
        assert_eq!(r.current, 1);
        assert_eq!(r.next_regen_at, T0 + 3_601_000);
    }

    #[test]
    fn elapsed_deadline_regens_on_first_tick() {
        let mut r = RegenResource::seeded(4, 10, 60_000, T0).with_deadline(T0 - 5_000);
        assert_eq!(r.remaining_ms(T0), 0);
        assert!(r.tick(T0));
        assert_eq!(r.current, 5);
        assert_eq!(r.next_regen_at, T0 + 60_000);
    }

    #[test]
    fn seed_clamps_over_max_initial() {
        let r = RegenResource::seeded(15, 10, 60_000, T0);
        assert_eq!(r.current, 10);
    }

    #[test]
    fn seed_action_overwrites_local_progress() {
        let state = Rc::new(RegenState {
            resource: RegenResource::seeded(3, 10, 1_000, T0),
            now: T0,
        });
        let state = state.reduce(RegenAction::Tick { now: T0 + 1_000 });
        assert_eq!(state.resource.current, 4);
        let state = state.reduce(RegenAction::Seed {
            current: 2,
            max: 10,
            regen_interval_ms: 1_000,
            next_regen_at: None,
            now: T0 + 1_500,
        });
        assert_eq!(state.resource.current, 2);
        assert_eq!(state.resource.next_regen_at, T0 + 2_500);
    }

    #[test]
    fn tick_action_on_full_state_returns_same_rc() {
        let state = Rc::new(RegenState {
            resource: RegenResource::seeded(5, 5, 1_000, T0),
            now: T0,
        });
        let next = state.clone().reduce(RegenAction::Tick { now: T0 + 5_000 });
        assert!(Rc::ptr_eq(&state, &next));
    }

    #[test]
    fn tick_action_advances_label_clock() {
        let state = Rc::new(RegenState {
            resource: RegenResource::seeded(1, 5, 60_000, T0),
            now: T0,
        });
        let state = state.reduce(RegenAction::Tick { now: T0 + 30_000 });
        assert_eq!(state.label(), "0m 30s");
    }

    #[test]
    fn ticker_runs_only_until_full() {
        let full = RegenState {
            resource: RegenResource::seeded(10, 10, 1_000, T0),
            now: T0,
        };
        assert!(!full.needs_ticker());

        let mut state = Rc::new(RegenState {
            resource: RegenResource::seeded(8, 10, 1_000, T0),
            now: T0,
        });
        assert!(state.needs_ticker());
        state = state.reduce(RegenAction::Tick { now: T0 + 1_000 });
        assert!(state.needs_ticker());
        state = state.reduce(RegenAction::Tick { now: T0 + 2_000 });
        assert_eq!(state.resource.current, 10);
        assert!(!state.needs_ticker());

        // A sync below max starts it again
        state = state.reduce(RegenAction::Seed {
            current: 4,
            max: 10,
            regen_interval_ms: 1_000,
            next_regen_at: None,
            now: T0 + 3_000,
        });
        assert!(state.needs_ticker());
    }

    #[test]
    fn future_server_deadline_is_kept_until_reached() {
        let mut r = RegenResource::seeded(2, 10, 90_000, T0).with_deadline(T0 + 10_000);
        assert_eq!(r.countdown_label(T0), "0m 10s");
        assert!(!r.tick(T0 + 9_999));
        assert!(r.tick(T0 + 10_000));
        assert_eq!(r.next_regen_at, T0 + 100_000);
    }

    proptest! {
        #[test]
        fn ticks_never_exceed_max(
            max in 0u32..50,
            start in 0u32..60,
            interval in 1u64..120_000,
            steps in proptest::collection::vec(0u64..200_000, 0..200),
        ) {
            let mut r = RegenResource::seeded(start, max, interval, T0);
            let mut now = T0;
            for dt in steps {
                now += dt;
                r.tick(now);
                prop_assert!(r.current <= r.max);
            }
        }
    }
}
