// First-run intro slides. Shown once per device; finishing or skipping sets the flag.
use std::rc::Rc;
use yew::Reducible;

use crate::config::ONBOARDING_COMPLETE_KEY;
use crate::storage::{KeyValueStore, read_flag, write_flag};

pub struct Slide {
    pub title: &'static str,
    pub body: &'static str,
}

pub const SLIDES: &[Slide] = &[
    Slide {
        title: "Welcome to The Syndicate",
        body: "Start at the bottom of the city's underworld and climb your way to the top.",
    },
    Slide {
        title: "Energy & Stamina",
        body: "Jobs burn energy, fights burn stamina. Both refill over time, one point at a time.",
    },
    Slide {
        title: "Build your crew",
        body: "Join a family and recruit associates to earn cash and diamonds.",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OnboardingState {
    pub slide: usize,
    pub total: usize,
    pub finished: bool,
}

impl OnboardingState {
    pub fn new(total: usize) -> Self {
        Self {
            slide: 0,
            total,
            finished: total == 0,
        }
    }

    pub fn load(store: &dyn KeyValueStore) -> Self {
        let mut s = Self::new(SLIDES.len());
        if is_complete(store) {
            s.finished = true;
        }
        s
    }

    pub fn is_last(&self) -> bool {
        self.slide + 1 >= self.total
    }
}

#[derive(Clone, Copy, Debug)]
pub enum OnboardingAction {
    Next,
    Back,
    Skip,
}

impl Reducible for OnboardingState {
    type Action = OnboardingAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        if self.finished {
            return self;
        }
        let mut new = *self;
        match action {
            OnboardingAction::Next => {
                if new.is_last() {
                    new.finished = true;
                } else {
                    new.slide += 1;
                }
            }
            OnboardingAction::Back => new.slide = new.slide.saturating_sub(1),
            OnboardingAction::Skip => new.finished = true,
        }
        Rc::new(new)
    }
}

pub fn is_complete(store: &dyn KeyValueStore) -> bool {
    read_flag(store, ONBOARDING_COMPLETE_KEY)
}

pub fn mark_complete(store: &dyn KeyValueStore) {
    write_flag(store, ONBOARDING_COMPLETE_KEY, true);
}

pub fn clear(store: &dyn KeyValueStore) {
    write_flag(store, ONBOARDING_COMPLETE_KEY, false);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn next_walks_slides_then_finishes() {
        let mut s = Rc::new(OnboardingState::new(3));
        s = s.reduce(OnboardingAction::Next);
        s = s.reduce(OnboardingAction::Next);
        assert_eq!(s.slide, 2);
        assert!(s.is_last());
        assert!(!s.finished);
        s = s.reduce(OnboardingAction::Next);
        assert!(s.finished);
        assert_eq!(s.slide, 2);
    }

    #[test]
    fn back_stops_at_first_slide() {
        let s = Rc::new(OnboardingState::new(3)).reduce(OnboardingAction::Back);
        assert_eq!(s.slide, 0);
    }

    #[test]
    fn skip_finishes_from_anywhere() {
        let s = Rc::new(OnboardingState::new(3)).reduce(OnboardingAction::Skip);
        assert!(s.finished);
    }

    #[test]
    fn completion_flag_persists() {
        let store = MemoryStore::new();
        assert!(!OnboardingState::load(&store).finished);
        mark_complete(&store);
        assert!(OnboardingState::load(&store).finished);
        clear(&store);
        assert!(!is_complete(&store));
    }
}
