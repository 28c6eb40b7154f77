//! Tutorial progression: a fixed, ordered checklist of onboarding steps.
//!
//! The "current" step is always the first incomplete one. Steps may be
//! completed in any order, so finishing a later step early just means it is
//! skipped over when its turn comes. Progress is purely local; any reward a
//! step previews is credited by whatever server call triggered the step.

use std::collections::HashSet;
use std::rc::Rc;
use yew::Reducible;

use crate::config::{TUTORIAL_DISMISSED_KEY, TUTORIAL_PROGRESS_KEY};
use crate::model::{Page, Reward, StepTrigger, TUTORIAL_STEPS, TutorialStep};
use crate::storage::{KeyValueStore, read_flag, read_json, write_flag, write_json};
use crate::util::{clog, cwarn};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TutorialPhase {
    NotStarted,
    /// Index of the first incomplete step.
    InProgress(usize),
    AllComplete,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TutorialState {
    pub steps: Vec<TutorialStep>,
    pub dismissed: bool,
}

impl Default for TutorialState {
    fn default() -> Self {
        Self::from_defs(TUTORIAL_STEPS)
    }
}

impl TutorialState {
    pub fn from_defs(defs: &[TutorialStep]) -> Self {
        Self {
            steps: defs
                .iter()
                .map(|s| TutorialStep { completed: false, ..*s })
                .collect(),
            dismissed: false,
        }
    }

    /// Merge persisted progress into the built-in definitions. Unknown IDs are
    /// dropped, missing ones stay incomplete, unreadable data means no progress.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        Self::load_with(store, TUTORIAL_STEPS)
    }

    pub fn load_with(store: &dyn KeyValueStore, defs: &[TutorialStep]) -> Self {
        let mut state = Self::from_defs(defs);
        let done: HashSet<String> = match read_json::<Vec<String>>(store, TUTORIAL_PROGRESS_KEY) {
            Ok(ids) => ids.unwrap_or_default().into_iter().collect(),
            Err(e) => {
                cwarn(&format!("ignoring saved tutorial progress: {e}"));
                HashSet::new()
            }
        };
        for step in &mut state.steps {
            step.completed = done.contains(step.id);
        }
        state.dismissed = read_flag(store, TUTORIAL_DISMISSED_KEY);
        state
    }

    pub fn persist(&self, store: &dyn KeyValueStore) {
        if let Err(e) = write_json(store, TUTORIAL_PROGRESS_KEY, &self.completed_ids()) {
            cwarn(&format!("saving tutorial progress: {e}"));
        }
        write_flag(store, TUTORIAL_DISMISSED_KEY, self.dismissed);
    }

    pub fn completed_ids(&self) -> Vec<&'static str> {
        self.steps.iter().filter(|s| s.completed).map(|s| s.id).collect()
    }

    pub fn completed_count(&self) -> usize {
        self.steps.iter().filter(|s| s.completed).count()
    }

    pub fn total_steps(&self) -> usize {
        self.steps.len()
    }

    pub fn current_index(&self) -> Option<usize> {
        self.steps.iter().position(|s| !s.completed)
    }

    pub fn current_step(&self) -> Option<&TutorialStep> {
        self.current_index().map(|i| &self.steps[i])
    }

    pub fn step(&self, id: &str) -> Option<&TutorialStep> {
        self.steps.iter().find(|s| s.id == id)
    }

    pub fn is_active(&self) -> bool {
        !self.dismissed && self.current_step().is_some()
    }

    pub fn is_step_active(&self, id: &str) -> bool {
        self.is_active() && self.current_step().is_some_and(|s| s.id == id)
    }

    /// The current step if it belongs on `page`.
    pub fn step_for_page(&self, page: Page) -> Option<&TutorialStep> {
        self.current_step()
            .filter(|s| s.target_page == page && !s.completed)
    }

    /// Rewards for steps that are complete here but were not in `before`.
    pub fn rewards_since(&self, before: &[&str]) -> Vec<Reward> {
        self.steps
            .iter()
            .filter(|s| s.completed && !before.contains(&s.id))
            .filter_map(|s| s.reward)
            .collect()
    }

    pub fn phase(&self) -> TutorialPhase {
        match self.current_index() {
            None => TutorialPhase::AllComplete,
            Some(_) if self.completed_count() == 0 => TutorialPhase::NotStarted,
            Some(i) => TutorialPhase::InProgress(i),
        }
    }
}

#[derive(Clone, Debug)]
pub enum TutorialAction {
    Complete(String),
    /// The user landed on a page; finishes the current step if it is a visit to it.
    Visit(Page),
    Dismiss,
    Reset,
}

impl Reducible for TutorialState {
    type Action = TutorialAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            TutorialAction::Complete(id) => {
                match self.step(&id) {
                    Some(s) if !s.completed => {}
                    Some(_) => return self,
                    None => {
                        clog(&format!("complete for unknown tutorial step {id}"));
                        return self;
                    }
                }
                let mut new = (*self).clone();
                for step in &mut new.steps {
                    if step.id == id {
                        step.completed = true;
                    }
                }
                clog(&format!(
                    "tutorial step {id} done ({}/{})",
                    new.completed_count(),
                    new.total_steps()
                ));
                Rc::new(new)
            }
            TutorialAction::Visit(page) => {
                let id = self
                    .current_step()
                    .filter(|s| s.trigger == StepTrigger::Visit && s.target_page == page)
                    .map(|s| s.id.to_string());
                match id {
                    Some(id) => self.reduce(TutorialAction::Complete(id)),
                    None => self,
                }
            }
            TutorialAction::Dismiss => {
                if self.dismissed {
                    return self;
                }
                let mut new = (*self).clone();
                new.dismissed = true;
                Rc::new(new)
            }
            TutorialAction::Reset => Rc::new(TutorialState::from_defs(&self.steps)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RewardKind;
    use crate::storage::MemoryStore;

    const ABC: &[TutorialStep] = &[
        TutorialStep {
            id: "a",
            title: "A",
            description: "",
            target_page: Page::Dashboard,
            trigger: StepTrigger::Action,
            reward: None,
            completed: false,
        },
        TutorialStep {
            id: "b",
            title: "B",
            description: "",
            target_page: Page::Jobs,
            trigger: StepTrigger::Visit,
            reward: Some(Reward { kind: RewardKind::Cash, amount: 100 }),
            completed: false,
        },
        TutorialStep {
            id: "c",
            title: "C",
            description: "",
            target_page: Page::Fight,
            trigger: StepTrigger::Action,
            reward: None,
            completed: false,
        },
    ];

    fn abc() -> Rc<TutorialState> {
        Rc::new(TutorialState::from_defs(ABC))
    }

    fn complete(state: Rc<TutorialState>, id: &str) -> Rc<TutorialState> {
        state.reduce(TutorialAction::Complete(id.to_string()))
    }

    #[test]
    fn out_of_order_completion_keeps_first_incomplete_current() {
        let state = complete(abc(), "b");
        assert_eq!(state.current_step().map(|s| s.id), Some("a"));
        assert_eq!(state.completed_count(), 1);
        let state = complete(state, "a");
        assert_eq!(state.current_step().map(|s| s.id), Some("c"));
        assert_eq!(state.phase(), TutorialPhase::InProgress(2));
    }

    #[test]
    fn complete_is_idempotent() {
        let once = complete(abc(), "a");
        let twice = complete(once.clone(), "a");
        assert_eq!(twice.completed_count(), 1);
        assert!(Rc::ptr_eq(&once, &twice));
    }

    #[test]
    fn unknown_step_is_ignored() {
        let state = complete(abc(), "nope");
        assert_eq!(state.completed_count(), 0);
    }

    #[test]
    fn dismiss_hides_until_reset() {
        let state = complete(abc(), "a").reduce(TutorialAction::Dismiss);
        assert!(!state.is_active());
        assert!(!state.is_step_active("b"));
        assert_eq!(state.completed_count(), 1);
        let state = state.reduce(TutorialAction::Reset);
        assert!(state.is_active());
        assert_eq!(state.completed_count(), 0);
        assert!(!state.dismissed);
    }

    #[test]
    fn phases_follow_progress() {
        let state = abc();
        assert_eq!(state.phase(), TutorialPhase::NotStarted);
        let state = complete(state, "a");
        assert_eq!(state.phase(), TutorialPhase::InProgress(1));
        let state = complete(complete(state, "b"), "c");
        assert_eq!(state.phase(), TutorialPhase::AllComplete);
        assert!(state.current_step().is_none());
        assert!(!state.is_active());
    }

    #[test]
    fn step_active_only_for_current() {
        let state = abc();
        assert!(state.is_step_active("a"));
        assert!(!state.is_step_active("b"));
    }

    #[test]
    fn step_for_page_matches_current_target_only() {
        let state = abc();
        assert_eq!(state.step_for_page(Page::Dashboard).map(|s| s.id), Some("a"));
        assert!(state.step_for_page(Page::Jobs).is_none());
        let state = complete(state, "a");
        assert_eq!(state.step_for_page(Page::Jobs).map(|s| s.id), Some("b"));
    }

    #[test]
    fn persist_then_load_restores_progress() {
        let store = MemoryStore::new();
        let state = complete(complete(abc(), "c"), "a").reduce(TutorialAction::Dismiss);
        state.persist(&store);
        assert_eq!(
            store.get(TUTORIAL_PROGRESS_KEY).unwrap().as_deref(),
            Some(r#"["a","c"]"#)
        );
        let loaded = TutorialState::load_with(&store, ABC);
        assert_eq!(loaded, *state);
    }

    #[test]
    fn stale_ids_in_storage_are_ignored() {
        let store = MemoryStore::new();
        store
            .set(TUTORIAL_PROGRESS_KEY, r#"["removed_step","b"]"#)
            .unwrap();
        let loaded = TutorialState::load_with(&store, ABC);
        assert_eq!(loaded.completed_ids(), vec!["b"]);
    }

    #[test]
    fn malformed_storage_falls_back_to_defaults() {
        let store = MemoryStore::new();
        store.set(TUTORIAL_PROGRESS_KEY, "{\"a\": true").unwrap();
        store.set(TUTORIAL_DISMISSED_KEY, "yes").unwrap();
        let loaded = TutorialState::load_with(&store, ABC);
        assert_eq!(loaded, TutorialState::from_defs(ABC));
    }

    #[test]
    fn reset_persists_empty_progress_and_clears_dismissed() {
        let store = MemoryStore::new();
        let state = complete(abc(), "a").reduce(TutorialAction::Dismiss);
        state.persist(&store);
        let state = state.reduce(TutorialAction::Reset);
        state.persist(&store);
        assert_eq!(store.get(TUTORIAL_PROGRESS_KEY).unwrap().as_deref(), Some("[]"));
        assert_eq!(store.get(TUTORIAL_DISMISSED_KEY).unwrap(), None);
    }

    #[test]
    fn visiting_target_page_completes_visit_step() {
        let state = complete(abc(), "a");
        let state = state.reduce(TutorialAction::Visit(Page::Jobs));
        assert!(state.step("b").unwrap().completed);
        assert_eq!(state.current_step().map(|s| s.id), Some("c"));
    }

    #[test]
    fn visit_ignores_steps_that_are_not_current() {
        // "b" is a visit step, but "a" is still ahead of it
        let before = abc();
        let after = before.clone().reduce(TutorialAction::Visit(Page::Jobs));
        assert!(Rc::ptr_eq(&before, &after));
    }

    #[test]
    fn visit_does_not_finish_action_steps() {
        let before = abc();
        let after = before.clone().reduce(TutorialAction::Visit(Page::Dashboard));
        assert!(Rc::ptr_eq(&before, &after));
        assert_eq!(after.completed_count(), 0);
    }

    #[test]
    fn double_complete_yields_one_reward() {
        let start = abc();
        let seen = start.completed_ids();
        let state = complete(complete(start, "b"), "b");
        let rewards = state.rewards_since(&seen);
        assert_eq!(rewards, vec![Reward { kind: RewardKind::Cash, amount: 100 }]);
        // Nothing new once the provider has recorded the completion
        assert!(state.rewards_since(&state.completed_ids()).is_empty());
    }

    #[test]
    fn rewards_since_skips_steps_without_a_reward() {
        let state = complete(complete(abc(), "a"), "c");
        assert!(state.rewards_since(&[]).is_empty());
    }

    #[test]
    fn built_in_list_loads_from_empty_store() {
        let loaded = TutorialState::load(&MemoryStore::new());
        assert_eq!(loaded.total_steps(), TUTORIAL_STEPS.len());
        assert_eq!(loaded.current_step().map(|s| s.id), Some(TUTORIAL_STEPS[0].id));
    }
}
