use crate::events::{RewardBus, RewardEvent};
use crate::model::Page;
use crate::state::{TutorialAction, TutorialState};
use crate::storage::DeviceStore;
use yew::prelude::*;

/// What tutorial-aware components read from context.
#[derive(Clone, PartialEq)]
pub struct TutorialContext {
    pub state: UseReducerHandle<TutorialState>,
    pub complete_step: Callback<String>,
    pub dismiss: Callback<()>,
    pub reset: Callback<()>,
    /// Navigate to the page the current step points at.
    pub go_to_current: Callback<()>,
}

impl TutorialContext {
    pub fn is_step_active(&self, id: &str) -> bool {
        self.state.is_step_active(id)
    }
}

#[derive(Properties, PartialEq)]
pub struct TutorialProviderProps {
    pub store: DeviceStore,
    /// The page currently shown; landing on it may finish a visit step.
    pub page: Page,
    pub navigate: Callback<Page>,
    #[prop_or_default]
    pub children: Html,
}

#[function_component]
pub fn TutorialProvider(props: &TutorialProviderProps) -> Html {
    let state = {
        let store = props.store.clone();
        use_reducer(move || TutorialState::load(&*store))
    };
    let bus = use_context::<RewardBus>();

    // Completed IDs as of the last committed state; None until the first run.
    let seen = use_mut_ref(|| None::<Vec<&'static str>>);

    // Persist on every change, and preview rewards for steps that just finished
    {
        let store = props.store.clone();
        use_effect_with((*state).clone(), move |s| {
            s.persist(&*store);
            let mut seen = seen.borrow_mut();
            if let (Some(before), Some(bus)) = (seen.as_deref(), bus.as_ref()) {
                for reward in s.rewards_since(before) {
                    bus.emit(RewardEvent::from(reward));
                }
            }
            *seen = Some(s.completed_ids());
            || ()
        });
    }

    {
        let state = state.clone();
        use_effect_with(props.page, move |&page| {
            state.dispatch(TutorialAction::Visit(page));
            || ()
        });
    }

    let complete_step = {
        let state = state.clone();
        Callback::from(move |id: String| state.dispatch(TutorialAction::Complete(id)))
    };
    let dismiss = {
        let state = state.clone();
        Callback::from(move |_| state.dispatch(TutorialAction::Dismiss))
    };
    let reset = {
        let state = state.clone();
        Callback::from(move |_| state.dispatch(TutorialAction::Reset))
    };
    let go_to_current = {
        let state = state.clone();
        let navigate = props.navigate.clone();
        Callback::from(move |_| {
            if let Some(step) = state.current_step() {
                navigate.emit(step.target_page);
            }
        })
    };

    let ctx = TutorialContext {
        state,
        complete_step,
        dismiss,
        reset,
        go_to_current,
    };
    html! { <ContextProvider<TutorialContext> context={ctx}>{ props.children.clone() }</ContextProvider<TutorialContext>> }
}
