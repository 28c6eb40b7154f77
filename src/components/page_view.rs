use super::contextual_tooltip::ContextualTooltip;
use super::countdown_label::CountdownLabel;
use super::tutorial_checklist::TutorialChecklist;
use super::tutorial_provider::TutorialContext;
use crate::model::Page;
use yew::prelude::*;

const DAY_MS: u64 = 86_400_000;

/// The tutorial action on each page with an action-triggered step: (page, step id, button label, blurb).
const PAGE_ACTIONS: &[(Page, &str, &str, &str)] = &[
    (Page::Dashboard, "claim_daily", "Claim daily bonus", "Your cut is waiting."),
    (Page::Jobs, "first_job", "Run job", "Small jobs, small heat. Costs energy."),
    (Page::Fight, "first_fight", "Start fight", "Pick a target your own size. Costs stamina."),
    (Page::Family, "join_family", "Join family", "Families share protection and profits."),
    (Page::Referrals, "invite_friend", "Copy invite link", "Every associate you bring in pays off."),
];

pub fn action_for(page: Page) -> Option<(&'static str, &'static str, &'static str)> {
    PAGE_ACTIONS
        .iter()
        .find(|(p, ..)| *p == page)
        .map(|&(_, step, label, blurb)| (step, label, blurb))
}

/// Next UTC midnight, when daily bonuses reset.
pub fn next_daily_reset(now: u64) -> u64 {
    (now / DAY_MS + 1) * DAY_MS
}

#[derive(Properties, PartialEq, Clone)]
pub struct PageViewProps {
    pub page: Page,
    pub now: u64,
}

#[function_component]
pub fn PageView(props: &PageViewProps) -> Html {
    let tutorial = use_context::<TutorialContext>();
    let hint = tutorial
        .as_ref()
        .filter(|t| t.state.is_active())
        .and_then(|t| t.state.step_for_page(props.page))
        .map(|s| s.description);

    let action = action_for(props.page).map(|(step_id, label, blurb)| {
        let onclick = {
            let complete = tutorial.as_ref().map(|t| t.complete_step.clone());
            Callback::from(move |_| {
                if let Some(cb) = &complete {
                    cb.emit(step_id.to_string());
                }
            })
        };
        html! {
            <div style="display:flex; flex-direction:column; gap:8px;">
                <p style="margin:0; opacity:0.8;">{ blurb }</p>
                <ContextualTooltip id={format!("step_{step_id}")} step_id={AttrValue::from(step_id)}>
                    <button {onclick} style="padding:8px 16px;">{ label }</button>
                </ContextualTooltip>
            </div>
        }
    });

    html! {
        <div style="padding:16px; display:flex; flex-direction:column; gap:14px;">
            <h2 style="margin:0; font-size:20px;">{ props.page.title() }</h2>
            if let Some(text) = hint {
                <div style="font-size:12px; color:#58a6ff;">{ text }</div>
            }
            if props.page == Page::Dashboard {
                <TutorialChecklist />
                <CountdownLabel label="Daily bonus resets in" deadline={next_daily_reset(props.now)} />
            }
            { for action }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{StepTrigger, TUTORIAL_STEPS};

    #[test]
    fn every_action_step_has_a_button_on_its_page() {
        for step in TUTORIAL_STEPS {
            match step.trigger {
                StepTrigger::Action => {
                    let (id, ..) = action_for(step.target_page).unwrap();
                    assert_eq!(id, step.id);
                }
                StepTrigger::Visit => assert!(action_for(step.target_page).is_none()),
            }
        }
    }

    #[test]
    fn daily_reset_is_next_midnight() {
        assert_eq!(next_daily_reset(0), DAY_MS);
        assert_eq!(next_daily_reset(DAY_MS - 1), DAY_MS);
        assert_eq!(next_daily_reset(DAY_MS), 2 * DAY_MS);
    }
}
