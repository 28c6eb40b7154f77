use super::{
    contextual_tooltip::ContextualTooltip, error_boundary::{ErrorBoundary, ErrorReporter},
    onboarding_overlay::OnboardingOverlay, page_view::PageView, reward_toast::RewardToast,
    settings_modal::SettingsModal, tutorial_provider::{TutorialContext, TutorialProvider},
    vitals_panel::VitalsPanel,
};
use crate::events::RewardBus;
use crate::model::{Page, PlayerVitals};
use crate::state::{onboarding, tooltip};
use crate::storage::DeviceStore;
use crate::util::{clog, now_ms};
use yew::prelude::*;

/// Element the host page fills with the last vitals RPC result.
const VITALS_ELEMENT_ID: &str = "syndicate-vitals";

const TIP_ENERGY: &str = "energy_meter";
const STANDALONE_TIPS: &[&str] = &[TIP_ENERGY];

fn page_from_location() -> Page {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .and_then(|h| Page::from_route(h.trim_start_matches('#')))
        .unwrap_or(Page::Dashboard)
}

fn set_location(page: Page) {
    if let Some(win) = web_sys::window() {
        let _ = win.location().set_hash(page.route());
    }
}

/// `None` when the host page did not embed vitals.
fn read_embedded_vitals() -> Option<Result<PlayerVitals, String>> {
    let raw = web_sys::window()?
        .document()?
        .get_element_by_id(VITALS_ELEMENT_ID)?
        .text_content()?;
    if raw.trim().is_empty() {
        return None;
    }
    Some(PlayerVitals::from_rpc_payload(&raw).map_err(|e| format!("Could not read player vitals: {e}")))
}

#[function_component(App)]
pub fn app() -> Html {
    let store = use_state(DeviceStore::open);
    let bus = use_state(RewardBus::new);
    html! {
        <ContextProvider<DeviceStore> context={(*store).clone()}>
            <ContextProvider<RewardBus> context={(*bus).clone()}>
                <ErrorBoundary>
                    <Shell store={(*store).clone()} />
                </ErrorBoundary>
                <RewardToast />
            </ContextProvider<RewardBus>>
        </ContextProvider<DeviceStore>>
    }
}

#[derive(Properties, PartialEq, Clone)]
struct ShellProps {
    store: DeviceStore,
}

#[function_component]
fn Shell(props: &ShellProps) -> Html {
    let page = use_state(page_from_location);
    let vitals = use_state(PlayerVitals::default);
    let reporter = use_context::<ErrorReporter>();

    // Seed vitals from the server result embedded in the page
    {
        let vitals = vitals.clone();
        use_effect_with((), move |_| {
            match read_embedded_vitals() {
                Some(Ok(v)) => vitals.set(v),
                Some(Err(msg)) => {
                    if let Some(r) = reporter {
                        r.report(msg);
                    }
                }
                None => clog("no embedded vitals; showing defaults"),
            }
            || ()
        });
    }

    let navigate = {
        let page = page.clone();
        Callback::from(move |p: Page| {
            set_location(p);
            page.set(p);
        })
    };

    html! {
        <TutorialProvider store={props.store.clone()} page={*page} navigate={navigate.clone()}>
            <Main page={*page} vitals={*vitals} {navigate} store={props.store.clone()} />
        </TutorialProvider>
    }
}

#[derive(Properties, PartialEq, Clone)]
struct MainProps {
    page: Page,
    vitals: PlayerVitals,
    navigate: Callback<Page>,
    store: DeviceStore,
}

#[function_component]
fn Main(props: &MainProps) -> Html {
    let tutorial = use_context::<TutorialContext>();
    let show_settings = use_state(|| false);
    // Bumped by the QA reset so overlays and tooltips re-read their flags
    let reset_gen = use_state(|| 0u32);

    let open_settings = {
        let show_settings = show_settings.clone();
        Callback::from(move |_| show_settings.set(true))
    };
    let close_settings = {
        let show_settings = show_settings.clone();
        Callback::from(move |_| show_settings.set(false))
    };
    let reset_tutorial = {
        let store = props.store.clone();
        let reset_gen = reset_gen.clone();
        let show_settings = show_settings.clone();
        let reset = tutorial.as_ref().map(|t| t.reset.clone());
        Callback::from(move |_| {
            if let Some(cb) = &reset {
                cb.emit(());
            }
            onboarding::clear(&*store);
            tooltip::clear(&*store, STANDALONE_TIPS.iter().copied());
            reset_gen.set(*reset_gen + 1);
            show_settings.set(false);
        })
    };

    let nav_buttons = Page::ALL.iter().map(|&p| {
        let navigate = props.navigate.clone();
        let active = p == props.page;
        let marked = tutorial
            .as_ref()
            .is_some_and(|t| t.state.is_active() && t.state.step_for_page(p).is_some());
        let style = if active {
            "padding:6px 10px; background:#1f6feb; color:#fff; border:none; border-radius:6px;"
        } else {
            "padding:6px 10px; background:transparent; color:#c9d1d9; border:1px solid #30363d; border-radius:6px;"
        };
        html! {
            <button key={p.route()} style={style} onclick={Callback::from(move |_| navigate.emit(p))}>
                { p.title() }
                if marked { <span style="color:#58a6ff;">{" •"}</span> }
            </button>
        }
    });

    html! {
        <div key={*reset_gen} style="min-height:100vh; background:#0e1116; color:#c9d1d9; font-family:sans-serif;">
            <ContextualTooltip id={TIP_ENERGY} text="Energy and stamina refill on their own, one point at a time.">
                <VitalsPanel vitals={props.vitals} />
            </ContextualTooltip>
            <nav style="display:flex; gap:6px; flex-wrap:wrap; padding:10px 14px;">
                { for nav_buttons }
                if cfg!(debug_assertions) {
                    <button onclick={open_settings} style="margin-left:auto; padding:6px 10px;">{"⚙"}</button>
                }
            </nav>
            <PageView page={props.page} now={now_ms()} />
            <OnboardingOverlay store={props.store.clone()} />
            <SettingsModal show={*show_settings} on_close={close_settings} on_reset_tutorial={reset_tutorial} />
        </div>
    }
}
