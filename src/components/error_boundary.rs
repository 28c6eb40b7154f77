use crate::state::{BoundaryState, BoundaryView, boundary_view};
use crate::util::cwarn;
use yew::prelude::*;

/// Descendants report failures here instead of panicking.
#[derive(Clone, PartialEq)]
pub struct ErrorReporter(pub Callback<String>);

impl ErrorReporter {
    pub fn report(&self, msg: impl Into<String>) {
        self.0.emit(msg.into());
    }
}

#[derive(Properties, PartialEq)]
pub struct ErrorBoundaryProps {
    #[prop_or_default]
    pub children: Html,
}

#[function_component]
pub fn ErrorBoundary(props: &ErrorBoundaryProps) -> Html {
    let state = use_state(BoundaryState::default);

    let reporter = {
        let state = state.clone();
        ErrorReporter(Callback::from(move |msg: String| {
            cwarn(&format!("error boundary caught: {msg}"));
            let mut next = (*state).clone();
            if next.capture(msg) {
                state.set(next);
            }
        }))
    };
    let retry = {
        let state = state.clone();
        Callback::from(move |_| {
            let mut next = (*state).clone();
            next.retry();
            state.set(next);
        })
    };

    match boundary_view(&state) {
        BoundaryView::Children => html! {
            <ContextProvider<ErrorReporter> context={reporter}>{ props.children.clone() }</ContextProvider<ErrorReporter>>
        },
        BoundaryView::Fallback { message } => html! {
            <div style="margin:40px auto; max-width:360px; background:#161b22; border:1px solid #f85149; border-radius:12px; padding:20px 24px; text-align:center;">
                <h3 style="margin:0 0 8px 0; color:#f85149;">{"Something went wrong"}</h3>
                <p style="margin:0 0 14px 0; font-size:13px; opacity:0.8;">{ message }</p>
                <button onclick={retry}>{"Retry"}</button>
            </div>
        },
    }
}
