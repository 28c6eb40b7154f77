// Error boundary state. What to render is a pure function of this state.

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BoundaryState {
    pub error: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BoundaryView {
    Children,
    Fallback { message: String },
}

impl BoundaryState {
    /// Keeps the first error until retried; later reports from the same broken subtree add nothing.
    pub fn capture(&mut self, message: impl Into<String>) -> bool {
        if self.error.is_some() {
            return false;
        }
        self.error = Some(message.into());
        true
    }

    pub fn retry(&mut self) {
        self.error = None;
    }
}

pub fn boundary_view(state: &BoundaryState) -> BoundaryView {
    match &state.error {
        None => BoundaryView::Children,
        Some(msg) if msg.trim().is_empty() => BoundaryView::Fallback {
            message: "Something went wrong.".to_string(),
        },
        Some(msg) => BoundaryView::Fallback {
            message: msg.clone(),
        },
    }
}
