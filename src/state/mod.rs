pub mod boundary;
pub mod countdown;
pub mod onboarding;
pub mod regen;
pub mod tooltip;
pub mod tutorial;

pub use boundary::{BoundaryState, BoundaryView, boundary_view};
pub use countdown::Countdown;
pub use onboarding::{OnboardingAction, OnboardingState};
pub use regen::{RegenAction, RegenResource, RegenState};
pub use tutorial::{TutorialAction, TutorialPhase, TutorialState};
