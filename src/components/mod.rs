pub mod app;
pub mod contextual_tooltip;
pub mod countdown_label;
pub mod error_boundary;
pub mod onboarding_overlay;
pub mod page_view;
pub mod regen_meter;
pub mod reward_toast;
pub mod settings_modal;
pub mod tutorial_checklist;
pub mod tutorial_provider;
pub mod vitals_panel;
