// Compile-time settings. Per-device state lives in local storage under these keys.

pub const TUTORIAL_PROGRESS_KEY: &str = "syndicate_tutorial_progress";
pub const TUTORIAL_DISMISSED_KEY: &str = "syndicate_tutorial_dismissed";
pub const ONBOARDING_COMPLETE_KEY: &str = "syndicate_onboarding_complete";
pub const TOOLTIP_KEY_PREFIX: &str = "syndicate_tooltip_";

/// Polling period for regen meters and countdowns.
pub const REGEN_TICK_MS: u32 = 1_000;

pub const ENERGY_REGEN_MS: u64 = 180_000;
pub const STAMINA_REGEN_MS: u64 = 300_000;

pub const NEW_PLAYER_ENERGY_MAX: u32 = 100;
pub const NEW_PLAYER_STAMINA_MAX: u32 = 10;

pub fn tooltip_key(id: &str) -> String {
    format!("{TOOLTIP_KEY_PREFIX}{id}")
}
