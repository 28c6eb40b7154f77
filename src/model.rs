//! Core data types for the client.
//! Reward amounts here are previews only; the server credits the real thing.

use serde::{Deserialize, Serialize};

use crate::config::{NEW_PLAYER_ENERGY_MAX, NEW_PLAYER_STAMINA_MAX};
use crate::error::AppResult;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RewardKind {
    Cash,
    Diamonds,
}

impl RewardKind {
    pub fn icon(self) -> &'static str {
        match self {
            RewardKind::Cash => "$",
            RewardKind::Diamonds => "💎",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reward {
    #[serde(rename = "type")]
    pub kind: RewardKind,
    pub amount: u64,
}

impl Reward {
    pub fn label(&self) -> String {
        format!("+{} {}", self.amount, self.kind.icon())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    Dashboard,
    Jobs,
    Fight,
    Shop,
    Family,
    Referrals,
}

impl Page {
    pub const ALL: [Page; 6] = [
        Page::Dashboard,
        Page::Jobs,
        Page::Fight,
        Page::Shop,
        Page::Family,
        Page::Referrals,
    ];

    pub fn route(self) -> &'static str {
        match self {
            Page::Dashboard => "/",
            Page::Jobs => "/jobs",
            Page::Fight => "/fight",
            Page::Shop => "/shop",
            Page::Family => "/family",
            Page::Referrals => "/referrals",
        }
    }

    pub fn from_route(route: &str) -> Option<Page> {
        let trimmed = route.trim_end_matches('/');
        let route = if trimmed.is_empty() { "/" } else { trimmed };
        Page::ALL.into_iter().find(|p| p.route() == route)
    }

    pub fn title(self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Jobs => "Jobs",
            Page::Fight => "Fight",
            Page::Shop => "Black Market",
            Page::Family => "Family",
            Page::Referrals => "Associates",
        }
    }
}

/// What finishes a step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepTrigger {
    /// An explicit user action on the target page.
    Action,
    /// Landing on the target page while this is the current step.
    Visit,
}

/// One checklist item. `completed` is the only field that changes at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TutorialStep {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub target_page: Page,
    pub trigger: StepTrigger,
    pub reward: Option<Reward>,
    pub completed: bool,
}

const fn step(
    id: &'static str,
    title: &'static str,
    description: &'static str,
    target_page: Page,
    reward: Option<Reward>,
) -> TutorialStep {
    TutorialStep {
        id,
        title,
        description,
        target_page,
        trigger: StepTrigger::Action,
        reward,
        completed: false,
    }
}

const fn visit(
    id: &'static str,
    title: &'static str,
    description: &'static str,
    target_page: Page,
) -> TutorialStep {
    TutorialStep {
        trigger: StepTrigger::Visit,
        ..step(id, title, description, target_page, None)
    }
}

/// Fixed onboarding order. IDs are persisted; never reuse a removed one.
pub const TUTORIAL_STEPS: &[TutorialStep] = &[
    step(
        "claim_daily",
        "Collect your cut",
        "Claim the daily bonus from the dashboard.",
        Page::Dashboard,
        Some(Reward { kind: RewardKind::Cash, amount: 500 }),
    ),
    step(
        "first_job",
        "Run your first job",
        "Spend energy on a job to earn cash and experience.",
        Page::Jobs,
        Some(Reward { kind: RewardKind::Cash, amount: 1_000 }),
    ),
    visit(
        "visit_shop",
        "Find the black market",
        "Open the black market to see what is for sale.",
        Page::Shop,
    ),
    step(
        "first_fight",
        "Win a street fight",
        "Use stamina to take on another player.",
        Page::Fight,
        Some(Reward { kind: RewardKind::Cash, amount: 2_500 }),
    ),
    step(
        "join_family",
        "Join a family",
        "Nobody survives alone. Find a family to back you.",
        Page::Family,
        Some(Reward { kind: RewardKind::Diamonds, amount: 10 }),
    ),
    step(
        "invite_friend",
        "Recruit an associate",
        "Share your invite link with a friend.",
        Page::Referrals,
        Some(Reward { kind: RewardKind::Diamonds, amount: 25 }),
    ),
];

/// The numeric slice of a server resource the client renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceSnapshot {
    pub current: u32,
    pub max: u32,
    #[serde(default)]
    pub regen_interval_ms: Option<u64>,
    /// Server deadline for the next +1, epoch milliseconds.
    #[serde(default)]
    pub next_regen_at: Option<u64>,
}

impl ResourceSnapshot {
    pub fn full(max: u32) -> Self {
        Self {
            current: max,
            max,
            regen_interval_ms: None,
            next_regen_at: None,
        }
    }

    pub fn interval_or(&self, fallback_ms: u64) -> u64 {
        match self.regen_interval_ms {
            Some(ms) if ms > 0 => ms,
            _ => fallback_ms,
        }
    }

    fn clamped(mut self) -> Self {
        self.current = self.current.min(self.max);
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerVitals {
    pub energy: ResourceSnapshot,
    pub stamina: ResourceSnapshot,
}

impl Default for PlayerVitals {
    fn default() -> Self {
        Self {
            energy: ResourceSnapshot::full(NEW_PLAYER_ENERGY_MAX),
            stamina: ResourceSnapshot::full(NEW_PLAYER_STAMINA_MAX),
        }
    }
}

impl PlayerVitals {
    /// Parses the vitals out of an RPC result; other fields in the payload are ignored.
    pub fn from_rpc_payload(raw: &str) -> AppResult<Self> {
        let v: PlayerVitals = serde_json::from_str(raw)?;
        Ok(Self {
            energy: v.energy.clamped(),
            stamina: v.stamina.clamped(),
        })
    }
}
