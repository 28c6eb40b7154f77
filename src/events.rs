//! Reward event bus.
//!
//! Components that grant something (a finished tutorial step, a claimed
//! bonus) emit a [`RewardEvent`]; whatever is animating rewards subscribes.
//! The bus is an ordinary value handed down through context, so every app
//! instance (and every test) gets its own listener set.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use yew::Callback;

use crate::model::{Reward, RewardKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RewardEvent {
    pub kind: RewardKind,
    pub amount: u64,
}

impl From<Reward> for RewardEvent {
    fn from(r: Reward) -> Self {
        Self {
            kind: r.kind,
            amount: r.amount,
        }
    }
}

type Listeners = RefCell<Vec<(u64, Callback<RewardEvent>)>>;

#[derive(Clone, Default)]
pub struct RewardBus {
    listeners: Rc<Listeners>,
    next_id: Rc<Cell<u64>>,
}

impl PartialEq for RewardBus {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.listeners, &other.listeners)
    }
}

impl RewardBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// The listener stays registered until the returned handle is dropped.
    #[must_use]
    pub fn subscribe(&self, listener: Callback<RewardEvent>) -> Subscription {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.listeners.borrow_mut().push((id, listener));
        Subscription {
            id,
            listeners: Rc::downgrade(&self.listeners),
        }
    }

    pub fn emit(&self, event: RewardEvent) {
        // Snapshot first so a listener may subscribe or unsubscribe while we dispatch.
        let snapshot: Vec<Callback<RewardEvent>> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, cb)| cb.clone())
            .collect();
        for cb in snapshot {
            cb.emit(event);
        }
    }
}

pub struct Subscription {
    id: u64,
    listeners: std::rc::Weak<Listeners>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(listeners) = self.listeners.upgrade() {
            listeners.borrow_mut().retain(|(id, _)| *id != self.id);
        }
    }
}
