// src/flags/mod.rs

// 🌍 Standard library
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

// 📦 External crates
use tokio::sync::mpsc;
use tracing::{debug, info};

// 🧠 Internal modules
use crate::model::FeatureFlag;

struct Subscriber {
    flag: FeatureFlag,
    sender: mpsc::UnboundedSender<bool>,
}

#[derive(Default)]
struct FlagState {
    values: HashMap<FeatureFlag, bool>,
    subscribers: Vec<Subscriber>,
}

impl FlagState {
    fn value(&self, flag: FeatureFlag) -> bool {
        self.values
            .get(&flag)
            .copied()
            .unwrap_or_else(|| flag.default_value())
    }
}

/// Process-wide boolean toggles. Every read, write and notification happens
/// under one lock, so observers see updates in the order they were applied.
#[derive(Default)]
pub struct FeatureFlagStore {
    state: Mutex<FlagState>,
}

impl FeatureFlagStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, FlagState> {
        // A panicking observer cannot leave the map half-written.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn get_value(&self, flag: FeatureFlag) -> bool {
        self.lock().value(flag)
    }

    /// Writes `value` and, if it differs from the current one, hands it to
    /// every live observer of `flag` in subscription order before returning.
    pub fn update(&self, flag: FeatureFlag, value: bool) {
        let mut state = self.lock();
        let previous = state.value(flag);
        state.values.insert(flag, value);

        if previous == value {
            debug!("Flag {flag} already {value}, no notification");
            return;
        }

        info!("Flag {flag} changed: {previous} -> {value}");
        state
            .subscribers
            .retain(|sub| sub.flag != flag || sub.sender.send(value).is_ok());
    }

    /// Subscribes to `flag`. The current value is queued immediately, then
    /// every change after it.
    pub fn observe(&self, flag: FeatureFlag) -> FlagObserver {
        let (sender, receiver) = mpsc::unbounded_channel();
        let mut state = self.lock();
        let _ = sender.send(state.value(flag));
        state.subscribers.push(Subscriber { flag, sender });
        FlagObserver { receiver }
    }

    pub fn observer_count(&self, flag: FeatureFlag) -> usize {
        self.lock()
            .subscribers
            .iter()
            .filter(|sub| sub.flag == flag && !sub.sender.is_closed())
            .count()
    }
}

/// Receiving end of [`FeatureFlagStore::observe`]. Never yields the same
/// value twice in a row.
pub struct FlagObserver {
    receiver: mpsc::UnboundedReceiver<bool>,
}

impl FlagObserver {
    /// Waits for the next value. `None` once the store is gone.
    pub async fn next(&mut self) -> Option<bool> {
        self.receiver.recv().await
    }

    /// Returns the next queued value without waiting.
    pub fn try_next(&mut self) -> Option<bool> {
        self.receiver.try_recv().ok()
    }

    /// Drains everything queued and returns the newest value, if any.
    pub fn latest(&mut self) -> Option<bool> {
        let mut latest = None;
        while let Some(value) = self.try_next() {
            latest = Some(value);
        }
        latest
    }
}
