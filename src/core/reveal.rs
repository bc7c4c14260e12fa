//! Viewport-triggered reveal bookkeeping.
//!
//! Each tracked element moves `Pending -> Revealed` once and never back.
//! The designated heading additionally starts its typewriter the first time
//! it is revealed; that is tracked by a separate flag so re-entering the
//! viewport can never restart it.

use super::constants::REVEAL_THRESHOLD;
use fnv::FnvHashMap;
use std::hash::Hash;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealState {
    Pending,
    Revealed,
}

/// What the caller must do in response to an intersection notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealAction {
    None,
    Activate,
    ActivateAndType,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealConfig {
    /// Minimum visible fraction of the element's area.
    pub threshold: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: REVEAL_THRESHOLD,
        }
    }
}

pub struct RevealSequencer<K> {
    config: RevealConfig,
    states: FnvHashMap<K, RevealState>,
    heading: Option<K>,
    typing_started: bool,
}

impl<K: Eq + Hash + Clone> RevealSequencer<K> {
    pub fn new(config: RevealConfig) -> Self {
        Self {
            config,
            states: FnvHashMap::default(),
            heading: None,
            typing_started: false,
        }
    }

    /// Start tracking `key`. Re-registering keeps the existing state.
    pub fn register(&mut self, key: K) {
        self.states.entry(key).or_insert(RevealState::Pending);
    }

    /// Designate the element that owns the typewriter. Only the first call
    /// has an effect.
    pub fn set_heading(&mut self, key: K) {
        if self.heading.is_none() {
            self.register(key.clone());
            self.heading = Some(key);
        }
    }

    pub fn state(&self, key: &K) -> Option<RevealState> {
        self.states.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn revealed_count(&self) -> usize {
        self.states
            .values()
            .filter(|s| **s == RevealState::Revealed)
            .count()
    }

    pub fn typing_started(&self) -> bool {
        self.typing_started
    }

    /// Feed one intersection notification. Unknown keys are ignored.
    pub fn observe(&mut self, key: &K, is_intersecting: bool, ratio: f64) -> RevealAction {
        if !is_intersecting || ratio < self.config.threshold {
            return RevealAction::None;
        }
        match self.states.get_mut(key) {
            Some(state) if *state == RevealState::Pending => {
                *state = RevealState::Revealed;
            }
            _ => return RevealAction::None,
        }
        if !self.typing_started && self.heading.as_ref() == Some(key) {
            self.typing_started = true;
            RevealAction::ActivateAndType
        } else {
            RevealAction::Activate
        }
    }
}

impl<K: Eq + Hash + Clone> Default for RevealSequencer<K> {
    fn default() -> Self {
        Self::new(RevealConfig::default())
    }
}
