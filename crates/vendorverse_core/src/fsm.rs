//! State Machine Runtime
//!
//! Flat, typed state machines for short-lived UI sequences such as a theme
//! transition. States and events are small `Copy` enums owned by the caller;
//! the machine only knows the transition table and keeps a bounded history.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use std::fmt::Debug;
use std::hash::Hash;

/// Default number of history entries kept per machine
const DEFAULT_HISTORY_LIMIT: usize = 64;

/// A transition in the state machine
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition<S, E> {
    pub from_state: S,
    pub event: E,
    pub to_state: S,
}

impl<S, E> Transition<S, E> {
    pub fn new(from: S, event: E, to: S) -> Self {
        Self {
            from_state: from,
            event,
            to_state: to,
        }
    }
}

/// Builder for creating state machines
pub struct StateMachineBuilder<S, E> {
    initial_state: S,
    transitions: Vec<Transition<S, E>>,
    wildcards: SmallVec<[(E, S); 4]>,
    history_limit: usize,
}

impl<S, E> StateMachineBuilder<S, E>
where
    S: Copy + Eq + Hash + Debug,
    E: Copy + Eq + Hash + Debug,
{
    pub fn new(initial_state: S) -> Self {
        Self {
            initial_state,
            transitions: Vec::new(),
            wildcards: SmallVec::new(),
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }

    /// Add a transition
    pub fn transition(mut self, transition: Transition<S, E>) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Add a simple transition (from, event, to)
    pub fn on(self, from: S, event: E, to: S) -> Self {
        self.transition(Transition::new(from, event, to))
    }

    /// Add a transition taken from any state.
    ///
    /// Explicit `on` entries win over wildcards for the same event.
    pub fn on_any(mut self, event: E, to: S) -> Self {
        self.wildcards.push((event, to));
        self
    }

    /// Cap the number of recorded history entries (0 disables history)
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    /// Build the state machine
    pub fn build(self) -> StateMachine<S, E> {
        let mut table = FxHashMap::default();
        for t in self.transitions {
            table.insert((t.from_state, t.event), t.to_state);
        }

        StateMachine {
            current_state: self.initial_state,
            table,
            wildcards: self.wildcards,
            history: Vec::new(),
            history_limit: self.history_limit,
        }
    }
}

/// A state machine instance
pub struct StateMachine<S, E> {
    current_state: S,
    table: FxHashMap<(S, E), S>,
    wildcards: SmallVec<[(E, S); 4]>,
    /// Recent transitions, oldest first (for debugging and tests)
    history: Vec<(S, E, S)>,
    history_limit: usize,
}

impl<S, E> StateMachine<S, E>
where
    S: Copy + Eq + Hash + Debug,
    E: Copy + Eq + Hash + Debug,
{
    /// Create a state machine from an initial state and transition list
    pub fn new(initial_state: S, transitions: Vec<Transition<S, E>>) -> Self {
        transitions
            .into_iter()
            .fold(Self::builder(initial_state), |b, t| b.transition(t))
            .build()
    }

    /// Create a builder for a state machine
    pub fn builder(initial_state: S) -> StateMachineBuilder<S, E> {
        StateMachineBuilder::new(initial_state)
    }

    /// Get the current state
    pub fn current_state(&self) -> S {
        self.current_state
    }

    /// Check if we're in a specific state
    pub fn is_in(&self, state: S) -> bool {
        self.current_state == state
    }

    /// Get transition history
    pub fn history(&self) -> &[(S, E, S)] {
        &self.history
    }

    /// Clear transition history
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    fn target(&self, event: E) -> Option<S> {
        self.table
            .get(&(self.current_state, event))
            .copied()
            .or_else(|| {
                self.wildcards
                    .iter()
                    .find(|(e, _)| *e == event)
                    .map(|(_, to)| *to)
            })
    }

    /// Check if an event can trigger a transition from the current state
    pub fn can_send(&self, event: E) -> bool {
        self.target(event).is_some()
    }

    /// Send an event, returning the state after it is processed.
    ///
    /// Events with no matching transition leave the state unchanged.
    pub fn send(&mut self, event: E) -> S {
        let current = self.current_state;
        let Some(to_state) = self.target(event) else {
            tracing::trace!("fsm: {:?} ignored in {:?}", event, current);
            return current;
        };

        self.current_state = to_state;
        self.record(current, event, to_state);
        to_state
    }

    fn record(&mut self, from: S, event: E, to: S) {
        if self.history_limit == 0 {
            return;
        }
        if self.history.len() == self.history_limit {
            self.history.remove(0);
        }
        self.history.push((from, event, to));
    }
}
