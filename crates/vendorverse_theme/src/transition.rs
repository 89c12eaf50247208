//! Theme transition state machine
//!
//! An animated switch walks `Idle -> FadingOut -> Committing -> FadingIn ->
//! Settling -> Idle`; an immediate one goes `Idle -> Committing -> Idle`.
//! `Cancel` returns to `Idle` from anywhere so a newer request can take over.

use crate::id::ThemeId;
use std::time::Duration;
use vendorverse_animation::TimerGroup;
use vendorverse_core::fsm::StateMachine;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TransitionPhase {
    #[default]
    Idle,
    /// Logo fading out, old theme still applied
    FadingOut,
    /// Writing the attribute, logo, preference and switchers
    Committing,
    /// New theme applied, logo about to fade back in
    FadingIn,
    /// Logo visible, transition styling still set
    Settling,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransitionEvent {
    Start,
    StartImmediate,
    Commit,
    Committed,
    FadeIn,
    Settle,
    Cancel,
}

/// Timed step queued for an animated transition
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Commit,
    FadeIn,
    Settle,
}

/// Cancellation handle of one transition; all its steps share it
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TransitionToken(pub(crate) TimerGroup);

impl TransitionToken {
    pub fn get(self) -> u64 {
        self.0.get()
    }
}

/// The transition currently in flight
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActiveTransition {
    pub token: TransitionToken,
    pub target: ThemeId,
    pub started_at: Duration,
}

pub(crate) fn transition_machine() -> StateMachine<TransitionPhase, TransitionEvent> {
    use TransitionEvent as E;
    use TransitionPhase as P;

    StateMachine::builder(P::Idle)
        .on(P::Idle, E::Start, P::FadingOut)
        .on(P::Idle, E::StartImmediate, P::Committing)
        .on(P::FadingOut, E::Commit, P::Committing)
        .on(P::Committing, E::Committed, P::FadingIn)
        .on(P::Committing, E::Settle, P::Idle)
        .on(P::FadingIn, E::FadeIn, P::Settling)
        .on(P::FadingIn, E::Settle, P::Idle)
        .on(P::Settling, E::Settle, P::Idle)
        .on_any(E::Cancel, P::Idle)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use TransitionEvent as E;
    use TransitionPhase as P;

    #[test]
    fn animated_walk() {
        let mut fsm = transition_machine();
        assert_eq!(fsm.send(E::Start), P::FadingOut);
        assert_eq!(fsm.send(E::Commit), P::Committing);
        assert_eq!(fsm.send(E::Committed), P::FadingIn);
        assert_eq!(fsm.send(E::FadeIn), P::Settling);
        assert_eq!(fsm.send(E::Settle), P::Idle);
    }

    #[test]
    fn immediate_walk() {
        let mut fsm = transition_machine();
        assert_eq!(fsm.send(E::StartImmediate), P::Committing);
        assert_eq!(fsm.send(E::Settle), P::Idle);
    }

    #[test]
    fn cancel_from_any_phase() {
        let mut fsm = transition_machine();
        fsm.send(E::Start);
        assert_eq!(fsm.send(E::Cancel), P::Idle);

        fsm.send(E::Start);
        fsm.send(E::Commit);
        fsm.send(E::Committed);
        assert_eq!(fsm.send(E::Cancel), P::Idle);
    }

    #[test]
    fn out_of_order_steps_are_ignored() {
        let mut fsm = transition_machine();
        assert_eq!(fsm.send(E::Commit), P::Idle);
        assert_eq!(fsm.send(E::FadeIn), P::Idle);

        fsm.send(E::Start);
        assert_eq!(fsm.send(E::Start), P::FadingOut);
    }
}
