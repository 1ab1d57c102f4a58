//! Round state management
//!
//! Defines the round lifecycle state machine and its transitions.
//! A round is Inactive while its asset loads, Active while guesses are
//! accepted, and terminal (Won or Lost) afterwards. Only a fresh round
//! start leaves a terminal state.

use log::debug;

/// Lifecycle phase of the current round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    /// Target selected, waiting for the asset-ready confirmation;
    /// guess submission is disabled
    Inactive,
    /// Asset confirmed ready, guesses are being accepted
    Active,
    /// Player named the target; terminal
    Won,
    /// Obscurity reached the floor through wrong guesses; terminal
    Lost,
}

impl Default for RoundPhase {
    fn default() -> Self {
        Self::Inactive
    }
}

/// Events that drive round phase transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundEvent {
    /// Presentation surface confirmed the asset is displayable
    AssetReady,
    /// Player guess matched the target name
    CorrectGuess,
    /// Player guess did not match; `reached_floor` is true when the
    /// stepped-down level hit full clarity
    IncorrectGuess { reached_floor: bool },
    /// A new round was started, abandoning whatever came before
    RoundRestarted,
}

/// State machine for round phase transitions
pub struct StateMachine;

impl StateMachine {
    /// Processes a round event and returns the new phase
    ///
    /// Invalid combinations leave the phase unchanged; in particular the
    /// terminal phases ignore every event except a restart.
    pub fn process_event(current: RoundPhase, event: RoundEvent) -> RoundPhase {
        let next = match (current, event) {
            (_, RoundEvent::RoundRestarted) => RoundPhase::Inactive,

            (RoundPhase::Inactive, RoundEvent::AssetReady) => RoundPhase::Active,

            (RoundPhase::Active, RoundEvent::CorrectGuess) => RoundPhase::Won,
            (
                RoundPhase::Active,
                RoundEvent::IncorrectGuess {
                    reached_floor: true,
                },
            ) => RoundPhase::Lost,
            (
                RoundPhase::Active,
                RoundEvent::IncorrectGuess {
                    reached_floor: false,
                },
            ) => RoundPhase::Active,

            // Invalid transitions - ignore event
            (phase, _) => phase,
        };

        if next != current {
            debug!("round phase: {current:?} -> {next:?} on {event:?}");
        }
        next
    }
}
