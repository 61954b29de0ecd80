//! Session phases for the game controller state machine.

use super::Marker;
use serde::{Deserialize, Serialize};

/// Outcome of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A marker completed a line.
    Winner(Marker),
    /// The board filled up with no line.
    Draw,
}

/// Where a session is in its lifecycle.
///
/// ```text
/// Idle --start--> InProgress --win/draw--> Ended
///  ^                  |                      |
///  +------reset-------+--------reset---------+
/// ```
///
/// `start` is accepted from every phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SessionPhase {
    /// No round registered.
    #[default]
    Idle,
    /// Moves are accepted.
    InProgress,
    /// The round finished and has not been reset.
    Ended(Outcome),
}

impl SessionPhase {
    /// Returns true while moves are accepted.
    pub fn is_active(&self) -> bool {
        matches!(self, SessionPhase::InProgress)
    }

    /// Returns the outcome of a finished round.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            SessionPhase::Ended(outcome) => Some(*outcome),
            _ => None,
        }
    }
}
