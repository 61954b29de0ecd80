//! Win counts for the current pair of players.

use super::Marker;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Cumulative wins for one pair of named players.
///
/// Wins belong to a name, not to a side of the board: slot A is whoever
/// currently holds X and slot B whoever holds O, and [`ScoreLedger::rebind`]
/// swaps the slots when the same two names come back in the other order.
/// Before any round has started both names are empty and both scores zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreLedger {
    name_a: String,
    name_b: String,
    score_a: u32,
    score_b: u32,
}

impl ScoreLedger {
    /// Creates a zeroed ledger for a pair of names.
    pub fn new(name_a: impl Into<String>, name_b: impl Into<String>) -> Self {
        Self {
            name_a: name_a.into(),
            name_b: name_b.into(),
            score_a: 0,
            score_b: 0,
        }
    }

    /// Points the ledger at a new round between `name_a` (X) and `name_b` (O).
    ///
    /// When the two names are the ones already tracked, in either order, the
    /// tallies follow their names and `true` is returned. Any other pair gets
    /// a zeroed ledger and `false`. Two players sharing one name are told apart
    /// only by side, so their tallies stay with X and O.
    #[instrument(skip(self))]
    pub fn rebind(&mut self, name_a: &str, name_b: &str) -> bool {
        if self.name_a == name_a && self.name_b == name_b {
            return true;
        }
        if self.name_a == name_b && self.name_b == name_a {
            std::mem::swap(&mut self.name_a, &mut self.name_b);
            std::mem::swap(&mut self.score_a, &mut self.score_b);
            debug!("Same players swapped sides");
            return true;
        }
        *self = Self::new(name_a, name_b);
        false
    }

    /// Adds one win for the player holding `marker`.
    #[instrument(skip(self))]
    pub fn record_win(&mut self, marker: Marker) {
        match marker {
            Marker::X => self.score_a += 1,
            Marker::O => self.score_b += 1,
        }
        debug!(score_a = self.score_a, score_b = self.score_b, "Win recorded");
    }

    /// Returns the wins of the player holding `marker`.
    pub fn score(&self, marker: Marker) -> u32 {
        match marker {
            Marker::X => self.score_a,
            Marker::O => self.score_b,
        }
    }

    /// Returns the wins recorded for `name`, if that name is tracked.
    pub fn score_of(&self, name: &str) -> Option<u32> {
        if self.name_a == name {
            Some(self.score_a)
        } else if self.name_b == name {
            Some(self.score_b)
        } else {
            None
        }
    }

    /// Wins of the player holding X.
    pub fn score_a(&self) -> u32 {
        self.score_a
    }

    /// Wins of the player holding O.
    pub fn score_b(&self) -> u32 {
        self.score_b
    }

    /// Name of the player holding X.
    pub fn name_a(&self) -> &str {
        &self.name_a
    }

    /// Name of the player holding O.
    pub fn name_b(&self) -> &str {
        &self.name_b
    }
}
