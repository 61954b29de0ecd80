//! First-class action types for tic-tac-toe.
//!
//! Moves and their results are values: a shell decides how to show them,
//! the session only reports what happened.

use super::{Marker, PlaceError, Player, Position};
use serde::{Deserialize, Serialize};

/// Legacy text shown for every rejected move.
pub const INVALID_MOVE_SIGNAL: &str = "Invalid move";

/// Legacy text shown when a round ends without a winner.
pub const DRAW_SIGNAL: &str = "It's a draw!";

/// A move in tic-tac-toe: a marker placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The marker that was placed.
    pub marker: Marker,
    /// Where it was placed.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.marker, self.position.label())
    }
}

/// What a successful move led to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The round continues with the other player.
    Continue,
    /// The mover completed a line.
    Win(Player),
    /// The board filled up with no line completed.
    Draw,
}

impl MoveOutcome {
    /// Returns true if this move ended the round.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, MoveOutcome::Continue)
    }

    /// Returns the legacy message for this outcome.
    ///
    /// `None` while the round continues, `"<name> wins!"` or `"It's a draw!"` otherwise.
    pub fn signal(&self) -> Option<String> {
        match self {
            MoveOutcome::Continue => None,
            MoveOutcome::Win(player) => Some(format!("{} wins!", player.name())),
            MoveOutcome::Draw => Some(DRAW_SIGNAL.to_string()),
        }
    }
}

/// Why a move was rejected.
///
/// Each kind is distinct, but all of them share the legacy `"Invalid move"`
/// text returned by [`MoveError::signal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// No round is in progress (never started, finished, or reset).
    #[display("No game in progress")]
    Inactive,

    /// The index is not on the board.
    #[display("Index {} is off the board (must be 0-8)", _0)]
    OutOfRange(usize),

    /// The cell at the position already holds a marker.
    #[display("{} is already occupied", _0)]
    Occupied(Position),
}

impl MoveError {
    /// Returns the legacy message shown for any rejected move.
    pub fn signal(&self) -> &'static str {
        INVALID_MOVE_SIGNAL
    }
}

impl std::error::Error for MoveError {}

impl From<PlaceError> for MoveError {
    fn from(err: PlaceError) -> Self {
        match err {
            PlaceError::OutOfRange(index) => MoveError::OutOfRange(index),
            PlaceError::Occupied(index) => Position::from_index(index)
                .map_or(MoveError::OutOfRange(index), MoveError::Occupied),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_errors_keep_their_kind() {
        assert_eq!(
            MoveError::from(PlaceError::OutOfRange(12)),
            MoveError::OutOfRange(12)
        );
        assert_eq!(
            MoveError::from(PlaceError::Occupied(4)),
            MoveError::Occupied(Position::Center)
        );
    }

    #[test]
    fn test_board_rejection_becomes_move_error() {
        let mut board = super::super::Board::new();
        board.place(8, Marker::X).unwrap();
        let err = board.place(8, Marker::O).map_err(MoveError::from);
        assert_eq!(err, Err(MoveError::Occupied(Position::BottomRight)));
        assert_eq!(err.unwrap_err().signal(), INVALID_MOVE_SIGNAL);
    }
}
