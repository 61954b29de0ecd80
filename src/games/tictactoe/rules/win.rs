//! Win detection logic for tic-tac-toe.

use super::super::{Board, Marker, Position};
use tracing::instrument;

/// The eight winning lines, in evaluation order: rows, columns, diagonals.
pub const WIN_PATTERNS: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Returns the marker filling the first pattern in [`WIN_PATTERNS`] whose three
/// cells hold the same marker, `None` otherwise. A board with several completed
/// lines reports the earliest one.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Marker> {
    WIN_PATTERNS.iter().find_map(|&[a, b, c]| {
        let marker = board.cell(a).marker()?;
        (board.cell(b).marker() == Some(marker) && board.cell(c).marker() == Some(marker))
            .then_some(marker)
    })
}
