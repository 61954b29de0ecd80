//! Marker balance check.

use super::super::{Board, Marker};
use tracing::{instrument, warn};

/// Holds when X has placed as many markers as O, or exactly one more.
///
/// Any board reached by alternating play from an empty board satisfies this.
#[instrument(skip(board))]
pub fn markers_balanced(board: &Board) -> bool {
    let count = |m: Marker| board.cells().iter().filter(|c| c.marker() == Some(m)).count();
    let (x_count, o_count) = (count(Marker::X), count(Marker::O));

    let valid = x_count == o_count || x_count == o_count + 1;
    if !valid {
        warn!(x_count, o_count, "Marker balance violated");
    }
    valid
}
