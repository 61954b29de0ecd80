mod action;
mod ledger;
mod phases;
mod position;
pub mod rules;
mod types;

pub use action::{DRAW_SIGNAL, INVALID_MOVE_SIGNAL, Move, MoveError, MoveOutcome};
pub use ledger::ScoreLedger;
pub use phases::{Outcome, SessionPhase};
pub use position::Position;
pub use types::{Board, CELL_COUNT, Cell, Marker, PlaceError, Player};
