//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board). Rules are kept apart from
//! board storage so the session and the board share one definition of a win.

pub mod balance;
pub mod draw;
pub mod win;

pub use balance::markers_balanced;
pub use draw::is_full;
pub use win::{WIN_PATTERNS, check_winner};
