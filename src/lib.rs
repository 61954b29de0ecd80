//! Strictly Rounds - two-player tic-tac-toe sessions
//!
//! A session library with score tracking across rounds, plus a thin
//! presentation shell that front ends plug into.
//!
//! # Architecture
//!
//! - **Games**: board, win/draw rules, positions, score ledger
//! - **Session**: turn order, phase and scores around one board
//! - **Shell**: [`Presenter`] trait and the [`Shell`] event driver
//! - **Terminal**: a text [`Presenter`] and input parsing
//! - **Replay**: play a scripted move list and report the result
//!
//! # Example
//!
//! ```
//! use strictly_rounds::{GameSession, MoveOutcome};
//!
//! let mut session = GameSession::new();
//! session.start_game("Ann", "Bob").unwrap();
//! for index in [0, 3, 1, 4] {
//!     assert_eq!(session.make_move(index), Ok(MoveOutcome::Continue));
//! }
//! let outcome = session.make_move(2).unwrap();
//! assert_eq!(outcome.signal().as_deref(), Some("Ann wins!"));
//! assert_eq!(session.scores().score_a(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod replay;
mod session;
mod shell;
mod terminal;

// Crate-level exports - Configuration
pub use config::{ConfigError, ShellConfig};

// Crate-level exports - Session management
pub use session::{GameSession, SessionError};

// Crate-level exports - Scripted replays
pub use replay::{ReplayReport, replay};

// Crate-level exports - Presentation shell
pub use shell::{Presenter, Screen, Shell, ShellEvent};

// Crate-level exports - Terminal front end
pub use terminal::{Command, TerminalPresenter, parse_command};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, CELL_COUNT, Cell, DRAW_SIGNAL, INVALID_MOVE_SIGNAL, Marker, Move, MoveError,
    MoveOutcome, Outcome, PlaceError, Player, Position, ScoreLedger, SessionPhase, rules,
};
