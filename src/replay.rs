//! Scripted replays: play a list of moves and report where the round stands.

use crate::games::tictactoe::{Board, Move, Outcome, Player, ScoreLedger, SessionPhase};
use crate::session::{GameSession, SessionError};
use derive_getters::Getters;
use serde::Serialize;
use tracing::{debug, instrument, warn};

/// Final state of a scripted replay.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct ReplayReport {
    /// Board after the last applied move.
    board: Board,
    /// Session phase after the replay.
    phase: SessionPhase,
    /// Outcome when the round finished.
    outcome: Option<Outcome>,
    /// Moves that were applied, in order.
    history: Vec<Move>,
    /// Score ledger after the replay.
    scores: ScoreLedger,
    /// Player to move when the round is still open.
    to_move: Option<Player>,
    /// Result line: the win or draw signal, or the rejection that stopped the replay.
    result: Option<String>,
}

impl ReplayReport {
    fn capture(session: &GameSession, result: Option<String>) -> Self {
        Self {
            board: session.board().clone(),
            phase: session.phase(),
            outcome: session.phase().outcome(),
            history: session.history().to_vec(),
            scores: session.scores().clone(),
            to_move: session.current_player().cloned(),
            result,
        }
    }

    /// Renders the board followed by the result or whose move it is.
    pub fn render_text(&self) -> String {
        let mut text = format!("{}\n", self.board.display(false));
        match (&self.result, &self.to_move) {
            (Some(message), _) => text.push_str(&format!("\n{}", message)),
            (None, Some(player)) => text.push_str(&format!("\n{} to move", player.name())),
            (None, None) => {}
        }
        text
    }

    /// Serializes the report as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Starts a round between `name_a` (X) and `name_b` (O) and plays `moves` in order.
///
/// The replay stops at the first move that ends the round or is rejected;
/// anything after it is ignored. A rejected move leaves the board as it was
/// and is reported as `"<signal>: <reason>"`.
///
/// # Errors
///
/// Returns [`SessionError::EmptyName`] if either name is blank.
#[instrument]
pub fn replay(
    name_a: &str,
    name_b: &str,
    moves: &[usize],
) -> Result<ReplayReport, SessionError> {
    let mut session = GameSession::new();
    session.start_game(name_a, name_b)?;

    let mut result = None;
    for &index in moves {
        match session.make_move(index) {
            Ok(outcome) if outcome.is_terminal() => {
                result = outcome.signal();
                break;
            }
            Ok(_) => {}
            Err(e) => {
                warn!(index, error = %e, "Replay move rejected");
                result = Some(format!("{}: {}", e.signal(), e));
                break;
            }
        }
    }

    debug!(applied = session.history().len(), requested = moves.len(), "Replay finished");
    Ok(ReplayReport::capture(&session, result))
}
