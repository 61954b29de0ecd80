//! Game session: players, turn order, phase and scores around one board.

use crate::games::tictactoe::{
    Board, Marker, Move, MoveError, MoveOutcome, Outcome, Player, Position, ScoreLedger,
    SessionPhase, rules,
};
use tracing::{debug, info, instrument, warn};

/// Why a round could not be started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SessionError {
    /// A player name was empty or whitespace.
    #[display("Player names must not be empty")]
    EmptyName,
}

impl std::error::Error for SessionError {}

/// One two-player tic-tac-toe session.
///
/// Owns the board, the registered pair of players, whose turn it is, and the
/// score ledger. Every value is independent, so any number of sessions can
/// exist side by side. The board is only mutated through [`GameSession::make_move`],
/// [`GameSession::start_game`] and [`GameSession::reset_game`].
#[derive(Debug, Clone, Default)]
pub struct GameSession {
    board: Board,
    players: Option<[Player; 2]>,
    current: Option<Marker>,
    phase: SessionPhase,
    scores: ScoreLedger,
    history: Vec<Move>,
}

impl GameSession {
    /// Creates an idle session with an empty ledger.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a round between `name_a` (X, moves first) and `name_b` (O).
    ///
    /// Names are trimmed. Scores carry over when the same two names played the
    /// previous round, in either order, and are zeroed when a different name
    /// appears. Starting while a round is in progress abandons that round.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::EmptyName`] if either name is blank; the session
    /// is left untouched.
    #[instrument(skip(self))]
    pub fn start_game(&mut self, name_a: &str, name_b: &str) -> Result<(), SessionError> {
        let (name_a, name_b) = (name_a.trim(), name_b.trim());
        if name_a.is_empty() || name_b.is_empty() {
            warn!("Rejected start with empty player name");
            return Err(SessionError::EmptyName);
        }

        if !self.scores.rebind(name_a, name_b) {
            info!(name_a, name_b, "New pair of players, scores reset");
        }

        self.players = Some([
            Player::new(name_a.to_string(), Marker::X),
            Player::new(name_b.to_string(), Marker::O),
        ]);
        self.current = Some(Marker::X);
        self.board.initialize();
        self.history.clear();
        self.phase = SessionPhase::InProgress;

        info!(name_a, name_b, "Game started");
        Ok(())
    }

    /// Places the current player's marker at `index` (0-8).
    ///
    /// On a win the mover's score is incremented and the session ends; on a
    /// full board the session ends as a draw; otherwise the turn passes.
    ///
    /// # Errors
    ///
    /// - [`MoveError::Inactive`] when no round is in progress
    /// - [`MoveError::OutOfRange`] when `index` is not on the board
    /// - [`MoveError::Occupied`] when the cell already holds a marker
    ///
    /// The session is unchanged on error.
    #[instrument(skip(self), fields(phase = ?self.phase, current = ?self.current))]
    pub fn make_move(&mut self, index: usize) -> Result<MoveOutcome, MoveError> {
        let mover = match (self.phase, self.current_player()) {
            (SessionPhase::InProgress, Some(player)) => player.clone(),
            _ => {
                warn!(index, "Move rejected: no game in progress");
                return Err(MoveError::Inactive);
            }
        };
        let marker = mover.marker();

        let position = Position::from_index(index).ok_or_else(|| {
            warn!(index, "Move rejected: off the board");
            MoveError::OutOfRange(index)
        })?;
        self.board.place(index, marker).map_err(|e| {
            warn!(%position, error = %e, "Move rejected");
            MoveError::from(e)
        })?;

        self.history.push(Move::new(marker, position));
        debug!(index, %marker, moves = self.history.len(), "Move applied");
        debug_assert!(
            rules::markers_balanced(&self.board),
            "Marker balance violated"
        );

        if let Some(winner) = self.board.check_winner() {
            self.phase = SessionPhase::Ended(Outcome::Winner(winner));
            self.current = None;
            self.scores.record_win(winner);
            info!(winner = %mover.name(), %winner, "Game won");
            return Ok(MoveOutcome::Win(mover));
        }

        if self.board.is_full() {
            self.phase = SessionPhase::Ended(Outcome::Draw);
            self.current = None;
            info!("Game drawn");
            return Ok(MoveOutcome::Draw);
        }

        self.current = Some(marker.opponent());
        Ok(MoveOutcome::Continue)
    }

    /// Returns the session to idle: board cleared, no current player.
    ///
    /// Registered names and scores are kept, so the same pair can start again
    /// without losing their tally.
    #[instrument(skip(self))]
    pub fn reset_game(&mut self) {
        self.board.reset();
        self.current = None;
        self.history.clear();
        self.phase = SessionPhase::Idle;
        debug!("Game reset");
    }

    /// Returns the score ledger.
    pub fn scores(&self) -> &ScoreLedger {
        &self.scores
    }

    /// Returns the player to move, or `None` unless a round is in progress.
    pub fn current_player(&self) -> Option<&Player> {
        let [a, b] = self.players.as_ref()?;
        match self.current? {
            Marker::X => Some(a),
            Marker::O => Some(b),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the lifecycle phase.
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Returns true while moves are accepted.
    pub fn is_active(&self) -> bool {
        self.phase.is_active()
    }

    /// Returns the most recently registered pair, X first.
    pub fn players(&self) -> Option<&[Player; 2]> {
        self.players.as_ref()
    }

    /// Returns the moves of the current round in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }
}
