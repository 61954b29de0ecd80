//! Presentation shell: turns UI events into session calls.
//!
//! A front end implements [`Presenter`] and feeds [`ShellEvent`]s into a
//! [`Shell`]. The shell owns the [`GameSession`], so game state never learns
//! how it is drawn, and the presenter never mutates the board.

use crate::games::tictactoe::{Board, MoveOutcome, Player, ScoreLedger};
use crate::session::GameSession;
use tracing::{debug, instrument};

/// Rendering surface driven by a [`Shell`].
pub trait Presenter {
    /// Shows the start menu (name entry), with the last known scores.
    fn show_menu(&mut self, scores: &ScoreLedger);

    /// Draws the board and whose turn it is (`None` once the round ended).
    fn show_board(&mut self, board: &Board, current: Option<&Player>);

    /// Draws the score line.
    fn show_scores(&mut self, scores: &ScoreLedger);

    /// Shows a round result such as `"Ann wins!"`.
    fn show_message(&mut self, message: &str);

    /// Shows a rejected action.
    fn show_error(&mut self, message: &str);
}

/// A user action forwarded by the front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellEvent {
    /// Start button pressed with the two entered names.
    Start {
        /// First player's name (plays X).
        name_a: String,
        /// Second player's name (plays O).
        name_b: String,
    },
    /// A board cell was clicked (0-8).
    Cell(usize),
    /// Play another round with the same pair.
    Restart,
    /// Leave the board and return to the menu.
    BackToMenu,
}

/// Which view the shell is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Name entry.
    #[default]
    Menu,
    /// The game board.
    Board,
}

/// Drives one [`GameSession`] from UI events.
#[derive(Debug)]
pub struct Shell<P> {
    session: GameSession,
    presenter: P,
    screen: Screen,
}

impl<P: Presenter> Shell<P> {
    /// Creates a shell with a fresh session and shows the menu.
    pub fn new(mut presenter: P) -> Self {
        let session = GameSession::new();
        presenter.show_menu(session.scores());
        Self {
            session,
            presenter,
            screen: Screen::Menu,
        }
    }

    /// Handles one event, updating the session and the presenter.
    #[instrument(skip(self), fields(screen = ?self.screen))]
    pub fn dispatch(&mut self, event: ShellEvent) {
        match event {
            ShellEvent::Start { name_a, name_b } => self.start(&name_a, &name_b),
            ShellEvent::Cell(index) => self.cell(index),
            ShellEvent::Restart => self.restart(),
            ShellEvent::BackToMenu => self.back_to_menu(),
        }
    }

    fn start(&mut self, name_a: &str, name_b: &str) {
        match self.session.start_game(name_a, name_b) {
            Ok(()) => {
                self.screen = Screen::Board;
                self.render_board();
                self.presenter.show_scores(self.session.scores());
            }
            Err(e) => self.presenter.show_error(&e.to_string()),
        }
    }

    fn cell(&mut self, index: usize) {
        if self.screen != Screen::Board {
            debug!(index, "Cell event ignored outside the board");
            return;
        }

        match self.session.make_move(index) {
            Ok(outcome) => {
                self.render_board();
                if let Some(message) = outcome.signal() {
                    self.presenter.show_message(&message);
                }
                if matches!(outcome, MoveOutcome::Win(_)) {
                    self.presenter.show_scores(self.session.scores());
                }
            }
            Err(e) => self.presenter.show_error(e.signal()),
        }
    }

    fn restart(&mut self) {
        let Some([a, b]) = self.session.players().cloned() else {
            debug!("Restart ignored before any game");
            return;
        };
        self.start(a.name(), b.name());
    }

    fn back_to_menu(&mut self) {
        self.session.reset_game();
        self.screen = Screen::Menu;
        self.presenter.show_menu(self.session.scores());
    }

    fn render_board(&mut self) {
        self.presenter
            .show_board(self.session.board(), self.session.current_player());
    }

    /// Returns the view currently shown.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Returns the session driven by this shell.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Returns the presenter.
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Consumes the shell, returning its presenter.
    pub fn into_presenter(self) -> P {
        self.presenter
    }
}
