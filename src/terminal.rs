//! Line-oriented terminal front end.

use crate::games::tictactoe::{Board, Player, Position, ScoreLedger};
use crate::shell::{Presenter, ShellEvent};
use std::io::Write;
use tracing::{instrument, warn};

/// What a line of terminal input asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Forward an event to the shell.
    Event(ShellEvent),
    /// Leave the program.
    Quit,
}

/// Parses one line typed on the board screen.
///
/// - `1`..`9` selects a cell by its on-screen number; `0` is rejected
/// - a position label such as `center` or `top left` selects that cell
/// - `r` restarts, `m` returns to the menu, `q` quits
///
/// Returns `None` for anything else.
#[instrument]
pub fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    match line.to_lowercase().as_str() {
        "q" | "quit" => return Some(Command::Quit),
        "r" | "restart" => return Some(Command::Event(ShellEvent::Restart)),
        "m" | "menu" => return Some(Command::Event(ShellEvent::BackToMenu)),
        _ => {}
    }

    // On-screen numbers are 1-based, so 0 is not a cell.
    if let Ok(number) = line.parse::<usize>() {
        return number
            .checked_sub(1)
            .map(|index| Command::Event(ShellEvent::Cell(index)));
    }

    Position::from_label_or_number(line)
        .map(|pos| Command::Event(ShellEvent::Cell(pos.to_index())))
}

/// [`Presenter`] that writes plain text to any [`Write`] sink.
#[derive(Debug)]
pub struct TerminalPresenter<W> {
    out: W,
    show_hints: bool,
}

impl<W: Write> TerminalPresenter<W> {
    /// Creates a presenter writing to `out`.
    pub fn new(out: W, show_hints: bool) -> Self {
        Self { out, show_hints }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{}", text).and_then(|()| self.out.flush()) {
            warn!(error = %e, "Failed to write to terminal");
        }
    }
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    fn show_menu(&mut self, scores: &ScoreLedger) {
        if !scores.name_a().is_empty() {
            self.show_scores(scores);
        }
        self.emit("Enter two player names to start.");
    }

    fn show_board(&mut self, board: &Board, current: Option<&Player>) {
        let grid = board.display(self.show_hints);
        self.emit(&format!("\n{}\n", grid));
        if let Some(player) = current {
            self.emit(&format!("{}'s turn ({})", player.name(), player.marker()));
        }
    }

    fn show_scores(&mut self, scores: &ScoreLedger) {
        self.emit(&format!(
            "{}: {} | {}: {}",
            scores.name_a(),
            scores.score_a(),
            scores.name_b(),
            scores.score_b()
        ));
    }

    fn show_message(&mut self, message: &str) {
        self.emit(message);
        self.emit("[r] play again  [m] menu  [q] quit");
    }

    fn show_error(&mut self, message: &str) {
        self.emit(&format!("! {}", message));
    }
}
