//! Core domain types for tic-tac-toe.

use super::position::Position;
use super::rules;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Marker a player places on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Marker {
    /// Marker X (always the first player).
    #[display("X")]
    X,
    /// Marker O (always the second player).
    #[display("O")]
    O,
}

impl Marker {
    /// Returns the other marker.
    pub fn opponent(self) -> Self {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
        }
    }
}

/// A named participant and the marker they place.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Player {
    name: String,
    marker: Marker,
}

impl Player {
    /// Returns the player's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the player's marker.
    pub fn marker(&self) -> Marker {
        self.marker
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell holding a marker.
    Occupied(Marker),
}

impl Cell {
    /// Returns the marker in this cell, if any.
    pub fn marker(self) -> Option<Marker> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(marker) => Some(marker),
        }
    }
}

/// Why a marker could not be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum PlaceError {
    /// Index is outside 0..9.
    #[display("Index {} is off the board", _0)]
    OutOfRange(usize),
    /// Cell already holds a marker.
    #[display("Cell {} is already occupied", _0)]
    Occupied(usize),
}

impl std::error::Error for PlaceError {}

/// 3x3 tic-tac-toe board.
///
/// Cells are stored row-major, index 0 is the top-left corner and 8 the
/// bottom-right. A cell that holds a marker is only cleared by
/// [`Board::reset`] or [`Board::initialize`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Empties every cell.
    #[instrument(skip(self))]
    pub fn initialize(&mut self) {
        self.cells = [Cell::Empty; CELL_COUNT];
    }

    /// Empties every cell. Calling it twice is the same as calling it once.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.initialize();
    }

    /// Places `marker` at `index`, reporting why it could not.
    ///
    /// The board is unchanged on error.
    #[instrument(skip(self))]
    pub fn place(&mut self, index: usize, marker: Marker) -> Result<(), PlaceError> {
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(PlaceError::OutOfRange(index))?;
        if *cell != Cell::Empty {
            return Err(PlaceError::Occupied(index));
        }
        *cell = Cell::Occupied(marker);
        trace!(index, %marker, "Marker placed");
        Ok(())
    }

    /// Places `marker` at `index` if the index is on the board and the cell is empty.
    ///
    /// Returns whether the marker was written.
    pub fn set_marker(&mut self, index: usize, marker: Marker) -> bool {
        self.place(index, marker).is_ok()
    }

    /// Returns the marker of the first completed win pattern, if any.
    pub fn check_winner(&self) -> Option<Marker> {
        rules::check_winner(self)
    }

    /// Returns true when no cell is empty.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Gets the cell at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Gets the cell at a named position.
    pub fn cell(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Formats the board as a human-readable grid.
    ///
    /// Empty cells show their 1-based number when `hints` is set, a blank otherwise.
    pub fn display(&self, hints: bool) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                let symbol = match self.cells[index] {
                    Cell::Empty if hints => (index + 1).to_string(),
                    Cell::Empty => " ".to_string(),
                    Cell::Occupied(marker) => marker.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
