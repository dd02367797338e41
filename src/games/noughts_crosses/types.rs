//! Core domain types for noughts and crosses.

use super::position::Position;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// A symbol a player places on the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Marker {
    /// Crosses.
    X,
    /// Noughts.
    O,
}

impl Marker {
    /// Returns the other symbol.
    pub fn complement(self) -> Self {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
        }
    }
}

/// One of the two players, in turn order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    /// Player 1, moves first. Always human.
    First,
    /// Player 2. Played by the computer when the computer opponent is on.
    Second,
}

impl Seat {
    /// Index into a [`Markers`] pair (0 or 1).
    pub fn index(self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }

    /// Player number shown to users (1 or 2).
    pub fn number(self) -> usize {
        self.index() + 1
    }

    /// Returns the other seat.
    pub fn other(self) -> Self {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }
}

/// Contents of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell holding a marker.
    Occupied(Marker),
}

impl Cell {
    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Empty => write!(f, " "),
            Cell::Occupied(marker) => write!(f, "{}", marker),
        }
    }
}

/// The marker each seat is currently playing.
///
/// The two entries are always distinct: every mutation sets one seat and
/// forces the other to the complement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Markers([Marker; 2]);

impl Markers {
    /// Creates a pair where the first seat plays `first`.
    pub fn new(first: Marker) -> Self {
        Self([first, first.complement()])
    }

    /// Returns the marker of a seat.
    pub fn of(&self, seat: Seat) -> Marker {
        self.0[seat.index()]
    }

    /// Gives `seat` the marker `marker` and the other seat its complement.
    #[instrument]
    pub fn assign(&mut self, seat: Seat, marker: Marker) {
        self.0[seat.index()] = marker;
        self.0[seat.other().index()] = marker.complement();
    }

    /// Markers in seat order, the order wins are checked in.
    pub fn in_order(&self) -> [Marker; 2] {
        self.0
    }
}

impl Default for Markers {
    fn default() -> Self {
        Self::new(Marker::X)
    }
}

/// 3x3 noughts and crosses board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Creates a board from cells in row-major order.
    pub fn from_cells(cells: [Cell; 9]) -> Self {
        Self { cells }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.index()]
    }

    /// Writes a cell. No legality checks: validation lives in `contracts`.
    pub fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.index()] = cell;
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Checks if the board is full.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Checks if `marker` appears anywhere on the board.
    pub fn contains(&self, marker: Marker) -> bool {
        self.cells.contains(&Cell::Occupied(marker))
    }

    /// Returns the empty positions in numeric order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::iter().filter(|pos| self.is_empty(*pos)).collect()
    }

    /// Returns all cells as a slice.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Error parsing a board diagram.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardParseError {
    /// A character that is neither a marker nor an empty-cell symbol.
    #[display("Unexpected character {:?} in board diagram", _0)]
    UnexpectedChar(#[error(not(source))] char),
    /// The diagram did not describe exactly 9 cells.
    #[display("Board diagram has {} cells, expected 9", _0)]
    WrongCellCount(#[error(not(source))] usize),
}

/// Parses a compact diagram such as `"XO. .X. ..O"`.
///
/// `X`/`O` (any case) are markers, `.`, `-` and `_` are empty cells;
/// whitespace and `|` are ignored.
impl std::str::FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(9);
        for ch in s.chars() {
            let cell = match ch {
                'x' | 'X' => Cell::Occupied(Marker::X),
                'o' | 'O' => Cell::Occupied(Marker::O),
                '.' | '-' | '_' => Cell::Empty,
                c if c.is_whitespace() || c == '|' => continue,
                c => return Err(BoardParseError::UnexpectedChar(c)),
            };
            cells.push(cell);
        }
        let count = cells.len();
        let cells: [Cell; 9] = cells
            .try_into()
            .map_err(|_| BoardParseError::WrongCellCount(count))?;
        Ok(Self::from_cells(cells))
    }
}
