//! Board positions for noughts and crosses.
//!
//! Players address cells by number, 1 to 9 in row-major order:
//!
//! ```text
//!  1 | 2 | 3
//! ---+---+---
//!  4 | 5 | 6
//! ---+---+---
//!  7 | 8 | 9
//! ```
//!
//! Internally cells are stored zero-indexed; [`Position`] is the only
//! bridge between the two numbering schemes.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A cell on the 3x3 board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (position 1)
    TopLeft,
    /// Top-center (position 2)
    TopCenter,
    /// Top-right (position 3)
    TopRight,
    /// Middle-left (position 4)
    MiddleLeft,
    /// Center (position 5)
    Center,
    /// Middle-right (position 6)
    MiddleRight,
    /// Bottom-left (position 7)
    BottomLeft,
    /// Bottom-center (position 8)
    BottomCenter,
    /// Bottom-right (position 9)
    BottomRight,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// The four corners (1, 3, 7, 9).
    pub const CORNERS: [Position; 4] = [
        Position::TopLeft,
        Position::TopRight,
        Position::BottomLeft,
        Position::BottomRight,
    ];

    /// The four edge midpoints (2, 4, 6, 8).
    pub const EDGES: [Position; 4] = [
        Position::TopCenter,
        Position::MiddleLeft,
        Position::MiddleRight,
        Position::BottomCenter,
    ];

    /// Converts position to board index (0-8).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Converts position to the number players type (1-9).
    pub fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Creates position from board index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Creates position from a player-facing number.
    ///
    /// Any integer is accepted; only 1-9 name a cell.
    #[instrument]
    pub fn from_number(number: i64) -> Option<Self> {
        number
            .checked_sub(1)
            .and_then(|index| usize::try_from(index).ok())
            .and_then(Self::from_index)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.number())
    }
}
