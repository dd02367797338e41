//! Result of evaluating a board.

use super::types::Marker;
use serde::{Deserialize, Serialize};

/// State of the game after a move.
///
/// Computed fresh from the board each turn, never stored as the source
/// of truth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No line yet and at least one empty cell.
    Ongoing,
    /// A marker holds a full line.
    Win(Marker),
    /// Board full with no line.
    Draw,
}

impl Outcome {
    /// Returns the winning marker if there is one.
    pub fn winner(&self) -> Option<Marker> {
        match self {
            Outcome::Win(marker) => Some(*marker),
            Outcome::Ongoing | Outcome::Draw => None,
        }
    }

    /// Returns true once the game has ended.
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Ongoing => write!(f, "In progress"),
            Outcome::Win(marker) => write!(f, "{} wins", marker),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
