//! First-class action types for noughts and crosses.
//!
//! Moves are domain events, not side effects. They are validated by
//! `contracts` before the session applies them to the board.

use super::{Marker, Position};
use serde::{Deserialize, Serialize};

/// A move: place a new marker, or slide an existing one to an empty cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Place `marker` on an empty cell.
    Place {
        /// The marker placed.
        marker: Marker,
        /// Where it goes.
        position: Position,
    },
    /// Lift `marker` from `from` and put it on `to`.
    Relocate {
        /// The marker moved.
        marker: Marker,
        /// Cell the marker leaves.
        from: Position,
        /// Empty cell the marker lands on.
        to: Position,
    },
}

impl Move {
    /// Returns the marker this move puts on the board.
    pub fn marker(&self) -> Marker {
        match self {
            Move::Place { marker, .. } | Move::Relocate { marker, .. } => *marker,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Place { marker, position } => write!(f, "{} -> {}", marker, position),
            Move::Relocate { marker, from, to } => write!(f, "{} {} -> {}", marker, from, to),
        }
    }
}

/// Why a move was refused.
///
/// Every variant is recoverable: the caller re-prompts.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The number names no cell.
    #[display("That is not a valid location! Must be a number between 1-9 and an unoccupied position.")]
    OutOfRange(i64),

    /// The cell already holds a marker.
    #[display("That location is occupied, please choose a new location.")]
    Occupied(Position),

    /// The relocation start does not hold the mover's marker.
    #[display("You're playing as {}. Location {} does not hold one of your markers.", marker, number)]
    NotOwned {
        /// The number the player typed.
        number: i64,
        /// The mover's marker.
        marker: Marker,
    },

    /// The relocation destination is not empty.
    #[display("You must choose an empty position.")]
    DestinationNotEmpty(i64),

    /// The move carries the other seat's marker.
    #[display("It's not {}'s turn", _0)]
    WrongMarker(Marker),

    /// The game has already been decided.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}
