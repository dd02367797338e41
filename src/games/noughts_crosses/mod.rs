//! Noughts and crosses: board, rules, move validation and the computer
//! opponent.

mod action;
pub mod contracts;
mod outcome;
mod position;
pub mod rules;
mod strategy;
mod types;

pub use action::{Move, MoveError};
pub use outcome::Outcome;
pub use position::Position;
pub use strategy::{ComputerStrategy, Decision, RuleKind};
pub use types::{Board, BoardParseError, Cell, Marker, Markers, Seat};
