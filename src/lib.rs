//! Noughts and crosses library - console game with a heuristic computer
//! opponent.
//!
//! # Architecture
//!
//! - **Games**: board, win/draw rules, move validation and the computer
//!   strategy (`games::noughts_crosses`)
//! - **Session**: turn order, marker assignment and rule variants
//! - **Console**: prompts with retry-until-valid loops and board drawing
//!
//! # Example
//!
//! ```
//! use noughts_crosses::{Board, ComputerStrategy, Markers, Marker, Position};
//!
//! let board: Board = "XX. ... ...".parse().unwrap();
//! let mut strategy = ComputerStrategy::seeded(42);
//! let reply = strategy.choose(&board, &Markers::new(Marker::X), 5);
//! assert_eq!(reply, Some(Position::TopRight));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod console;
pub mod games;
mod session;

// Crate-level exports - Session management
pub use session::{GameConfig, GameSession, GameSummary, SessionError, SetupAnswers, TurnState};

// Crate-level exports - Console collaborators
pub use console::{Console, ConsoleError, InputError, Prompt, Render};

// Crate-level exports - Game types
pub use games::noughts_crosses::{
    Board, BoardParseError, Cell, ComputerStrategy, Decision, Marker, Markers, Move, MoveError,
    Outcome, Position, RuleKind, Seat, contracts, rules,
};
