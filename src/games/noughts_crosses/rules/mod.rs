//! Game rules for noughts and crosses.
//!
//! Pure functions over a board and a marker pair. Nothing here mutates
//! state, so evaluating an unchanged board always gives the same answer.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::{LINES, check_winner, has_line};

use super::{Board, Markers, Outcome};
use tracing::{debug, instrument};

/// Evaluates the board: a win, a draw, or still going.
#[instrument]
pub fn evaluate(board: &Board, markers: &Markers) -> Outcome {
    let outcome = if let Some(marker) = check_winner(board, markers) {
        Outcome::Win(marker)
    } else if is_draw(board, markers) {
        Outcome::Draw
    } else {
        Outcome::Ongoing
    };
    debug!(%outcome, "Board evaluated");
    outcome
}
