//! Draw detection logic for noughts and crosses.

use super::super::{Board, Markers};
use super::win::check_winner;
use tracing::instrument;

/// A full board with no winner is a draw.
///
/// The win check runs first: a move that fills the last cell and
/// completes a line is a win, not a draw.
#[instrument]
pub fn is_draw(board: &Board, markers: &Markers) -> bool {
    check_winner(board, markers).is_none() && board.is_full()
}
