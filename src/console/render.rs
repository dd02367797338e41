//! Text drawing of the board and end-of-game banners.

use crate::games::noughts_crosses::{Board, Outcome, Seat};
use std::fmt::Display;

const ROW_SEPARATOR: &str = "-----+-----+-----";
const BANNER_RULE: &str = "=====================";

/// Draws nine cells as a 3x3 grid.
pub fn grid<T: Display>(cells: &[T; 9]) -> String {
    cells
        .chunks(3)
        .map(|row| format!("  {}  |  {}  |  {}", row[0], row[1], row[2]))
        .collect::<Vec<_>>()
        .join(&format!("\n{}\n", ROW_SEPARATOR))
}

/// Draws the board.
pub fn draw_board(board: &Board) -> String {
    grid(board.cells())
}

/// Draws the position key: each cell labelled with its number.
pub fn draw_key() -> String {
    grid(&[1, 2, 3, 4, 5, 6, 7, 8, 9])
}

/// Banner announcing how the game ended.
///
/// A win is credited to `mover`, the seat that made the last move.
pub fn outcome_banner(outcome: &Outcome, mover: Seat) -> Option<String> {
    let text = match outcome {
        Outcome::Ongoing => return None,
        Outcome::Win(marker) => format!(" Player {}({}) has won!", mover.number(), marker),
        Outcome::Draw => " The game is a draw!".to_string(),
    };
    Some(format!("{BANNER_RULE}\n{text}\n{BANNER_RULE}"))
}
