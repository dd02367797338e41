//! Win detection logic for noughts and crosses.

use super::super::{Board, Cell, Marker, Markers, Position};
use tracing::instrument;

/// The 8 winning lines, in the order every scan walks them.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if `marker` fills any line.
pub fn has_line(board: &Board, marker: Marker) -> bool {
    let cell = Cell::Occupied(marker);
    LINES
        .iter()
        .any(|line| line.iter().all(|pos| board.get(*pos) == cell))
}

/// Checks if either marker has three in a row.
///
/// Markers are tried in seat order; the first with a full line wins.
/// After a single move only the mover can have completed a line, so the
/// order never decides between two winners in play.
#[instrument]
pub fn check_winner(board: &Board, markers: &Markers) -> Option<Marker> {
    markers
        .in_order()
        .into_iter()
        .find(|marker| has_line(board, *marker))
}
