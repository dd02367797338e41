//! Move validation for noughts and crosses.
//!
//! Validators are pure: they read the board, return the checked
//! [`Move`] or a [`MoveError`], and never mutate. Re-prompting on failure
//! is the input collaborator's job.

use super::action::{Move, MoveError};
use super::{Board, Cell, Markers, Position, Seat};
use tracing::{debug, instrument};

// ─────────────────────────────────────────────────────────────
//  Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the number names a cell (1-9).
pub struct InRange;

impl InRange {
    /// Resolves `number` to a position.
    pub fn check(number: i64) -> Result<Position, MoveError> {
        Position::from_number(number).ok_or(MoveError::OutOfRange(number))
    }
}

/// Precondition: the cell is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Passes when nothing occupies `pos`.
    pub fn check(board: &Board, pos: Position) -> Result<(), MoveError> {
        if board.is_empty(pos) {
            Ok(())
        } else {
            Err(MoveError::Occupied(pos))
        }
    }
}

/// Precondition: the cell holds the mover's marker.
pub struct HoldsOwnMarker;

impl HoldsOwnMarker {
    /// Resolves `number` to a position holding `markers.of(seat)`.
    ///
    /// A number naming no cell cannot hold a marker, so it fails this
    /// check rather than a range check.
    pub fn check(
        board: &Board,
        markers: &Markers,
        seat: Seat,
        number: i64,
    ) -> Result<Position, MoveError> {
        let marker = markers.of(seat);
        Position::from_number(number)
            .filter(|pos| board.get(*pos) == Cell::Occupied(marker))
            .ok_or(MoveError::NotOwned { number, marker })
    }
}

/// Precondition: the relocation destination is empty.
pub struct DestinationIsEmpty;

impl DestinationIsEmpty {
    /// Resolves `number` to an empty position.
    pub fn check(board: &Board, number: i64) -> Result<Position, MoveError> {
        Position::from_number(number)
            .filter(|pos| board.is_empty(*pos))
            .ok_or(MoveError::DestinationNotEmpty(number))
    }
}

// ─────────────────────────────────────────────────────────────
//  Validators
// ─────────────────────────────────────────────────────────────

/// Validates placing a new marker at `number`.
///
/// Succeeds iff `number` is 1-9 and that cell is empty.
#[instrument(skip(board))]
pub fn validate_placement(board: &Board, number: i64) -> Result<Position, MoveError> {
    let pos = InRange::check(number)?;
    CellIsEmpty::check(board, pos)?;
    Ok(pos)
}

/// Validates the start of a relocation: it must hold the mover's marker.
///
/// There is no separate 1-9 range gate for relocation; only occupancy is
/// checked, and numbers naming no cell fail that check.
#[instrument(skip(board, markers))]
pub fn validate_relocation_start(
    board: &Board,
    markers: &Markers,
    seat: Seat,
    number: i64,
) -> Result<Position, MoveError> {
    HoldsOwnMarker::check(board, markers, seat, number).inspect_err(|err| {
        debug!(%err, "Relocation start refused");
    })
}

/// Validates the end of a relocation: it must be empty.
#[instrument(skip(board))]
pub fn validate_relocation_end(board: &Board, number: i64) -> Result<Position, MoveError> {
    DestinationIsEmpty::check(board, number)
}

/// Validates a whole relocation for `seat`.
#[instrument(skip(board, markers))]
pub fn validate_relocation(
    board: &Board,
    markers: &Markers,
    seat: Seat,
    start: i64,
    end: i64,
) -> Result<Move, MoveError> {
    let from = validate_relocation_start(board, markers, seat, start)?;
    let to = validate_relocation_end(board, end)?;
    Ok(Move::Relocate {
        marker: markers.of(seat),
        from,
        to,
    })
}

/// Re-checks an already built move against the current board.
///
/// Used by the session before applying any move, human or computer.
#[instrument(skip(board))]
pub fn check_move(board: &Board, action: &Move) -> Result<(), MoveError> {
    match *action {
        Move::Place { position, .. } => CellIsEmpty::check(board, position),
        Move::Relocate { marker, from, to } => {
            if board.get(from) != Cell::Occupied(marker) {
                return Err(MoveError::NotOwned {
                    number: i64::from(from.number()),
                    marker,
                });
            }
            if !board.is_empty(to) {
                return Err(MoveError::DestinationNotEmpty(i64::from(to.number())));
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::noughts_crosses::Marker;

    #[test]
    fn test_placement_on_empty_cell() {
        let board = Board::new();
        assert_eq!(validate_placement(&board, 5), Ok(Position::Center));
    }

    #[test]
    fn test_placement_out_of_range() {
        let board = Board::new();
        assert_eq!(validate_placement(&board, 0), Err(MoveError::OutOfRange(0)));
        assert_eq!(validate_placement(&board, 10), Err(MoveError::OutOfRange(10)));
        assert_eq!(validate_placement(&board, -3), Err(MoveError::OutOfRange(-3)));
    }

    #[test]
    fn test_placement_on_occupied_cell() {
        let board: Board = "X.. ... ...".parse().unwrap();
        assert_eq!(
            validate_placement(&board, 1),
            Err(MoveError::Occupied(Position::TopLeft))
        );
    }

    #[test]
    fn test_relocation_of_own_marker() {
        let board: Board = "X.. .O. ...".parse().unwrap();
        let markers = Markers::new(Marker::X);
        assert_eq!(
            validate_relocation(&board, &markers, Seat::First, 1, 9),
            Ok(Move::Relocate {
                marker: Marker::X,
                from: Position::TopLeft,
                to: Position::BottomRight,
            })
        );
    }

    #[test]
    fn test_relocation_of_opponent_marker_refused() {
        let board: Board = "X.. .O. ...".parse().unwrap();
        let markers = Markers::new(Marker::X);
        assert_eq!(
            validate_relocation(&board, &markers, Seat::First, 5, 9),
            Err(MoveError::NotOwned {
                number: 5,
                marker: Marker::X
            })
        );
    }

    #[test]
    fn test_relocation_range_only_checked_through_occupancy() {
        let board: Board = "X.. .O. ...".parse().unwrap();
        let markers = Markers::new(Marker::X);
        assert_eq!(
            validate_relocation_start(&board, &markers, Seat::First, 42),
            Err(MoveError::NotOwned {
                number: 42,
                marker: Marker::X
            })
        );
        assert_eq!(
            validate_relocation_end(&board, 0),
            Err(MoveError::DestinationNotEmpty(0))
        );
    }

    #[test]
    fn test_relocation_onto_occupied_cell_refused() {
        let board: Board = "X.. .O. ...".parse().unwrap();
        let markers = Markers::new(Marker::X);
        assert_eq!(
            validate_relocation(&board, &markers, Seat::First, 1, 5),
            Err(MoveError::DestinationNotEmpty(5))
        );
    }

    #[test]
    fn test_check_move_catches_stale_moves() {
        let board: Board = "XO. ... ...".parse().unwrap();
        let place = Move::Place {
            marker: Marker::X,
            position: Position::TopCenter,
        };
        assert_eq!(
            check_move(&board, &place),
            Err(MoveError::Occupied(Position::TopCenter))
        );

        let relocate = Move::Relocate {
            marker: Marker::X,
            from: Position::TopLeft,
            to: Position::Center,
        };
        assert_eq!(check_move(&board, &relocate), Ok(()));
    }
}
