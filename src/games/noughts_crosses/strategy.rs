//! Heuristic computer opponent.
//!
//! The computer always sits in the second seat. Its move comes from an
//! ordered list of rules; the first rule that matches the board decides:
//!
//! 1. Opening (turns 1-2): take the centre, else a random corner.
//! 2. Offensive completion: finish any line holding two own markers.
//! 3. Fork block (turns up to 4): answer corner-plus-far-edge setups.
//! 4. Double-corner block (turns up to 4): opposite corners around an own
//!    centre are answered on a random edge.
//! 5. Defensive completion: block any line holding two opponent markers.
//! 6. Fallback: the top-left cell.
//!
//! If the chosen cell is taken (only the fallback and the pattern rules can
//! pick one), random cells are drawn until an empty one turns up.
//!
//! This is a greedy heuristic, not a search. Forks outside the tabled
//! patterns, or after turn 4, are not seen.

use super::rules::LINES;
use super::{Board, Cell, Marker, Markers, Position, Seat};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Last turn on which the opening rule applies.
const OPENING_UNTIL_TURN: u32 = 2;

/// Last turn on which fork and double-corner blocks apply.
const EARLY_BLOCKS_UNTIL_TURN: u32 = 4;

/// Rule used when nothing else matches.
const FALLBACK: Position = Position::TopLeft;

/// Whose marker a pattern cell must hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Own,
    Opponent,
}

impl Side {
    fn marker(self, own: Marker, opponent: Marker) -> Marker {
        match self {
            Side::Own => own,
            Side::Opponent => opponent,
        }
    }
}

/// The move a matched pattern makes.
#[derive(Debug, Clone, Copy)]
enum Play {
    At(Position),
    AnyOf(&'static [Position]),
}

/// A set of cells that must hold given markers, and the reply to it.
#[derive(Debug)]
struct Pattern {
    holds: &'static [(Position, Side)],
    play: Play,
}

impl Pattern {
    fn matches(&self, board: &Board, own: Marker, opponent: Marker) -> bool {
        self.holds
            .iter()
            .all(|(pos, side)| board.get(*pos) == Cell::Occupied(side.marker(own, opponent)))
    }
}

/// Opponent on a corner plus the edge cell away from it: take the corner
/// on the branch side.
const FORK_BLOCKS: [Pattern; 8] = [
    // Top-left corner
    Pattern {
        holds: &[(Position::TopLeft, Side::Opponent), (Position::MiddleRight, Side::Opponent)],
        play: Play::At(Position::TopRight),
    },
    Pattern {
        holds: &[(Position::TopLeft, Side::Opponent), (Position::BottomCenter, Side::Opponent)],
        play: Play::At(Position::BottomLeft),
    },
    // Top-right corner
    Pattern {
        holds: &[(Position::TopRight, Side::Opponent), (Position::MiddleLeft, Side::Opponent)],
        play: Play::At(Position::TopLeft),
    },
    Pattern {
        holds: &[(Position::TopRight, Side::Opponent), (Position::BottomCenter, Side::Opponent)],
        play: Play::At(Position::BottomRight),
    },
    // Bottom-left corner
    Pattern {
        holds: &[(Position::BottomLeft, Side::Opponent), (Position::TopCenter, Side::Opponent)],
        play: Play::At(Position::TopLeft),
    },
    Pattern {
        holds: &[(Position::BottomLeft, Side::Opponent), (Position::MiddleRight, Side::Opponent)],
        play: Play::At(Position::BottomRight),
    },
    // Bottom-right corner
    Pattern {
        holds: &[(Position::BottomRight, Side::Opponent), (Position::TopCenter, Side::Opponent)],
        play: Play::At(Position::TopRight),
    },
    Pattern {
        holds: &[(Position::BottomRight, Side::Opponent), (Position::MiddleLeft, Side::Opponent)],
        play: Play::At(Position::BottomLeft),
    },
];

/// Opponent on opposite corners with the computer in the centre: a corner
/// reply would hand over a fork, so play an edge.
const DOUBLE_CORNER_BLOCKS: [Pattern; 2] = [
    Pattern {
        holds: &[
            (Position::TopLeft, Side::Opponent),
            (Position::Center, Side::Own),
            (Position::BottomRight, Side::Opponent),
        ],
        play: Play::AnyOf(&Position::EDGES),
    },
    Pattern {
        holds: &[
            (Position::BottomLeft, Side::Opponent),
            (Position::Center, Side::Own),
            (Position::TopRight, Side::Opponent),
        ],
        play: Play::AnyOf(&Position::EDGES),
    },
];

/// Which rule chose the computer's move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleKind {
    /// Centre, else a random corner, on turns 1-2.
    Opening,
    /// Completed one of its own lines.
    Offensive,
    /// Blocked a corner-plus-edge fork setup.
    ForkBlock,
    /// Answered opposite corners with an edge.
    DoubleCornerBlock,
    /// Blocked one of the opponent's lines.
    Defensive,
    /// Nothing matched.
    Fallback,
}

#[derive(Debug)]
enum Rule {
    Opening,
    Complete(Side),
    Patterns(RuleKind, &'static [Pattern]),
}

impl Rule {
    fn kind(&self) -> RuleKind {
        match self {
            Rule::Opening => RuleKind::Opening,
            Rule::Complete(Side::Own) => RuleKind::Offensive,
            Rule::Complete(Side::Opponent) => RuleKind::Defensive,
            Rule::Patterns(kind, _) => *kind,
        }
    }

    fn applies(&self, turns_counter: u32) -> bool {
        match self {
            Rule::Opening => turns_counter <= OPENING_UNTIL_TURN,
            Rule::Complete(_) => true,
            Rule::Patterns(..) => turns_counter <= EARLY_BLOCKS_UNTIL_TURN,
        }
    }
}

/// Priority order. On turns 1-2 the opening always fires, so nothing
/// below it is consulted.
const PRIORITY: [Rule; 5] = [
    Rule::Opening,
    Rule::Complete(Side::Own),
    Rule::Patterns(RuleKind::ForkBlock, &FORK_BLOCKS),
    Rule::Patterns(RuleKind::DoubleCornerBlock, &DOUBLE_CORNER_BLOCKS),
    Rule::Complete(Side::Opponent),
];

/// Returns the empty cell of the first line where `marker` holds the
/// other two.
fn completion(board: &Board, marker: Marker) -> Option<Position> {
    LINES.iter().find_map(|line| {
        let held = line
            .iter()
            .filter(|pos| board.get(**pos) == Cell::Occupied(marker))
            .count();
        if held == 2 {
            line.iter().copied().find(|pos| board.is_empty(*pos))
        } else {
            None
        }
    })
}

/// A move chosen by the computer and how it was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    rule: RuleKind,
    position: Position,
    rerolled: bool,
}

impl Decision {
    /// The rule that matched.
    pub fn rule(&self) -> RuleKind {
        self.rule
    }

    /// The empty cell to play.
    pub fn position(&self) -> Position {
        self.position
    }

    /// True when the rule's pick was occupied and a random cell was drawn.
    pub fn rerolled(&self) -> bool {
        self.rerolled
    }
}

/// The computer player's decision procedure.
///
/// Deterministic apart from its random tie-breaks, which come from a
/// seedable generator so games can be replayed.
#[derive(Debug, Clone)]
pub struct ComputerStrategy {
    rng: ChaCha8Rng,
}

impl ComputerStrategy {
    /// Creates a strategy with a fixed seed.
    #[instrument]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Creates a strategy seeded from the operating system.
    #[instrument]
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Chooses the computer's move.
    ///
    /// `markers` is read in seat order: the first seat is the human
    /// opponent, the second is the computer. Returns `None` only on a
    /// full board.
    #[instrument(skip(self, board))]
    pub fn decide(
        &mut self,
        board: &Board,
        markers: &Markers,
        turns_counter: u32,
    ) -> Option<Decision> {
        if board.is_full() {
            warn!("Computer asked to move on a full board");
            return None;
        }

        let own = markers.of(Seat::Second);
        let opponent = markers.of(Seat::First);

        let (rule, mut position) = PRIORITY
            .iter()
            .filter(|rule| rule.applies(turns_counter))
            .find_map(|rule| {
                self.fire(rule, board, own, opponent)
                    .map(|pos| (rule.kind(), pos))
            })
            .unwrap_or((RuleKind::Fallback, FALLBACK));
        debug!(?rule, %position, "Computer rule fired");

        let mut rerolled = false;
        while !board.is_empty(position) {
            rerolled = true;
            position = Position::ALL[self.rng.gen_range(0..Position::ALL.len())];
        }
        if rerolled {
            debug!(%position, "Rule picked an occupied cell, rerolled");
        }

        Some(Decision {
            rule,
            position,
            rerolled,
        })
    }

    /// Chooses the computer's move, discarding how it was reached.
    pub fn choose(
        &mut self,
        board: &Board,
        markers: &Markers,
        turns_counter: u32,
    ) -> Option<Position> {
        self.decide(board, markers, turns_counter)
            .map(|decision| decision.position())
    }

    fn fire(
        &mut self,
        rule: &Rule,
        board: &Board,
        own: Marker,
        opponent: Marker,
    ) -> Option<Position> {
        match rule {
            Rule::Opening => {
                if board.is_empty(Position::Center) {
                    Some(Position::Center)
                } else {
                    Some(self.pick(&Position::CORNERS))
                }
            }
            Rule::Complete(side) => completion(board, side.marker(own, opponent)),
            Rule::Patterns(_, table) => table
                .iter()
                .find(|pattern| pattern.matches(board, own, opponent))
                .map(|pattern| match pattern.play {
                    Play::At(pos) => pos,
                    Play::AnyOf(choices) => self.pick(choices),
                }),
        }
    }

    fn pick(&mut self, choices: &[Position]) -> Position {
        choices[self.rng.gen_range(0..choices.len())]
    }
}

impl Default for ComputerStrategy {
    fn default() -> Self {
        Self::from_entropy()
    }
}
