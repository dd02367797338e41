//! Game session: turn order, marker assignment and rule variants.
//!
//! A [`GameSession`] owns everything that changes during a game: the
//! board, the marker pair, whose turn it is and the computer's random
//! source. Rules, validators and the strategy only ever borrow it for the
//! length of a call.

use crate::console::{ConsoleError, Prompt, Render, outcome_banner};
use crate::games::noughts_crosses::{
    Board, Cell, ComputerStrategy, Decision, Marker, Markers, Move, MoveError, Outcome, Position,
    Seat, contracts, rules,
};
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Rule variants, fixed before the first move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters, new, Serialize, Deserialize)]
pub struct GameConfig {
    /// The second seat is played by the computer.
    computer_opponent: bool,
    /// Each human player picks X or O at the start of every turn.
    both_markers: bool,
    /// A player may move one of their markers instead of placing a new one.
    move_markers: bool,
}

/// Answers supplied up front (for example on the command line).
///
/// Anything left `None` is asked for during setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, new)]
pub struct SetupAnswers {
    computer_opponent: Option<bool>,
    both_markers: Option<bool>,
    move_markers: Option<bool>,
    first_marker: Option<Marker>,
}

/// Whose turn it is and how many turns have been played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnState {
    seat: Seat,
    turns_counter: u32,
}

impl TurnState {
    /// Turn 1, first seat to move.
    pub fn new() -> Self {
        Self {
            seat: Seat::First,
            turns_counter: 1,
        }
    }

    /// The seat to move.
    pub fn seat(&self) -> Seat {
        self.seat
    }

    /// The current turn, counting from 1.
    pub fn turns_counter(&self) -> u32 {
        self.turns_counter
    }

    /// Hands the move to the other seat.
    pub fn advance(&mut self) {
        self.seat = self.seat.other();
        self.turns_counter += 1;
    }
}

impl Default for TurnState {
    fn default() -> Self {
        Self::new()
    }
}

/// Error raised while playing a session.
#[derive(Debug, Display, Error)]
pub enum SessionError {
    /// A move was refused.
    #[display("{}", _0)]
    Move(MoveError),
    /// The console failed.
    #[display("{}", _0)]
    Console(ConsoleError),
}

impl From<MoveError> for SessionError {
    fn from(err: MoveError) -> Self {
        Self::Move(err)
    }
}

impl From<ConsoleError> for SessionError {
    fn from(err: ConsoleError) -> Self {
        Self::Console(err)
    }
}

/// Final record of a finished (or abandoned) game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameSummary {
    /// Variants the game was played with.
    config: GameConfig,
    /// Final board.
    board: Board,
    /// Marker pair at the end of the game.
    markers: Markers,
    /// How the game ended.
    outcome: Outcome,
    /// Seat credited with the win.
    winner: Option<Seat>,
    /// Turns played.
    turns: u32,
}

/// A game in progress.
#[derive(Debug, Clone)]
pub struct GameSession {
    config: GameConfig,
    board: Board,
    markers: Markers,
    turn: TurnState,
    outcome: Outcome,
    winner: Option<Seat>,
    strategy: ComputerStrategy,
}

impl GameSession {
    /// Creates a session on an empty board.
    #[instrument(skip(strategy))]
    pub fn new(config: GameConfig, markers: Markers, strategy: ComputerStrategy) -> Self {
        Self {
            config,
            board: Board::new(),
            markers,
            turn: TurnState::new(),
            outcome: Outcome::Ongoing,
            winner: None,
            strategy,
        }
    }

    /// Asks the setup questions not already answered, then shows the empty
    /// board and the position key.
    ///
    /// The first-marker question is skipped when markers are chosen every
    /// turn.
    #[instrument(skip(io, strategy))]
    pub fn setup<IO: Prompt + Render>(
        io: &mut IO,
        answers: SetupAnswers,
        strategy: ComputerStrategy,
    ) -> Result<Self, SessionError> {
        let computer_opponent = ask_unless_given(
            io,
            answers.computer_opponent,
            "Do you want to play against the computer?",
        )?;
        let both_markers = ask_unless_given(
            io,
            answers.both_markers,
            "Do you want to be able to play as either X or O on your turns?",
        )?;
        let move_markers = ask_unless_given(
            io,
            answers.move_markers,
            "Do you want to be able to move already placed markers?",
        )?;

        let first = match (both_markers, answers.first_marker) {
            (true, _) => Marker::X,
            (false, Some(marker)) => marker,
            (false, None) => io.choose_marker("Which marker should play first?")?,
        };

        let config = GameConfig::new(computer_opponent, both_markers, move_markers);
        let session = Self::new(config, Markers::new(first), strategy);
        io.render(&session.board)?;
        io.render_key()?;
        Ok(session)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the marker pair.
    pub fn markers(&self) -> &Markers {
        &self.markers
    }

    /// Returns the turn state.
    pub fn turn(&self) -> &TurnState {
        &self.turn
    }

    /// Returns the outcome as of the last completed turn.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// True when the computer plays the seat to move.
    pub fn is_computer_turn(&self) -> bool {
        *self.config.computer_opponent() && self.turn.seat() == Seat::Second
    }

    /// The marker of the seat to move.
    pub fn current_marker(&self) -> Marker {
        self.markers.of(self.turn.seat())
    }

    /// Gives the seat to move `marker` for this turn; the other seat gets
    /// the complement.
    #[instrument(skip(self))]
    pub fn choose_marker(&mut self, marker: Marker) {
        self.markers.assign(self.turn.seat(), marker);
    }

    /// True when the seat to move may relocate instead of placing: the
    /// variant is on and one of its markers is on the board.
    pub fn can_relocate(&self) -> bool {
        *self.config.move_markers() && self.board.contains(self.current_marker())
    }

    /// Applies a move for the seat to move, rendering after each change to
    /// the board.
    ///
    /// A relocation clears the start cell and then fills the end cell, so
    /// it renders twice.
    #[instrument(skip(self, out))]
    pub fn apply<O: Render>(&mut self, action: Move, out: &mut O) -> Result<(), SessionError> {
        if self.outcome.is_over() {
            return Err(MoveError::GameOver.into());
        }
        if action.marker() != self.current_marker() {
            return Err(MoveError::WrongMarker(action.marker()).into());
        }
        contracts::check_move(&self.board, &action)?;

        match action {
            Move::Place { marker, position } => {
                self.set(position, Cell::Occupied(marker), out)?;
            }
            Move::Relocate { marker, from, to } => {
                self.set(from, Cell::Empty, out)?;
                self.set(to, Cell::Occupied(marker), out)?;
            }
        }
        debug!(%action, "Move applied");
        Ok(())
    }

    /// Validates and places the current marker on cell `number` (1-9).
    pub fn place<O: Render>(&mut self, number: i64, out: &mut O) -> Result<Position, SessionError> {
        let position = contracts::validate_placement(&self.board, number)?;
        let marker = self.current_marker();
        self.apply(Move::Place { marker, position }, out)?;
        Ok(position)
    }

    /// Validates and moves one of the current seat's markers from cell
    /// `start` to cell `end`. The board is untouched on failure.
    pub fn relocate<O: Render>(
        &mut self,
        start: i64,
        end: i64,
        out: &mut O,
    ) -> Result<Move, SessionError> {
        let action = contracts::validate_relocation(
            &self.board,
            &self.markers,
            self.turn.seat(),
            start,
            end,
        )?;
        self.apply(action, out)?;
        Ok(action)
    }

    /// Lets the computer choose and place its marker.
    #[instrument(skip(self, out))]
    pub fn computer_move<O: Render>(&mut self, out: &mut O) -> Result<Decision, SessionError> {
        let decision = self
            .strategy
            .decide(&self.board, &self.markers, self.turn.turns_counter())
            .ok_or(MoveError::GameOver)?;
        let marker = self.current_marker();
        self.apply(
            Move::Place {
                marker,
                position: decision.position(),
            },
            out,
        )?;
        Ok(decision)
    }

    /// Evaluates the board and, if the game goes on, passes the turn.
    ///
    /// A win is credited to the seat that just moved.
    #[instrument(skip(self))]
    pub fn end_turn(&mut self) -> Outcome {
        let outcome = rules::evaluate(&self.board, &self.markers);
        self.outcome = outcome;
        match outcome {
            Outcome::Ongoing => self.turn.advance(),
            Outcome::Win(marker) => {
                let seat = self.turn.seat();
                self.winner = Some(seat);
                info!(?seat, %marker, turns = self.turn.turns_counter(), "Game won");
            }
            Outcome::Draw => {
                info!(turns = self.turn.turns_counter(), "Game drawn");
            }
        }
        outcome
    }

    /// Plays one turn, asking `io` for the human's decisions, and reports
    /// the result.
    #[instrument(skip(self, io), fields(turn = self.turn.turns_counter(), seat = ?self.turn.seat()))]
    pub fn play_turn<IO: Prompt + Render>(&mut self, io: &mut IO) -> Result<Outcome, SessionError> {
        if self.outcome.is_over() {
            return Err(MoveError::GameOver.into());
        }

        if self.is_computer_turn() {
            io.message("\nComputer's move: ")?;
            self.computer_move(io)?;
        } else {
            self.human_move(io)?;
        }

        let mover = self.turn.seat();
        let outcome = self.end_turn();
        if let Some(banner) = outcome_banner(&outcome, mover) {
            io.message(&format!("\n{}\n", banner))?;
        }
        Ok(outcome)
    }

    /// Plays turns until the game ends.
    #[instrument(skip(self, io))]
    pub fn run<IO: Prompt + Render>(&mut self, io: &mut IO) -> Result<GameSummary, SessionError> {
        info!(config = ?self.config, markers = ?self.markers, "Game started");
        while !self.play_turn(io)?.is_over() {}
        Ok(self.summary())
    }

    /// Snapshot of the game for reporting.
    pub fn summary(&self) -> GameSummary {
        GameSummary {
            config: self.config,
            board: self.board.clone(),
            markers: self.markers,
            outcome: self.outcome,
            winner: self.winner,
            turns: self.turn.turns_counter(),
        }
    }

    fn human_move<IO: Prompt + Render>(&mut self, io: &mut IO) -> Result<(), SessionError> {
        let seat = self.turn.seat();

        if *self.config.both_markers() {
            io.message(&format!("\nPlayer {} to play.", seat.number()))?;
            let marker = io.choose_marker("Do you want to play as X or O for this move?")?;
            self.choose_marker(marker);
        }

        let marker = self.current_marker();
        let relocating = self.can_relocate()
            && io.choose_option(
                "Do you want to move a marker (Y) or place a new marker (N) this turn?",
                ["y", "n"],
            )?;

        let action = if relocating {
            let board = &self.board;
            let markers = &self.markers;
            let from = io.choose_position("Which marker would you like to move? 1-9:", |n| {
                contracts::validate_relocation_start(board, markers, seat, n)
            })?;
            let to = io.choose_position("Where would you like to move the marker to? 1-9:", |n| {
                contracts::validate_relocation_end(board, n)
            })?;
            Move::Relocate { marker, from, to }
        } else {
            let board = &self.board;
            let question = format!(
                "\nPlayer {} ({}) to play. Where would you like to place your marker?",
                seat.number(),
                marker
            );
            let position =
                io.choose_position(&question, |n| contracts::validate_placement(board, n))?;
            Move::Place { marker, position }
        };

        self.apply(action, io)
    }

    fn set<O: Render>(&mut self, pos: Position, cell: Cell, out: &mut O) -> Result<(), ConsoleError> {
        self.board.set(pos, cell);
        out.render(&self.board)
    }
}

fn ask_unless_given<IO: Prompt>(
    io: &mut IO,
    given: Option<bool>,
    question: &str,
) -> Result<bool, ConsoleError> {
    match given {
        Some(answer) => Ok(answer),
        None => io.choose_option(question, ["y", "n"]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records every rendered board.
    #[derive(Default)]
    struct Recorder {
        boards: Vec<Board>,
    }

    impl Render for Recorder {
        fn render(&mut self, board: &Board) -> Result<(), ConsoleError> {
            self.boards.push(board.clone());
            Ok(())
        }

        fn render_key(&mut self) -> Result<(), ConsoleError> {
            Ok(())
        }

        fn message(&mut self, _text: &str) -> Result<(), ConsoleError> {
            Ok(())
        }
    }

    fn session(config: GameConfig) -> GameSession {
        GameSession::new(config, Markers::new(Marker::X), ComputerStrategy::seeded(3))
    }

    #[test]
    fn test_place_renders_once_and_end_turn_advances() {
        let mut game = session(GameConfig::default());
        let mut out = Recorder::default();

        game.place(5, &mut out).unwrap();
        assert_eq!(out.boards.len(), 1);
        assert_eq!(game.board().get(Position::Center), Cell::Occupied(Marker::X));

        assert_eq!(game.end_turn(), Outcome::Ongoing);
        assert_eq!(game.turn().seat(), Seat::Second);
        assert_eq!(game.turn().turns_counter(), 2);
        assert_eq!(game.current_marker(), Marker::O);
    }

    #[test]
    fn test_invalid_placement_leaves_board_alone() {
        let mut game = session(GameConfig::default());
        let mut out = Recorder::default();

        assert!(matches!(
            game.place(0, &mut out),
            Err(SessionError::Move(MoveError::OutOfRange(0)))
        ));
        game.place(1, &mut out).unwrap();
        game.end_turn();
        assert!(matches!(
            game.place(1, &mut out),
            Err(SessionError::Move(MoveError::Occupied(Position::TopLeft)))
        ));
        assert_eq!(out.boards.len(), 1);
    }

    #[test]
    fn test_relocation_clears_then_fills_with_two_renders() {
        let mut game = session(GameConfig::new(false, false, true));
        let mut out = Recorder::default();
        game.place(1, &mut out).unwrap();
        game.end_turn();
        game.place(5, &mut out).unwrap();
        game.end_turn();

        assert!(game.can_relocate());
        game.relocate(1, 9, &mut out).unwrap();

        assert_eq!(out.boards.len(), 4);
        assert!(out.boards[2].is_empty(Position::TopLeft));
        assert!(out.boards[2].is_empty(Position::BottomRight));
        assert_eq!(out.boards[3].get(Position::BottomRight), Cell::Occupied(Marker::X));
    }

    #[test]
    fn test_relocating_opponent_marker_refused() {
        let mut game = session(GameConfig::new(false, false, true));
        let mut out = Recorder::default();
        game.place(1, &mut out).unwrap();
        game.end_turn();
        game.place(5, &mut out).unwrap();
        game.end_turn();

        let before = game.board().clone();
        assert!(matches!(
            game.relocate(5, 9, &mut out),
            Err(SessionError::Move(MoveError::NotOwned { number: 5, .. }))
        ));
        assert_eq!(game.board(), &before);
        assert_eq!(out.boards.len(), 2);
    }

    #[test]
    fn test_can_relocate_needs_variant_and_own_marker() {
        let mut plain = session(GameConfig::default());
        let mut out = Recorder::default();
        plain.place(1, &mut out).unwrap();
        assert!(!plain.can_relocate());

        let mut moving = session(GameConfig::new(false, false, true));
        assert!(!moving.can_relocate());
        moving.place(1, &mut out).unwrap();
        moving.end_turn();
        // O has nothing on the board yet.
        assert!(!moving.can_relocate());
        moving.place(5, &mut out).unwrap();
        moving.end_turn();
        assert!(moving.can_relocate());
    }

    #[test]
    fn test_computer_plays_only_the_second_seat() {
        let mut game = session(GameConfig::new(true, false, false));
        let mut out = Recorder::default();
        assert!(!game.is_computer_turn());
        game.place(1, &mut out).unwrap();
        game.end_turn();
        assert!(game.is_computer_turn());

        let humans = session(GameConfig::new(false, false, false));
        assert!(!humans.is_computer_turn());
    }

    #[test]
    fn test_choose_marker_forces_complement() {
        let mut game = session(GameConfig::new(false, true, false));
        game.choose_marker(Marker::O);
        assert_eq!(game.markers().in_order(), [Marker::O, Marker::X]);
    }

    #[test]
    fn test_computer_answers_centre_opening_with_corner() {
        let mut game = session(GameConfig::new(true, false, false));
        let mut out = Recorder::default();
        game.place(5, &mut out).unwrap();
        game.end_turn();

        assert!(game.is_computer_turn());
        let decision = game.computer_move(&mut out).unwrap();
        assert!(Position::CORNERS.contains(&decision.position()));
        assert_eq!(game.board().get(decision.position()), Cell::Occupied(Marker::O));
    }

    #[test]
    fn test_win_credited_to_mover_and_game_closed() {
        let mut game = session(GameConfig::default());
        let mut out = Recorder::default();
        for number in [1, 4, 2, 5] {
            game.place(number, &mut out).unwrap();
            assert_eq!(game.end_turn(), Outcome::Ongoing);
        }
        game.place(3, &mut out).unwrap();
        assert_eq!(game.end_turn(), Outcome::Win(Marker::X));

        let summary = game.summary();
        assert_eq!(summary.winner(), &Some(Seat::First));
        assert_eq!(*summary.turns(), 5);
        assert!(matches!(
            game.place(9, &mut out),
            Err(SessionError::Move(MoveError::GameOver))
        ));
    }

    #[test]
    fn test_apply_rejects_other_seats_marker() {
        let mut game = session(GameConfig::default());
        let mut out = Recorder::default();
        let action = Move::Place {
            marker: Marker::O,
            position: Position::Center,
        };
        assert!(matches!(
            game.apply(action, &mut out),
            Err(SessionError::Move(MoveError::WrongMarker(Marker::O)))
        ));
    }
}
