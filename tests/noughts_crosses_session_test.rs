//! Whole games played through the console with scripted input.

use noughts_crosses::{
    Board, ComputerStrategy, Console, ConsoleError, GameSession, GameSummary, Marker, Outcome,
    Seat, SessionError, SetupAnswers,
};
use std::io::Cursor;

type ScriptedConsole = Console<Cursor<Vec<u8>>, Vec<u8>>;

fn console(input: &str) -> ScriptedConsole {
    Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

/// Runs setup and a full game, returning the summary and everything printed.
fn play(input: &str, seed: u64) -> (GameSummary, String) {
    let mut io = console(input);
    let strategy = ComputerStrategy::seeded(seed);
    let mut session =
        GameSession::setup(&mut io, SetupAnswers::default(), strategy).expect("setup succeeds");
    let summary = session.run(&mut io).expect("game finishes");
    let output = String::from_utf8(io.into_writer()).expect("utf-8 output");
    (summary, output)
}

#[test]
fn test_two_humans_top_row_win() {
    let (summary, output) = play("n\nn\nn\nx\n1\n4\n2\n5\n3\n", 0);

    assert_eq!(*summary.outcome(), Outcome::Win(Marker::X));
    assert_eq!(*summary.winner(), Some(Seat::First));
    assert_eq!(*summary.turns(), 5);
    assert!(output.contains("Do you want to play against the computer? Y/N: "));
    assert!(output.contains("  1  |  2  |  3"));
    assert!(output.contains(" Player 1(X) has won!"));
}

#[test]
fn test_bad_answers_are_asked_again() {
    let (summary, output) = play("maybe\nn\nn\nn\nz\no\nten\n10\n1\n1\n4\n2\n5\n3\n", 0);

    assert!(output.contains("Please input either Y or N."));
    assert!(output.contains("Please input either X or O."));
    assert!(output.contains("That is not a valid location! Must be a number between 1-9.\n"));
    assert!(output.contains(
        "That is not a valid location! Must be a number between 1-9 and an unoccupied position."
    ));
    assert!(output.contains("That location is occupied, please choose a new location."));
    assert_eq!(*summary.outcome(), Outcome::Win(Marker::O));
    assert!(output.contains(" Player 1(O) has won!"));
}

#[test]
fn test_game_against_computer_ends_in_draw() {
    // Human X: 1, 2, 7, 6, then whichever of 8/9 the computer left.
    let (summary, output) = play("y\nn\nn\nx\n1\n2\n7\n6\n8\n9\n", 7);

    assert!(output.contains("Computer's move:"));
    assert_eq!(*summary.outcome(), Outcome::Draw);
    assert_eq!(*summary.winner(), None);
    assert_eq!(*summary.turns(), 9);
    assert!(summary.board().is_full());
    assert!(output.contains(" The game is a draw!"));

    // The last two cells depend on where the computer's fallback landed.
    let expected: Board = "XXO OOX X..".parse().unwrap();
    assert_eq!(summary.board().cells()[..7], expected.cells()[..7]);
}

#[test]
fn test_either_marker_win_goes_to_mover() {
    // Player 2 picks X and completes the top row begun by player 1.
    let (summary, output) = play("n\ny\nn\nx\n1\nx\n2\no\n5\nx\n3\n", 0);

    assert!(output.contains("Do you want to play as X or O for this move? X/O: "));
    assert_eq!(*summary.outcome(), Outcome::Win(Marker::X));
    assert_eq!(*summary.winner(), Some(Seat::Second));
    assert!(output.contains(" Player 2(X) has won!"));
}

#[test]
fn test_either_marker_first_seat_win() {
    let (summary, _) = play("n\ny\nn\no\n1\nx\n4\no\n2\nx\n5\no\n3\n", 0);

    assert_eq!(*summary.outcome(), Outcome::Win(Marker::O));
    assert_eq!(*summary.winner(), Some(Seat::First));
    assert_eq!(summary.markers().of(Seat::First), Marker::O);
}

#[test]
fn test_moving_markers() {
    let input = concat!(
        "n\nn\ny\nx\n",       // setup
        "1\n",                // X places on 1, nothing to move yet
        "5\n",                // O places on 5
        "y\n5\n1\n5\n2\n",   // X moves 1 -> 2; 5 refused as start and as end
        "n\n4\n",             // O places on 4
        "n\n1\n",             // X places on 1
        "n\n6\n",             // O completes the middle row
    );
    let (summary, output) = play(input, 0);

    assert!(output.contains("You're playing as X. Location 5 does not hold one of your markers."));
    assert!(output.contains("You must choose an empty position."));
    assert_eq!(*summary.outcome(), Outcome::Win(Marker::O));
    assert_eq!(*summary.winner(), Some(Seat::Second));
    assert_eq!(*summary.turns(), 6);
    assert_eq!(*summary.board(), "XX. OOO ...".parse::<Board>().unwrap());
}

#[test]
fn test_answers_given_up_front_are_not_asked() {
    let mut io = console("1\n4\n2\n5\n3\n");
    let answers = SetupAnswers::new(Some(false), Some(false), Some(false), Some(Marker::O));
    let mut session = GameSession::setup(&mut io, answers, ComputerStrategy::seeded(0)).unwrap();
    let summary = session.run(&mut io).unwrap();

    let output = String::from_utf8(io.into_writer()).unwrap();
    assert!(!output.contains("Do you want to play against the computer?"));
    assert_eq!(*summary.outcome(), Outcome::Win(Marker::O));
}

#[test]
fn test_closed_input_ends_game_with_error() {
    let mut io = console("n\nn\nn\nx\n1\n");
    let strategy = ComputerStrategy::seeded(0);
    let mut session = GameSession::setup(&mut io, SetupAnswers::default(), strategy).unwrap();
    let result = session.run(&mut io);

    assert!(matches!(result, Err(SessionError::Console(ConsoleError::Closed))));
    assert!(session.board().contains(Marker::X));
    assert_eq!(session.board().empty_positions().len(), 8);
}

#[test]
fn test_summary_serialises_to_json() {
    let (summary, _) = play("n\nn\nn\nx\n1\n4\n2\n5\n3\n", 0);

    let json = serde_json::to_string(&summary).unwrap();
    let restored: GameSummary = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, summary);
}
