//! Console error types.

use derive_more::{Display, Error};

/// Input that could not be read as the expected kind of answer.
///
/// Always recovered by re-prompting.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum InputError {
    /// Expected a whole number.
    #[display("That is not a valid location! Must be a number between 1-9.")]
    NotANumber {
        /// The trimmed input.
        input: String,
    },

    /// Expected one of two answers.
    #[display("Please input either {} or {}.", first, second)]
    NotAChoice {
        /// The trimmed, lower-cased input.
        input: String,
        /// First accepted answer, as shown to the player.
        first: String,
        /// Second accepted answer, as shown to the player.
        second: String,
    },
}

/// Failure talking to the terminal. Ends the game.
#[derive(Debug, Display, Error)]
pub enum ConsoleError {
    /// The input stream ended mid-game.
    #[display("Input closed before the game finished")]
    Closed,

    /// Reading or writing failed.
    #[display("Console I/O failed: {}", _0)]
    Io(std::io::Error),
}

impl From<std::io::Error> for ConsoleError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}
