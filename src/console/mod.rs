//! Text console: the input and render collaborators of a game session.
//!
//! The session talks to the outside world only through [`Prompt`] and
//! [`Render`]. [`Console`] implements both over any line reader and
//! writer, so tests drive it with in-memory buffers and the binary drives
//! it with stdin and stdout.

mod error;
mod input;
mod render;

pub use error::{ConsoleError, InputError};
pub use input::{parse_choice, parse_marker, parse_number};
pub use render::{draw_board, draw_key, grid, outcome_banner};

use crate::games::noughts_crosses::{Board, Marker, MoveError};
use std::io::{BufRead, Write};
use tracing::{debug, instrument};

/// Shows the board to the players.
pub trait Render {
    /// Draws the board. Called after every board mutation.
    fn render(&mut self, board: &Board) -> Result<(), ConsoleError>;

    /// Draws the position key (cells labelled 1-9).
    fn render_key(&mut self) -> Result<(), ConsoleError>;

    /// Shows a line of text.
    fn message(&mut self, text: &str) -> Result<(), ConsoleError>;
}

/// Asks the players for decisions.
///
/// Every method loops until it has a valid answer. Bad answers are
/// reported to the player and asked again; only a broken or closed
/// stream ends the loop with an error.
pub trait Prompt {
    /// Asks a two-way question; `true` for the first option.
    fn choose_option(&mut self, question: &str, options: [&str; 2]) -> Result<bool, ConsoleError>;

    /// Asks for X or O.
    fn choose_marker(&mut self, question: &str) -> Result<Marker, ConsoleError>;

    /// Asks for a cell number until `validate` accepts it.
    fn choose_position<T, F>(&mut self, question: &str, validate: F) -> Result<T, ConsoleError>
    where
        F: FnMut(i64) -> Result<T, MoveError>;
}

/// Line-based console over a reader and a writer.
#[derive(Debug)]
pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console reading answers from `reader` and drawing to `writer`.
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Consumes the console, returning the writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Shows `prompt` and reads one line.
    fn ask(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(ConsoleError::Closed);
        }
        Ok(line)
    }

    fn complain(&mut self, err: &dyn std::error::Error) -> Result<(), ConsoleError> {
        debug!(%err, "Answer rejected");
        writeln!(self.writer, "{}", err)?;
        Ok(())
    }
}

impl<R: BufRead, W: Write> Prompt for Console<R, W> {
    #[instrument(skip(self))]
    fn choose_option(&mut self, question: &str, options: [&str; 2]) -> Result<bool, ConsoleError> {
        let prompt = format!(
            "{} {}/{}: ",
            question,
            options[0].to_uppercase(),
            options[1].to_uppercase()
        );
        loop {
            let line = self.ask(&prompt)?;
            match parse_choice(&line, options) {
                Ok(answer) => return Ok(answer),
                Err(err) => self.complain(&err)?,
            }
        }
    }

    #[instrument(skip(self))]
    fn choose_marker(&mut self, question: &str) -> Result<Marker, ConsoleError> {
        let prompt = format!("{} {}/{}: ", question, Marker::X, Marker::O);
        loop {
            let line = self.ask(&prompt)?;
            match parse_marker(&line) {
                Ok(marker) => return Ok(marker),
                Err(err) => self.complain(&err)?,
            }
        }
    }

    #[instrument(skip(self, validate))]
    fn choose_position<T, F>(&mut self, question: &str, mut validate: F) -> Result<T, ConsoleError>
    where
        F: FnMut(i64) -> Result<T, MoveError>,
    {
        let prompt = format!("{} ", question);
        loop {
            let line = self.ask(&prompt)?;
            let number = match parse_number(&line) {
                Ok(number) => number,
                Err(err) => {
                    self.complain(&err)?;
                    continue;
                }
            };
            match validate(number) {
                Ok(choice) => return Ok(choice),
                Err(err) => self.complain(&err)?,
            }
        }
    }
}

impl<R: BufRead, W: Write> Render for Console<R, W> {
    fn render(&mut self, board: &Board) -> Result<(), ConsoleError> {
        writeln!(self.writer, "\n{}", draw_board(board))?;
        Ok(())
    }

    fn render_key(&mut self) -> Result<(), ConsoleError> {
        writeln!(self.writer, "\n{}", draw_key())?;
        Ok(())
    }

    fn message(&mut self, text: &str) -> Result<(), ConsoleError> {
        writeln!(self.writer, "{}", text)?;
        Ok(())
    }
}
