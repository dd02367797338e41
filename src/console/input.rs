//! Parsing of typed answers.
//!
//! Each parser handles one line as typed. Surrounding whitespace is
//! ignored and word answers are case-insensitive.

use super::error::InputError;
use crate::games::noughts_crosses::Marker;

/// Reads a whole number.
pub fn parse_number(line: &str) -> Result<i64, InputError> {
    let trimmed = line.trim();
    trimmed.parse().map_err(|_| InputError::NotANumber {
        input: trimmed.to_string(),
    })
}

/// Reads one of two answers; `true` for the first.
pub fn parse_choice(line: &str, options: [&str; 2]) -> Result<bool, InputError> {
    let answer = line.trim().to_lowercase();
    if answer == options[0].to_lowercase() {
        Ok(true)
    } else if answer == options[1].to_lowercase() {
        Ok(false)
    } else {
        Err(InputError::NotAChoice {
            input: answer,
            first: options[0].to_uppercase(),
            second: options[1].to_uppercase(),
        })
    }
}

/// Reads `x` or `o`.
pub fn parse_marker(line: &str) -> Result<Marker, InputError> {
    let answer = line.trim();
    answer.parse().map_err(|_| InputError::NotAChoice {
        input: answer.to_lowercase(),
        first: Marker::X.to_string(),
        second: Marker::O.to_string(),
    })
}
