//! Command-line interface for noughts_crosses.

use clap::Parser;
use clap::builder::BoolishValueParser;
use noughts_crosses::Marker;

/// Noughts and crosses in the terminal, with an optional computer opponent
///
/// Any setup question not answered by a flag is asked when the game starts.
#[derive(Parser, Debug)]
#[command(name = "noughts_crosses")]
#[command(about = "Noughts and crosses in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Play against the computer (yes/no)
    #[arg(long, value_parser = BoolishValueParser::new())]
    pub computer: Option<bool>,

    /// Let each player pick X or O on every turn (yes/no)
    #[arg(long, value_parser = BoolishValueParser::new())]
    pub both_markers: Option<bool>,

    /// Allow moving an already placed marker instead of placing a new one (yes/no)
    #[arg(long, value_parser = BoolishValueParser::new())]
    pub move_markers: Option<bool>,

    /// Marker that plays first (x or o)
    #[arg(long)]
    pub first: Option<Marker>,

    /// Seed for the computer's random choices, for replayable games
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print a JSON summary of the finished game
    #[arg(long)]
    pub summary_json: bool,
}
