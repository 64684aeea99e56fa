//! Command-line interface.

use clap::Parser;
use std::path::PathBuf;

/// Kavia TicTacToe - two players, one terminal
#[derive(Parser, Debug)]
#[command(name = "kavia_tictactoe")]
#[command(about = "Play tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML settings file. Missing file means defaults.
    #[arg(short, long, default_value = "kavia_tictactoe.toml")]
    pub config: PathBuf,

    /// Where to write logs (the terminal belongs to the game)
    #[arg(long, default_value = "kavia_tictactoe.log")]
    pub log_file: PathBuf,

    /// Hide the key help footer
    #[arg(long)]
    pub no_hints: bool,
}
