use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::config::settings::{DEFAULT_INITIAL_RATING, DEFAULT_K_FACTOR, DEFAULT_SCALE};

#[derive(Parser, Debug)]
#[command(author, version, about = "A command line Elo rating tool")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Create a new Elo rating table
    Create {
        /// Name for the new table
        name: String,
        /// Location of the table database files (defaults to the current directory)
        #[arg(long = "p")]
        path: Option<PathBuf>,
    },
    /// Display an Elo rating table
    Show {
        /// Name of the table to display
        table: String,
        /// Location of the table database files (defaults to the current directory)
        #[arg(long = "p")]
        path: Option<PathBuf>,
    },
    /// Log a new game result into a table
    Log {
        /// Name of the table to update
        table: String,
        /// Game result in the form winner-loser
        game: String,
        /// Scale factor for the expected-score distribution
        #[arg(long = "s", default_value_t = DEFAULT_SCALE)]
        scale: f64,
        /// K factor for rating updates
        #[arg(long = "k", default_value_t = DEFAULT_K_FACTOR)]
        k_factor: f64,
        /// Initial rating for new players
        #[arg(long = "i", default_value_t = DEFAULT_INITIAL_RATING)]
        initial: f64,
        /// Location of the table database files (defaults to the current directory)
        #[arg(long = "p")]
        path: Option<PathBuf>,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
