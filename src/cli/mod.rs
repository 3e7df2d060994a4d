//! CLI argument definitions and parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(name = "velo-league", about = "Weekly Velocidrone league standings")]
pub struct Cli {
    /// Path to a league config file (or set `VELO_LEAGUE_CONFIG`).
    #[clap(long, short, global = true)]
    pub config: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scrape every configured leaderboard and print the weekly standings.
    ///
    /// Each source gets its own result card; a source that fails to scrape
    /// is shown as "Error" and contributes no points.
    Standings {
        /// Output the standings as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Register a new pilot in the league roster.
    Register {
        /// Pilot name exactly as it appears on the Velocidrone leaderboard.
        name: String,
    },

    /// List the registered pilots, one per line.
    Roster,

    /// Print the league rules.
    Rules,
}
