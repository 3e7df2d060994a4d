//! Velocidrone Weekly League CLI Library
//!
//! Scrapes weekly racing-leaderboard standings from the Velocidrone timing
//! website and aggregates them into a points-based league ranking.
//!
//! ## Features
//!
//! - **Leaderboard Scraping**: Drives a headless browser through the
//!   client-side view switch the site requires before results render
//! - **Roster Filtering**: Keeps only registered pilots, preserving each
//!   row's true on-page position
//! - **Points Aggregation**: Fixed position-to-points table summed across
//!   every configured leaderboard
//! - **Failure Isolation**: A broken source degrades to an empty "Error"
//!   card; the remaining sources and the ranking proceed normally
//! - **Snapshot Replay**: The whole pipeline runs against recorded page
//!   snapshots, without a browser or network
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use velo_league::{commands::standings::build_report, LeagueConfig};
//!
//! # async fn example() -> velo_league::Result<()> {
//! let config = LeagueConfig::default();
//! let report = build_report(&config).await?;
//! for entry in &report.weekly_ranking {
//!     println!("{}. {} - {} pts", entry.position, entry.player, entry.points);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Point the CLI at a league config file to avoid passing it per command:
//! ```bash
//! export VELO_LEAGUE_CONFIG=/etc/velo-league/league.json
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod scoring;
pub mod storage;
pub mod velocidrone;

// Re-export commonly used types
pub use config::LeagueConfig;
pub use error::{LeagueError, Result};
pub use scoring::{PointsTable, RankedPlayer, WeeklyPoints};
pub use velocidrone::types::{FilteredResultSet, LeaderboardSource, Player, RaceResult};

pub const CONFIG_ENV_VAR: &str = "VELO_LEAGUE_CONFIG";
