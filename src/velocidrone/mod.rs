//! Velocidrone leaderboard access layer.
//!
//! The site renders leaderboard rows client-side, only after a view switch,
//! so results are read through a browser session rather than plain HTTP:
//! load the page, activate the race-mode tab if present, wait for rows to
//! appear, then hand the rendered document to the extractor.
//!
//! [`browser::BrowserSession`] is the seam between the pipeline and the
//! browser: [`browser::ChromeSession`] drives real headless Chrome, while
//! [`fixture::FixtureSession`] replays a recorded snapshot for
//! deterministic runs without a browser or network.

pub mod browser;
pub mod extract;
pub mod fixture;
pub mod scrape;
pub mod types;

pub use browser::{BrowserSession, ChromeSession};
pub use fixture::FixtureSession;
pub use scrape::SourceScraper;
pub use types::{FilteredResultSet, LeaderboardSource, Player, RaceResult};
