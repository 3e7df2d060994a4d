//! Data types for Velocidrone leaderboard results.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Scenario/track label used when a source could not be scraped.
pub const ERROR_LABEL: &str = "Error";

/// A registered pilot name.
///
/// Identity is exact string equality against the roster; names are trimmed
/// when read from storage or from the page, but never case-folded.
///
/// # Examples
///
/// ```rust
/// use velo_league::Player;
///
/// let player = Player::new("Ana");
/// assert_eq!(player.as_str(), "Ana");
/// assert_ne!(player, Player::new("ana"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player(pub String);

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// URL of one external leaderboard page (one track/scenario).
///
/// Sources are configured as an ordered list; the order determines
/// presentation order and first-seen tie-breaks, never scoring weight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardSource(pub String);

impl LeaderboardSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LeaderboardSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One leaderboard row kept after roster filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RaceResult {
    /// 1-based position within the source's top-50, as shown on the page.
    /// Filtering never renumbers this.
    pub position: u32,
    /// Lap time exactly as displayed by the source. The format is not
    /// standardized across tracks, so it is kept as an opaque string.
    pub time: String,
    pub player: Player,
}

/// A source's rows restricted to roster members, order-preserving.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilteredResultSet {
    pub scenario: String,
    pub track: String,
    pub entries: Vec<RaceResult>,
}

impl FilteredResultSet {
    /// Sentinel for a source that could not be scraped. Contributes no
    /// entries and no points; downstream aggregation proceeds normally.
    pub fn error() -> Self {
        Self {
            scenario: ERROR_LABEL.to_string(),
            track: ERROR_LABEL.to_string(),
            entries: Vec::new(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.scenario == ERROR_LABEL && self.track == ERROR_LABEL && self.entries.is_empty()
    }

    /// Display title for the source's result card.
    pub fn title(&self) -> String {
        format!("{} - {}", self.scenario, self.track)
    }
}
