//! League configuration.
//!
//! Everything the pipeline entry point needs is carried in one explicit
//! structure instead of module-level constants, so alternate leagues and
//! tests can vary the source list, scoring and timeouts.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::Result;
use crate::scoring::PointsTable;
use crate::velocidrone::types::LeaderboardSource;

/// Configuration for one weekly standings computation.
///
/// Defaults mirror the league's deployment: two Velocidrone leaderboards,
/// the standard points table, a 50-row cutoff and the 30 s / 10 s waits.
/// Any field can be overridden from a JSON config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LeagueConfig {
    /// Ordered leaderboard URLs. Order fixes presentation order and the
    /// first-seen tie-break, not scoring weight.
    pub sources: Vec<LeaderboardSource>,
    pub points: PointsTable,
    /// Visible text of the UI tab that switches the page to race results.
    pub view_label: String,
    /// Rows considered per source before filtering.
    pub top_n: usize,
    pub navigation_timeout_secs: u64,
    pub content_timeout_secs: u64,
    pub roster_path: PathBuf,
    pub rules_path: PathBuf,
    pub annual_path: PathBuf,
}

impl Default for LeagueConfig {
    fn default() -> Self {
        Self {
            sources: vec![
                LeaderboardSource::new("https://www.velocidrone.com/leaderboard/33/1527/All"),
                LeaderboardSource::new("https://www.velocidrone.com/leaderboard/16/1795/All"),
            ],
            points: PointsTable::default(),
            view_label: "Race Mode".to_string(),
            top_n: 50,
            navigation_timeout_secs: 30,
            content_timeout_secs: 10,
            roster_path: PathBuf::from("players.txt"),
            rules_path: PathBuf::from("rules.txt"),
            annual_path: PathBuf::from("annual_ranking.txt"),
        }
    }
}

impl LeagueConfig {
    /// Load a config from a JSON file. Missing fields fall back to the
    /// defaults above.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub fn navigation_timeout(&self) -> Duration {
        Duration::from_secs(self.navigation_timeout_secs)
    }

    pub fn content_timeout(&self) -> Duration {
        Duration::from_secs(self.content_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LeagueConfig::default();
        assert_eq!(config.sources.len(), 2);
        assert_eq!(config.view_label, "Race Mode");
        assert_eq!(config.top_n, 50);
        assert_eq!(config.navigation_timeout(), Duration::from_secs(30));
        assert_eq!(config.content_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_partial_file_overrides_defaults() {
        let json = r#"{
            "sources": ["https://example.com/leaderboard/1"],
            "content_timeout_secs": 5
        }"#;
        let config: LeagueConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.sources.len(), 1);
        assert_eq!(config.sources[0].as_str(), "https://example.com/leaderboard/1");
        assert_eq!(config.content_timeout(), Duration::from_secs(5));
        // Untouched fields keep their defaults.
        assert_eq!(config.top_n, 50);
        assert_eq!(config.points.points_for(0), 10);
    }

    #[test]
    fn test_points_table_from_file() {
        let json = r#"{ "points": { "placings": [5, 3, 1], "tail": 0 } }"#;
        let config: LeagueConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.points.points_for(0), 5);
        assert_eq!(config.points.points_for(2), 1);
        assert_eq!(config.points.points_for(3), 0);
    }
}
