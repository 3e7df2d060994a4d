//! Per-source scrape orchestration.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::config::LeagueConfig;
use crate::error::Result;
use crate::velocidrone::browser::BrowserSession;
use crate::velocidrone::extract::{extract_results, ROW_SELECTOR};
use crate::velocidrone::types::{FilteredResultSet, LeaderboardSource, Player};

/// Runs one browser-session + extraction cycle for one leaderboard URL.
///
/// `scrape` never fails: every error local to a source (launch, navigation,
/// content wait, extraction) is caught here and becomes the `"Error"`
/// sentinel, so one broken leaderboard can never abort the others or the
/// aggregation downstream.
pub struct SourceScraper<'a> {
    config: &'a LeagueConfig,
}

impl<'a> SourceScraper<'a> {
    pub fn new(config: &'a LeagueConfig) -> Self {
        Self { config }
    }

    /// Scrape one source with a fresh session from `open`.
    ///
    /// The session lives only within this call; it is dropped, and its
    /// resources released, on success and failure alike.
    pub fn scrape<B, F>(
        &self,
        open: F,
        source: &LeaderboardSource,
        roster: &HashSet<Player>,
    ) -> FilteredResultSet
    where
        B: BrowserSession,
        F: FnOnce() -> Result<B>,
    {
        match self.try_scrape(open, source, roster) {
            Ok(set) => {
                debug!(source = %source, entries = set.entries.len(), "scraped leaderboard");
                set
            }
            Err(error) => {
                warn!(source = %source, %error, "scrape failed, recording empty result");
                FilteredResultSet::error()
            }
        }
    }

    fn try_scrape<B, F>(
        &self,
        open: F,
        source: &LeaderboardSource,
        roster: &HashSet<Player>,
    ) -> Result<FilteredResultSet>
    where
        B: BrowserSession,
        F: FnOnce() -> Result<B>,
    {
        let mut session = open()?;
        session.navigate(source.as_str(), self.config.navigation_timeout())?;
        session.activate_view(&self.config.view_label)?;
        session.wait_for_rows(ROW_SELECTOR, self.config.content_timeout())?;
        let html = session.page_html()?;
        extract_results(&html, roster, self.config.top_n)
    }
}
