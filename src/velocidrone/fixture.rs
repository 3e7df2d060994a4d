//! Replay session over a recorded DOM snapshot.

use std::path::Path;
use std::time::Duration;

use scraper::{Html, Selector};

use crate::error::{LeagueError, Result};
use crate::velocidrone::browser::BrowserSession;

/// Deterministic [`BrowserSession`] that serves a pre-recorded snapshot of
/// a rendered leaderboard page. No browser, no network: the full scrape
/// pipeline can run against saved pages, and failure paths (a snapshot
/// whose rows never rendered) behave like a live content-wait timeout.
#[derive(Debug, Clone)]
pub struct FixtureSession {
    html: String,
    last_url: Option<String>,
}

impl FixtureSession {
    pub fn from_html(html: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            last_url: None,
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        Ok(Self::from_html(std::fs::read_to_string(path)?))
    }

    /// URL of the last `navigate` call, if any.
    pub fn last_url(&self) -> Option<&str> {
        self.last_url.as_deref()
    }
}

impl BrowserSession for FixtureSession {
    fn navigate(&mut self, url: &str, _timeout: Duration) -> Result<()> {
        self.last_url = Some(url.to_string());
        Ok(())
    }

    fn activate_view(&mut self, _label: &str) -> Result<()> {
        // Snapshots are recorded post-activation; nothing to click.
        Ok(())
    }

    fn wait_for_rows(&mut self, selector: &str, _timeout: Duration) -> Result<()> {
        let sel = Selector::parse(selector).map_err(|e| LeagueError::Extraction {
            what: format!("selector {selector:?}: {e}"),
        })?;
        let document = Html::parse_document(&self.html);
        if document.select(&sel).next().is_some() {
            Ok(())
        } else {
            Err(LeagueError::ContentTimeout {
                selector: selector.to_string(),
                source: anyhow::anyhow!("snapshot contains no matching rows"),
            })
        }
    }

    fn page_html(&mut self) -> Result<String> {
        Ok(self.html.clone())
    }
}
