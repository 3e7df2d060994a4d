//! Browser session control for dynamically-rendered leaderboard pages.

use std::sync::Arc;
use std::time::Duration;

use headless_chrome::{Browser, LaunchOptions, Tab};

use crate::error::{LeagueError, Result};

/// One isolated browser session for one scrape.
///
/// The protocol order is the correctness-critical part: navigate the base
/// document, activate the results view (a no-op when the page already shows
/// it), then block until at least one result row exists before reading the
/// document.
pub trait BrowserSession {
    /// Load `url`, bounded by `timeout`.
    fn navigate(&mut self, url: &str, timeout: Duration) -> Result<()>;

    /// Activate the first UI element whose visible text contains `label`.
    /// Zero matches is not an error; the default view may already be right.
    fn activate_view(&mut self, label: &str) -> Result<()>;

    /// Block until an element matches `selector`, bounded by `timeout`.
    fn wait_for_rows(&mut self, selector: &str, timeout: Duration) -> Result<()>;

    /// The rendered document.
    fn page_html(&mut self) -> Result<String>;
}

/// Live session over headless Chrome.
///
/// The session exclusively owns its browser process. Dropping the session
/// tears the process down on every exit path, including error propagation
/// and task cancellation, so no OS-level process leaks.
pub struct ChromeSession {
    // Held for its Drop: the chrome process dies with the Browser value.
    _browser: Browser,
    tab: Arc<Tab>,
}

impl ChromeSession {
    /// Launch a fresh headless browser and open one tab.
    ///
    /// Sandboxing is disabled to match containerized deployments.
    pub fn launch() -> Result<Self> {
        let options = LaunchOptions::default_builder()
            .headless(true)
            .sandbox(false)
            .build()
            .map_err(|e| LeagueError::Launch(anyhow::anyhow!("{e}")))?;
        let browser = Browser::new(options).map_err(LeagueError::Launch)?;
        let tab = browser.new_tab().map_err(LeagueError::Launch)?;
        Ok(Self {
            _browser: browser,
            tab,
        })
    }
}

impl BrowserSession for ChromeSession {
    fn navigate(&mut self, url: &str, timeout: Duration) -> Result<()> {
        self.tab.set_default_timeout(timeout);
        self.tab
            .navigate_to(url)
            .and_then(|tab| tab.wait_until_navigated())
            .map_err(|source| LeagueError::NavigationTimeout {
                url: url.to_string(),
                source,
            })?;
        Ok(())
    }

    fn activate_view(&mut self, label: &str) -> Result<()> {
        // Click the first anchor containing the label, client-side, exactly
        // as a user switching tabs would. Zero matches leaves the page as is.
        let script = format!(
            "(() => {{ \
                const label = {}; \
                const tabs = Array.from(document.querySelectorAll('a')) \
                    .filter(el => el.textContent.includes(label)); \
                if (tabs.length > 0) tabs[0].click(); \
                return tabs.length; \
            }})()",
            serde_json::to_string(label)?
        );
        self.tab
            .evaluate(&script, false)
            .map_err(LeagueError::Session)?;
        Ok(())
    }

    fn wait_for_rows(&mut self, selector: &str, timeout: Duration) -> Result<()> {
        self.tab
            .wait_for_element_with_custom_timeout(selector, timeout)
            .map_err(|source| LeagueError::ContentTimeout {
                selector: selector.to_string(),
                source,
            })?;
        Ok(())
    }

    fn page_html(&mut self) -> Result<String> {
        self.tab.get_content().map_err(LeagueError::Session)
    }
}
