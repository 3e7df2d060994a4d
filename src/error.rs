//! Error types for the Velocidrone league CLI

use thiserror::Error;

pub type Result<T> = std::result::Result<T, LeagueError>;

#[derive(Error, Debug)]
pub enum LeagueError {
    #[error("failed to launch headless browser")]
    Launch(#[source] anyhow::Error),

    #[error("navigation to {url} did not complete in time")]
    NavigationTimeout {
        url: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("no result rows matched {selector:?} before the wait expired")]
    ContentTimeout {
        selector: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("expected page element missing: {what}")]
    Extraction { what: String },

    #[error("browser session error")]
    Session(#[source] anyhow::Error),

    #[error("invalid player name {name:?}")]
    InvalidPlayerName { name: String },

    #[error("invalid configuration: {message}")]
    Config { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),
}
