//! Command implementations for the Velocidrone league CLI

pub mod roster;
pub mod rules;
pub mod standings;

use std::path::{Path, PathBuf};

use crate::config::LeagueConfig;
use crate::error::Result;
use crate::CONFIG_ENV_VAR;

/// Resolve the league config: explicit path first, then the
/// `VELO_LEAGUE_CONFIG` environment variable, then built-in defaults.
pub fn resolve_config(path: Option<PathBuf>) -> Result<LeagueConfig> {
    if let Some(path) = path {
        return LeagueConfig::load(&path);
    }
    if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
        return LeagueConfig::load(Path::new(&path));
    }
    Ok(LeagueConfig::default())
}
