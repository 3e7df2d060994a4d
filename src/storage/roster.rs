//! File-backed pilot roster.

use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::PathBuf;

use crate::error::{LeagueError, Result};
use crate::velocidrone::types::Player;

/// The registered-pilot roster, one name per line.
///
/// Reads are fresh on every call so a new registration is visible to the
/// next standings computation without restarts.
#[derive(Debug, Clone)]
pub struct RosterStore {
    path: PathBuf,
}

impl RosterStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Registered pilots, in file order. Lines are trimmed; blank lines are
    /// dropped. A missing file is an empty roster, not an error.
    pub fn list(&self) -> Result<Vec<Player>> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => Ok(raw
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(Player::new)
                .collect()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Append `name` to the roster if not already present.
    ///
    /// Returns whether the name was newly added. The name is trimmed first;
    /// an empty result is rejected.
    pub fn add(&self, name: &str) -> Result<bool> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(LeagueError::InvalidPlayerName {
                name: name.to_string(),
            });
        }

        let existing = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => String::new(),
            Err(e) => return Err(e.into()),
        };
        if existing.lines().any(|line| line.trim() == trimmed) {
            return Ok(false);
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        // Guard against a file without a trailing newline; appending there
        // would merge two names into one.
        if !existing.is_empty() && !existing.ends_with('\n') {
            writeln!(file)?;
        }
        writeln!(file, "{trimmed}")?;
        Ok(true)
    }
}
