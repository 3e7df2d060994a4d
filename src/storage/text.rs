//! Readers for the rule text and the annual ranking.

use std::path::Path;

/// Rule text, one display line per file line (trailing whitespace dropped,
/// leading whitespace kept: indented lines render as sub-items).
///
/// An unreadable file degrades to a single notice line instead of failing
/// the whole page.
pub fn read_rules(path: &Path) -> Vec<String> {
    match std::fs::read_to_string(path) {
        Ok(raw) => raw.lines().map(|line| line.trim_end().to_string()).collect(),
        Err(_) => vec!["The league rules could not be loaded.".to_string()],
    }
}

/// The externally-maintained annual ranking, trimmed, blanks dropped.
/// A missing or unreadable file reads as empty.
pub fn read_annual_ranking(path: &Path) -> Vec<String> {
    match std::fs::read_to_string(path) {
        Ok(raw) => raw
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect(),
        Err(_) => Vec::new(),
    }
}
