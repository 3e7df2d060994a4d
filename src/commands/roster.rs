//! Roster registration and listing.

use tracing::info;

use crate::config::LeagueConfig;
use crate::error::Result;
use crate::storage::RosterStore;

/// Register a pilot name; prints whether it was newly added.
pub fn handle_register(name: &str, config: &LeagueConfig) -> Result<()> {
    let store = RosterStore::new(&config.roster_path);
    let trimmed = name.trim();
    if store.add(trimmed)? {
        info!(pilot = trimmed, "registered new pilot");
        println!("Registered {trimmed}");
    } else {
        println!("{trimmed} is already registered");
    }
    Ok(())
}

/// Print the registered pilots, one per line.
pub fn handle_roster(config: &LeagueConfig) -> Result<()> {
    for player in RosterStore::new(&config.roster_path).list()? {
        println!("{player}");
    }
    Ok(())
}
