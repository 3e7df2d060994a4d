//! League rule text display.

use crate::config::LeagueConfig;
use crate::error::Result;
use crate::storage::read_rules;

pub fn handle_rules(config: &LeagueConfig) -> Result<()> {
    for line in read_rules(&config.rules_path) {
        println!("{line}");
    }
    Ok(())
}
