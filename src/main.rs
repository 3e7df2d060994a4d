//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use tracing_subscriber::EnvFilter;
use velo_league::{
    cli::{Cli, Commands},
    commands::{
        resolve_config,
        roster::{handle_register, handle_roster},
        rules::handle_rules,
        standings::{handle_standings, StandingsParams},
    },
    Result,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("velo_league=info")),
        )
        .init();

    let app = Cli::parse();
    let config = resolve_config(app.config)?;

    match app.command {
        Commands::Standings { json } => {
            handle_standings(StandingsParams {
                as_json: json,
                config,
            })
            .await?
        }
        Commands::Register { name } => handle_register(&name, &config)?,
        Commands::Roster => handle_roster(&config)?,
        Commands::Rules => handle_rules(&config)?,
    }

    Ok(())
}
