//! Weekly standings computation and presentation.
//!
//! The full request cycle lives here: read the roster fresh, scrape every
//! configured leaderboard, aggregate points, build the ranking and print
//! it. Everything is recomputed per invocation; nothing is cached.

use std::collections::HashSet;

use chrono::{Datelike, Local};
use serde::Serialize;
use tracing::{error, info};

use crate::config::LeagueConfig;
use crate::error::Result;
use crate::scoring::{aggregate, build_ranking, RankedPlayer};
use crate::storage::{read_annual_ranking, RosterStore};
use crate::velocidrone::browser::ChromeSession;
use crate::velocidrone::scrape::SourceScraper;
use crate::velocidrone::types::{FilteredResultSet, Player, RaceResult};

/// Configuration for one standings run.
#[derive(Debug)]
pub struct StandingsParams {
    pub as_json: bool,
    pub config: LeagueConfig,
}

/// One source's labeled results, ready for display.
#[derive(Debug, Serialize)]
pub struct TrackReport {
    /// "{scenario} - {track}", or "Error - Error" for a failed source.
    pub name: String,
    pub results: Vec<RaceResult>,
}

/// Full payload of one weekly standings computation.
#[derive(Debug, Serialize)]
pub struct StandingsReport {
    pub week: u32,
    pub tracks: Vec<TrackReport>,
    pub weekly_ranking: Vec<RankedPlayer>,
    pub annual_ranking: Vec<String>,
}

/// Scrape all sources and print the weekly standings.
pub async fn handle_standings(params: StandingsParams) -> Result<()> {
    let report = build_report(&params.config).await?;

    if params.as_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

/// Run the whole pipeline: roster, scrapes, aggregation, ranking.
pub async fn build_report(config: &LeagueConfig) -> Result<StandingsReport> {
    let roster: HashSet<Player> = RosterStore::new(&config.roster_path)
        .list()?
        .into_iter()
        .collect();
    info!(pilots = roster.len(), sources = config.sources.len(), "computing weekly standings");

    let sets = scrape_all_sources(config, &roster).await;

    let points = aggregate(&sets, &config.points);
    let weekly_ranking = build_ranking(&points);
    let annual_ranking = read_annual_ranking(&config.annual_path);

    let tracks = sets
        .into_iter()
        .map(|set| TrackReport {
            name: set.title(),
            results: set.entries,
        })
        .collect();

    Ok(StandingsReport {
        week: current_week(),
        tracks,
        weekly_ranking,
        annual_ranking,
    })
}

/// Scrape every configured source, one isolated browser session each.
///
/// Sources run concurrently on the blocking pool, but results are joined
/// in configured source order, so accumulation order (and with it the
/// first-seen tie-break) never depends on which scrape finishes first.
/// A panicked scrape task degrades to the error sentinel like any other
/// per-source failure.
async fn scrape_all_sources(
    config: &LeagueConfig,
    roster: &HashSet<Player>,
) -> Vec<FilteredResultSet> {
    let mut handles = Vec::with_capacity(config.sources.len());
    for source in &config.sources {
        let config = config.clone();
        let source = source.clone();
        let roster = roster.clone();
        handles.push(tokio::task::spawn_blocking(move || {
            SourceScraper::new(&config).scrape(ChromeSession::launch, &source, &roster)
        }));
    }

    let mut sets = Vec::with_capacity(handles.len());
    for (handle, source) in handles.into_iter().zip(&config.sources) {
        match handle.await {
            Ok(set) => sets.push(set),
            Err(join_error) => {
                error!(source = %source, %join_error, "scrape task aborted");
                sets.push(FilteredResultSet::error());
            }
        }
    }
    sets
}

fn print_report(report: &StandingsReport) {
    println!("VELOCIDRONE LEAGUE - WEEK {}", report.week);

    for track in &report.tracks {
        println!("\n{}", track.name);
        for (i, result) in track.results.iter().enumerate() {
            println!("{}\t{}\t{}", i + 1, result.time, result.player);
        }
    }

    println!("\nWeekly ranking");
    for entry in &report.weekly_ranking {
        println!("{}. {} - {} pts", entry.position, entry.player, entry.points);
    }

    if !report.annual_ranking.is_empty() {
        println!("\nAnnual ranking");
        for line in &report.annual_ranking {
            println!("{line}");
        }
    }
}

/// ISO week of the year, shown in the standings header.
fn current_week() -> u32 {
    Local::now().iso_week().week()
}
