//! Structured result extraction from a rendered leaderboard page.

use std::collections::HashSet;

use scraper::{ElementRef, Html, Selector};

use crate::error::{LeagueError, Result};
use crate::velocidrone::types::{FilteredResultSet, Player, RaceResult};


/// Scenario label location on the rendered page.
pub const SCENARIO_SELECTOR: &str = "h2.text-center";
/// Track label location on the rendered page.
pub const TRACK_SELECTOR: &str = "div.container h3";
/// One leaderboard row.
pub const ROW_SELECTOR: &str = "tbody tr";

// Cell layout of a leaderboard row: rank, time, pilot name, ...
const TIME_CELL: usize = 1;
const PLAYER_CELL: usize = 2;

/// Read scenario, track and roster-filtered results out of a rendered page.
///
/// Rows are taken in document order, at most `top_n` of them. A row missing
/// its time or name cell is skipped silently. A kept row records its
/// original 1-based position; filtering never renumbers, so later scoring
/// can see the pilot's true finishing position. Each pilot is kept at most
/// once per source (first match wins).
///
/// Fails only when the scenario or track label is absent, which marks the
/// whole page as structurally unusable.
pub fn extract_results(
    html: &str,
    roster: &HashSet<Player>,
    top_n: usize,
) -> Result<FilteredResultSet> {
    let document = Html::parse_document(html);

    let scenario = first_text(&document, SCENARIO_SELECTOR)?;
    let track = first_text(&document, TRACK_SELECTOR)?;

    let rows = parse_selector(ROW_SELECTOR)?;
    let cells = parse_selector("td")?;

    let mut entries = Vec::new();
    let mut seen: HashSet<Player> = HashSet::new();
    for (i, row) in document.select(&rows).take(top_n).enumerate() {
        let row_cells: Vec<ElementRef> = row.select(&cells).collect();
        let Some(time) = row_cells.get(TIME_CELL).map(cell_text) else {
            continue;
        };
        let Some(name) = row_cells.get(PLAYER_CELL).map(cell_text) else {
            continue;
        };
        let player = Player::new(name);
        if !roster.contains(&player) {
            continue;
        }
        if !seen.insert(player.clone()) {
            continue;
        }
        entries.push(RaceResult {
            position: (i + 1) as u32,
            time,
            player,
        });
    }

    Ok(FilteredResultSet {
        scenario,
        track,
        entries,
    })
}

fn parse_selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| LeagueError::Extraction {
        what: format!("selector {css:?}: {e}"),
    })
}

fn first_text(document: &Html, css: &str) -> Result<String> {
    let sel = parse_selector(css)?;
    document
        .select(&sel)
        .next()
        .map(|el| cell_text(&el))
        .ok_or_else(|| LeagueError::Extraction {
            what: css.to_string(),
        })
}

fn cell_text(el: &ElementRef) -> String {
    el.text().collect::<String>().trim().to_string()
}
