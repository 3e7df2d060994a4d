//! Points assignment and weekly ranking.
//!
//! Scoring is a pure transformation: per-source filtered result sets go in,
//! an accumulated points map and a sorted ranking come out. Points are
//! awarded by a player's index within the *filtered* list, so a pilot
//! ranked 9th overall but 1st among registered pilots scores as 1st place.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::velocidrone::types::{FilteredResultSet, Player};

#[cfg(test)]
mod tests;

/// Fixed position-to-points lookup with a flat tail value.
///
/// The lookup is total: every index has a points value. Defaults are the
/// league constants (10, 8, 6, 4, 2, then 1 for everything after).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsTable {
    placings: Vec<u32>,
    tail: u32,
}

impl Default for PointsTable {
    fn default() -> Self {
        Self {
            placings: vec![10, 8, 6, 4, 2],
            tail: 1,
        }
    }
}

impl PointsTable {
    pub fn new(placings: Vec<u32>, tail: u32) -> Self {
        Self { placings, tail }
    }

    /// Points for a zero-based position in a filtered result list.
    pub fn points_for(&self, index: usize) -> u32 {
        self.placings.get(index).copied().unwrap_or(self.tail)
    }
}

/// Accumulated points per player, in first-seen order.
///
/// Insertion order is preserved because the final ranking breaks ties by
/// the order in which players first scored, not alphabetically.
#[derive(Debug, Clone, Default)]
pub struct WeeklyPoints {
    entries: Vec<(Player, u32)>,
    index: HashMap<Player, usize>,
}

impl WeeklyPoints {
    pub fn add(&mut self, player: &Player, points: u32) {
        match self.index.get(player) {
            Some(&i) => self.entries[i].1 += points,
            None => {
                self.index.insert(player.clone(), self.entries.len());
                self.entries.push((player.clone(), points));
            }
        }
    }

    pub fn get(&self, player: &Player) -> Option<u32> {
        self.index.get(player).map(|&i| self.entries[i].1)
    }

    /// Players with their totals, in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&Player, u32)> {
        self.entries.iter().map(|(p, pts)| (p, *pts))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One line of the final weekly ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedPlayer {
    /// 1-based display position, assigned after sorting.
    pub position: u32,
    pub player: Player,
    pub points: u32,
}

/// Sum every result set's contributions into per-player totals.
///
/// Entries are scored by their zero-based index within the filtered list.
/// Summation is commutative, so set order only affects first-seen order.
pub fn aggregate(sets: &[FilteredResultSet], table: &PointsTable) -> WeeklyPoints {
    let mut totals = WeeklyPoints::default();
    for set in sets {
        for (i, entry) in set.entries.iter().enumerate() {
            totals.add(&entry.player, table.points_for(i));
        }
    }
    totals
}

/// Sort accumulated points into the weekly ranking.
///
/// Stable sort by points descending: equal totals keep the relative order
/// in which the players first scored.
pub fn build_ranking(points: &WeeklyPoints) -> Vec<RankedPlayer> {
    let mut rows: Vec<(&Player, u32)> = points.iter().collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1));
    rows.into_iter()
        .enumerate()
        .map(|(i, (player, points))| RankedPlayer {
            position: (i + 1) as u32,
            player: player.clone(),
            points,
        })
        .collect()
}
