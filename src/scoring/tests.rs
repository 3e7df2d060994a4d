//! Unit tests for points assignment and ranking

use super::*;
use crate::velocidrone::types::RaceResult;

fn result(position: u32, time: &str, player: &str) -> RaceResult {
    RaceResult {
        position,
        time: time.to_string(),
        player: Player::new(player),
    }
}

fn set(scenario: &str, track: &str, entries: Vec<RaceResult>) -> FilteredResultSet {
    FilteredResultSet {
        scenario: scenario.to_string(),
        track: track.to_string(),
        entries,
    }
}

#[test]
fn test_points_table_defaults() {
    let table = PointsTable::default();
    assert_eq!(table.points_for(0), 10);
    assert_eq!(table.points_for(1), 8);
    assert_eq!(table.points_for(2), 6);
    assert_eq!(table.points_for(3), 4);
    assert_eq!(table.points_for(4), 2);
}

#[test]
fn test_points_table_tail_is_flat() {
    let table = PointsTable::default();
    for index in 5..200 {
        assert_eq!(table.points_for(index), 1);
    }
}

#[test]
fn test_points_table_custom() {
    let table = PointsTable::new(vec![3, 2], 0);
    assert_eq!(table.points_for(0), 3);
    assert_eq!(table.points_for(1), 2);
    assert_eq!(table.points_for(2), 0);
    assert_eq!(table.points_for(50), 0);
}

#[test]
fn test_aggregate_single_source() {
    let table = PointsTable::default();
    let sets = vec![set(
        "Scenario",
        "Track",
        vec![
            result(1, "51.20", "Ana"),
            result(4, "55.01", "Luis"),
            result(9, "59.87", "Marta"),
        ],
    )];

    let totals = aggregate(&sets, &table);
    assert_eq!(totals.get(&Player::new("Ana")), Some(10));
    assert_eq!(totals.get(&Player::new("Luis")), Some(8));
    assert_eq!(totals.get(&Player::new("Marta")), Some(6));
}

#[test]
fn test_aggregate_scores_by_filtered_index_not_page_position() {
    // A pilot 30th on the page but first among registered pilots
    // takes first-place points.
    let table = PointsTable::default();
    let sets = vec![set("S", "T", vec![result(30, "1:02.44", "Ana")])];

    let totals = aggregate(&sets, &table);
    assert_eq!(totals.get(&Player::new("Ana")), Some(10));
}

#[test]
fn test_aggregate_sums_across_sources() {
    let table = PointsTable::default();
    let sets = vec![
        set(
            "A",
            "T1",
            vec![result(1, "50.0", "Ana"), result(2, "51.0", "Luis")],
        ),
        set(
            "B",
            "T2",
            vec![result(1, "40.0", "Luis"), result(2, "41.0", "Ana")],
        ),
    ];

    let totals = aggregate(&sets, &table);
    assert_eq!(totals.get(&Player::new("Ana")), Some(18));
    assert_eq!(totals.get(&Player::new("Luis")), Some(18));
}

#[test]
fn test_aggregate_totals_are_order_independent() {
    let table = PointsTable::default();
    let a = set(
        "A",
        "T1",
        vec![result(1, "50.0", "Ana"), result(2, "51.0", "Luis")],
    );
    let b = set(
        "B",
        "T2",
        vec![
            result(1, "40.0", "Luis"),
            result(2, "41.0", "Ana"),
            result(3, "42.0", "Marta"),
        ],
    );

    let forward = aggregate(&[a.clone(), b.clone()], &table);
    let backward = aggregate(&[b, a], &table);

    for name in ["Ana", "Luis", "Marta"] {
        let player = Player::new(name);
        assert_eq!(forward.get(&player), backward.get(&player));
    }
}

#[test]
fn test_aggregate_skips_error_sentinel() {
    let table = PointsTable::default();
    let sets = vec![
        FilteredResultSet::error(),
        set("B", "T2", vec![result(1, "40.0", "Ana")]),
    ];

    let totals = aggregate(&sets, &table);
    assert_eq!(totals.len(), 1);
    assert_eq!(totals.get(&Player::new("Ana")), Some(10));
}

#[test]
fn test_weekly_points_keys_are_only_scoring_players() {
    let table = PointsTable::default();
    let sets = vec![set("A", "T", vec![result(1, "50.0", "Ana")])];

    let totals = aggregate(&sets, &table);
    assert_eq!(totals.get(&Player::new("Luis")), None);
    assert_eq!(totals.len(), 1);
}

#[test]
fn test_build_ranking_sorted_descending() {
    let mut points = WeeklyPoints::default();
    points.add(&Player::new("Ana"), 8);
    points.add(&Player::new("Luis"), 18);
    points.add(&Player::new("Marta"), 12);

    let ranking = build_ranking(&points);
    let names: Vec<&str> = ranking.iter().map(|r| r.player.as_str()).collect();
    assert_eq!(names, vec!["Luis", "Marta", "Ana"]);
    assert_eq!(ranking[0].position, 1);
    assert_eq!(ranking[1].position, 2);
    assert_eq!(ranking[2].position, 3);
}

#[test]
fn test_build_ranking_ties_keep_first_seen_order() {
    let mut points = WeeklyPoints::default();
    points.add(&Player::new("Zoe"), 10);
    points.add(&Player::new("Ana"), 10);
    points.add(&Player::new("Luis"), 10);

    let ranking = build_ranking(&points);
    let names: Vec<&str> = ranking.iter().map(|r| r.player.as_str()).collect();
    // Not alphabetical: insertion order wins on equal points.
    assert_eq!(names, vec!["Zoe", "Ana", "Luis"]);
}

#[test]
fn test_build_ranking_no_duplicates() {
    let table = PointsTable::default();
    let sets = vec![
        set("A", "T1", vec![result(1, "50.0", "Ana")]),
        set("B", "T2", vec![result(1, "40.0", "Ana")]),
    ];

    let ranking = build_ranking(&aggregate(&sets, &table));
    assert_eq!(ranking.len(), 1);
    assert_eq!(ranking[0].points, 20);
}

#[test]
fn test_build_ranking_empty() {
    let points = WeeklyPoints::default();
    assert!(build_ranking(&points).is_empty());
    assert!(points.is_empty());
}
