//! Integration tests for registration against a real roster file

use tempfile::tempdir;
use velo_league::{storage::RosterStore, LeagueError, Player};

#[test]
fn test_registration_round_trip() {
    let dir = tempdir().unwrap();
    let store = RosterStore::new(dir.path().join("players.txt"));

    assert!(store.add("Ana").unwrap());
    assert!(store.add("Luis").unwrap());
    assert!(!store.add("Ana").unwrap());

    let names: Vec<String> = store
        .list()
        .unwrap()
        .into_iter()
        .map(|p| p.to_string())
        .collect();
    assert_eq!(names, vec!["Ana", "Luis"]);
}

#[test]
fn test_registration_rejects_whitespace_only_names() {
    let dir = tempdir().unwrap();
    let store = RosterStore::new(dir.path().join("players.txt"));

    assert!(matches!(
        store.add("\t  \n"),
        Err(LeagueError::InvalidPlayerName { .. })
    ));
    assert!(store.list().unwrap().is_empty());
}

#[test]
fn test_roster_reflects_latest_registrations() {
    // The roster is read fresh per cycle: a registration between two reads
    // is visible to the second one.
    let dir = tempdir().unwrap();
    let path = dir.path().join("players.txt");
    let store = RosterStore::new(&path);

    store.add("Ana").unwrap();
    assert_eq!(store.list().unwrap(), vec![Player::new("Ana")]);

    store.add("Luis").unwrap();
    assert_eq!(
        store.list().unwrap(),
        vec![Player::new("Ana"), Player::new("Luis")]
    );
}

#[test]
fn test_names_keep_exact_spelling() {
    let dir = tempdir().unwrap();
    let store = RosterStore::new(dir.path().join("players.txt"));

    store.add("AnaFPV").unwrap();
    // Different case is a different pilot.
    assert!(store.add("anafpv").unwrap());
    assert_eq!(store.list().unwrap().len(), 2);
}
