use std::fs;
use std::path::Path;

use tempfile::TempDir;

use elo_table::config::EloSettings;
use elo_table::database::Table;
use elo_table::errors::TableError;
use elo_table::{handle_create, handle_log, handle_show};

fn table_file(dir: &Path, name: &str) -> std::path::PathBuf {
    dir.join(format!("{}.json", name))
}

#[test]
fn create_log_show_flow() {
    let dir = TempDir::new().unwrap();
    handle_create("office", Some(dir.path())).unwrap();

    let settings = EloSettings::default();
    handle_log("office", "alice-bob", &settings, Some(dir.path())).unwrap();
    handle_log("office", "alice-bob", &settings, Some(dir.path())).unwrap();
    handle_log("office", "carol-alice", &settings, Some(dir.path())).unwrap();

    let table = Table::open(dir.path(), "office").unwrap();
    assert_eq!(table.players().len(), 3);

    let alice = table.get("alice").unwrap();
    assert_eq!((alice.n_played, alice.n_won, alice.n_lost), (3, 2, 1));
    let bob = table.get("bob").unwrap();
    assert_eq!((bob.n_played, bob.n_won, bob.n_lost), (2, 0, 2));
    let carol = table.get("carol").unwrap();
    assert_eq!((carol.n_played, carol.n_won, carol.n_lost), (1, 1, 0));

    // show renders whatever the store holds without mutating it
    handle_show("office", Some(dir.path())).unwrap();
    let after_show = Table::open(dir.path(), "office").unwrap();
    assert_eq!(after_show.players(), table.players());
}

#[test]
fn counters_are_conserved_across_games() {
    let dir = TempDir::new().unwrap();
    handle_create("league", Some(dir.path())).unwrap();

    let settings = EloSettings::default();
    let games = ["alice-bob", "bob-carol", "carol-alice", "alice-bob", "dave-alice"];
    for game in games {
        handle_log("league", game, &settings, Some(dir.path())).unwrap();
    }

    let table = Table::open(dir.path(), "league").unwrap();
    let played: u32 = table.players().iter().map(|p| p.n_played).sum();
    let won: u32 = table.players().iter().map(|p| p.n_won).sum();
    let lost: u32 = table.players().iter().map(|p| p.n_lost).sum();

    assert_eq!(played, 2 * games.len() as u32);
    assert_eq!(won + lost, played);
    for player in table.players() {
        assert!(player.n_won + player.n_lost <= player.n_played);
    }
}

#[test]
fn equal_rating_game_moves_exactly_half_the_k_factor() {
    let dir = TempDir::new().unwrap();
    handle_create("office", Some(dir.path())).unwrap();

    handle_log("office", "alice-bob", &EloSettings::default(), Some(dir.path())).unwrap();

    let table = Table::open(dir.path(), "office").unwrap();
    assert_eq!(table.get("alice").unwrap().rating, 416.0);
    assert_eq!(table.get("bob").unwrap().rating, 384.0);
}

#[test]
fn custom_initial_rating_seeds_new_players() {
    let dir = TempDir::new().unwrap();
    handle_create("office", Some(dir.path())).unwrap();

    let settings = EloSettings::new(400.0, 32.0, 1000.0);
    handle_log("office", "alice-bob", &settings, Some(dir.path())).unwrap();

    let table = Table::open(dir.path(), "office").unwrap();
    assert_eq!(table.get("alice").unwrap().rating, 1016.0);
    assert_eq!(table.get("bob").unwrap().rating, 984.0);
}

#[test]
fn malformed_game_strings_leave_the_table_untouched() {
    let dir = TempDir::new().unwrap();
    handle_create("office", Some(dir.path())).unwrap();
    handle_log("office", "alice-bob", &EloSettings::default(), Some(dir.path())).unwrap();

    let before = fs::read_to_string(table_file(dir.path(), "office")).unwrap();

    for raw in ["alice", "alice-bob-carl", "-bob", "", "alice-alice"] {
        let err = handle_log("office", raw, &EloSettings::default(), Some(dir.path())).unwrap_err();
        assert!(
            matches!(
                err.downcast_ref::<TableError>(),
                Some(TableError::MalformedGameResult(_))
            ),
            "input {raw:?} was not rejected as malformed"
        );
    }

    let after = fs::read_to_string(table_file(dir.path(), "office")).unwrap();
    assert_eq!(before, after);
}

#[test]
fn logging_against_a_missing_table_has_no_side_effects() {
    let dir = TempDir::new().unwrap();

    let err = handle_log("ghost", "alice-bob", &EloSettings::default(), Some(dir.path()))
        .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<TableError>(),
        Some(TableError::TableNotFound(_))
    ));
    assert!(!table_file(dir.path(), "ghost").exists());
}

#[test]
fn showing_a_missing_table_fails() {
    let dir = TempDir::new().unwrap();

    let err = handle_show("ghost", Some(dir.path())).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<TableError>(),
        Some(TableError::TableNotFound(_))
    ));
}

#[test]
fn creating_a_populated_table_twice_fails_without_mutation() {
    let dir = TempDir::new().unwrap();
    handle_create("office", Some(dir.path())).unwrap();
    handle_log("office", "alice-bob", &EloSettings::default(), Some(dir.path())).unwrap();

    let before = fs::read_to_string(table_file(dir.path(), "office")).unwrap();

    let err = handle_create("office", Some(dir.path())).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<TableError>(),
        Some(TableError::TableAlreadyExists(_))
    ));

    let after = fs::read_to_string(table_file(dir.path(), "office")).unwrap();
    assert_eq!(before, after);
}
