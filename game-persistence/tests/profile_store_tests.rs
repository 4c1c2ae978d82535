use game_core::{GameSession, ProfileAggregator};
use game_persistence::repositories::ProfileRepository;
use game_persistence::{JsonProfileStore, ProfileStore};
use game_types::{Difficulty, SessionOutcome};

fn play_round(word: &str, letters: &[&str]) -> GameSession {
    let mut session = GameSession::start("Alice", "food", Difficulty::Medium, word).unwrap();
    for letter in letters {
        session.guess(letter).unwrap();
    }
    session
}

#[test]
fn test_profiles_survive_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hangman_profiles.json");

    let session = play_round("pie", &["p", "i", "e"]);
    let summary = session.summary().unwrap();
    {
        let mut repo = ProfileRepository::new(JsonProfileStore::new(&path));
        repo.select_player("Alice").unwrap();
        let profile = ProfileAggregator::create_or_get(repo.profiles_mut(), "Alice");
        *profile = ProfileAggregator::record_session(profile, &summary);
        assert!(repo.persist());
    }

    let repo = ProfileRepository::new(JsonProfileStore::new(&path));
    let profile = repo.find("Alice").unwrap();
    assert_eq!(profile.games_played, 1);
    assert_eq!(profile.games_won, 1);
    assert_eq!(profile.best_score, summary.score);
    assert_eq!(profile.favorite_category.as_deref(), Some("food"));
    assert!(profile.last_played.is_some());
}

#[test]
fn test_lost_round_persisted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("profiles.json");

    let session = play_round("pie", &["p", "a", "b", "c", "d", "f", "g"]);
    assert_eq!(session.outcome(), SessionOutcome::Lost);
    let summary = session.summary().unwrap();

    let mut repo = ProfileRepository::new(JsonProfileStore::new(&path));
    let profile = ProfileAggregator::create_or_get(repo.profiles_mut(), "Alice");
    *profile = ProfileAggregator::record_session(profile, &summary);
    repo.persist();

    let reloaded = JsonProfileStore::new(&path).load();
    let profile = &reloaded["Alice"];
    assert_eq!(profile.games_lost, 1);
    assert_eq!(profile.total_score, 20);
    assert_eq!(profile.current_streak, 0);
}

#[test]
fn test_corrupt_store_does_not_block_play() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("profiles.json");
    std::fs::write(&path, "[1, 2, 3]").unwrap();

    let mut repo = ProfileRepository::new(JsonProfileStore::new(&path));
    assert!(repo.profiles().is_empty());
    repo.select_player("Guest").unwrap();
    assert_eq!(JsonProfileStore::new(&path).load().len(), 1);
}

#[test]
fn test_delete_writes_memory_state_not_stale_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("profiles.json");

    let mut repo = ProfileRepository::new(JsonProfileStore::new(&path));
    repo.select_player("Alice").unwrap();
    repo.select_player("Bob").unwrap();

    // Alice's result stays in memory only, as after a failed save.
    let summary = play_round("pie", &["p", "i", "e"]).summary().unwrap();
    let profile = ProfileAggregator::create_or_get(repo.profiles_mut(), "Alice");
    *profile = ProfileAggregator::record_session(profile, &summary);

    assert!(repo.delete_player("Bob"));

    let reloaded = JsonProfileStore::new(&path).load();
    assert_eq!(reloaded.keys().collect::<Vec<_>>(), vec!["Alice"]);
    assert_eq!(reloaded["Alice"].games_won, 1);
}
