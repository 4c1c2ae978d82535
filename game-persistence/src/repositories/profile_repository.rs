use game_core::ProfileAggregator;
use game_types::{GameError, PlayerProfile, ProfileMap};
use tracing::{info, warn};

use crate::ProfileStore;

/// In-memory profile map backed by a [`ProfileStore`].
///
/// Store failures are logged and swallowed here: the map in memory stays
/// authoritative for the rest of the process.
pub struct ProfileRepository<S: ProfileStore> {
    store: S,
    profiles: ProfileMap,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LeaderboardEntry {
    pub name: String,
    pub profile: PlayerProfile,
    pub rank: u32,
}

impl<S: ProfileStore> ProfileRepository<S> {
    pub fn new(store: S) -> Self {
        let profiles = store.load();
        Self { store, profiles }
    }

    pub fn profiles(&self) -> &ProfileMap {
        &self.profiles
    }

    /// Mutable access for the aggregator; call [`ProfileRepository::persist`]
    /// afterwards.
    pub fn profiles_mut(&mut self) -> &mut ProfileMap {
        &mut self.profiles
    }

    pub fn find(&self, name: &str) -> Option<&PlayerProfile> {
        self.profiles.get(name)
    }

    /// Player names in creation order.
    pub fn player_names(&self) -> Vec<&str> {
        self.profiles.keys().map(String::as_str).collect()
    }

    /// Make `name` the active player, creating a profile on first use.
    pub fn select_player(&mut self, name: &str) -> Result<PlayerProfile, GameError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(GameError::InvalidPlayerName);
        }

        let is_new = !self.profiles.contains_key(name);
        let profile = ProfileAggregator::create_or_get(&mut self.profiles, name).clone();
        if is_new {
            self.persist();
        }
        Ok(profile)
    }

    /// Write the full map. Returns whether it reached the store.
    pub fn persist(&mut self) -> bool {
        match self.store.save(&self.profiles) {
            Ok(()) => true,
            Err(e) => {
                warn!("Failed to save player profiles: {:#}", e);
                false
            }
        }
    }

    /// Drop a player and write the remaining map, so pending in-memory
    /// changes for other players land too.
    pub fn delete_player(&mut self, name: &str) -> bool {
        if self.profiles.shift_remove(name).is_none() {
            return false;
        }
        info!("Deleted profile for {}", name);
        self.persist();
        true
    }

    /// Players ordered by best score, then total score. Ties keep creation
    /// order.
    pub fn leaderboard(&self, limit: usize) -> Vec<LeaderboardEntry> {
        let mut ranked: Vec<(&String, &PlayerProfile)> = self.profiles.iter().collect();
        ranked.sort_by(|(_, a), (_, b)| {
            b.best_score
                .cmp(&a.best_score)
                .then(b.total_score.cmp(&a.total_score))
        });

        ranked
            .into_iter()
            .take(limit)
            .enumerate()
            .map(|(index, (name, profile))| LeaderboardEntry {
                name: name.clone(),
                profile: profile.clone(),
                rank: (index + 1) as u32,
            })
            .collect()
    }

    /// 1 + number of players with a strictly higher best score.
    pub fn player_rank(&self, name: &str) -> Option<u32> {
        let profile = self.profiles.get(name)?;
        let above = self
            .profiles
            .values()
            .filter(|other| other.best_score > profile.best_score)
            .count();
        Some(above as u32 + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryProfileStore;
    use game_types::SessionOutcome;

    fn profile_with_scores(best: u32, total: u64) -> PlayerProfile {
        PlayerProfile {
            best_score: best,
            total_score: total,
            ..PlayerProfile::default()
        }
    }

    fn setup_repo() -> ProfileRepository<MemoryProfileStore> {
        let mut profiles = ProfileMap::new();
        profiles.insert("One".to_string(), profile_with_scores(100, 300));
        profiles.insert("Two".to_string(), profile_with_scores(200, 250));
        profiles.insert("Three".to_string(), profile_with_scores(100, 500));
        ProfileRepository::new(MemoryProfileStore::with_profiles(profiles))
    }

    #[test]
    fn test_select_player_creates_and_persists() {
        let mut repo = ProfileRepository::new(MemoryProfileStore::default());
        let profile = repo.select_player("  Zed ").unwrap();
        assert_eq!(profile, PlayerProfile::default());
        assert_eq!(repo.player_names(), vec!["Zed"]);

        assert_eq!(
            repo.select_player("   ").unwrap_err(),
            GameError::InvalidPlayerName
        );
    }

    #[test]
    fn test_select_existing_player_unchanged() {
        let mut repo = setup_repo();
        let profile = repo.select_player("Two").unwrap();
        assert_eq!(profile.best_score, 200);
        assert_eq!(repo.profiles().len(), 3);
    }

    #[test]
    fn test_record_and_persist() {
        let mut repo = ProfileRepository::new(MemoryProfileStore::default());
        repo.select_player("Ann").unwrap();

        let profile = ProfileAggregator::create_or_get(repo.profiles_mut(), "Ann");
        *profile = ProfileAggregator::record_result(profile, SessionOutcome::Won, 420, "space");
        assert!(repo.persist());
        assert_eq!(repo.find("Ann").unwrap().best_score, 420);
    }

    #[test]
    fn test_failed_save_keeps_memory_state() {
        let mut repo = ProfileRepository::new(MemoryProfileStore::read_only(ProfileMap::new()));
        repo.select_player("Ann").unwrap();
        assert!(!repo.persist());
        assert!(repo.find("Ann").is_some());
    }

    #[test]
    fn test_delete_player() {
        let mut repo = setup_repo();
        assert!(repo.delete_player("Two"));
        assert!(!repo.delete_player("Two"));
        assert!(!repo.delete_player("one"));
        assert_eq!(repo.player_names(), vec!["One", "Three"]);
    }

    #[test]
    fn test_delete_with_failing_store_still_removes_in_memory() {
        let mut profiles = ProfileMap::new();
        profiles.insert("Ann".to_string(), PlayerProfile::new());
        let mut repo = ProfileRepository::new(MemoryProfileStore::read_only(profiles));

        assert!(repo.delete_player("Ann"));
        assert!(repo.find("Ann").is_none());
    }

    #[test]
    fn test_leaderboard() {
        let repo = setup_repo();
        let board = repo.leaderboard(10);

        let names: Vec<&str> = board.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Two", "Three", "One"]);
        assert_eq!(board[0].rank, 1);
        assert_eq!(board[2].rank, 3);

        assert_eq!(repo.leaderboard(1).len(), 1);
    }

    #[test]
    fn test_player_rank() {
        let repo = setup_repo();
        assert_eq!(repo.player_rank("Two"), Some(1));
        assert_eq!(repo.player_rank("One"), Some(2));
        assert_eq!(repo.player_rank("Three"), Some(2));
        assert_eq!(repo.player_rank("Nobody"), None);
    }
}
