use chrono::{DateTime, Utc};
use game_types::{PlayerProfile, ProfileMap, SessionOutcome, SessionSummary};
use indexmap::IndexMap;
use tracing::{info, warn};

/// Folds finished sessions into player profiles. Never touches storage.
pub struct ProfileAggregator;

impl ProfileAggregator {
    /// Return the profile for `name`, inserting a zeroed one if missing.
    pub fn create_or_get<'a>(profiles: &'a mut ProfileMap, name: &str) -> &'a mut PlayerProfile {
        if !profiles.contains_key(name) {
            info!("Creating new profile for {}", name);
        }
        profiles.entry(name.to_string()).or_default()
    }

    /// Apply one finished session to a profile, stamped with the current time.
    pub fn record_result(
        profile: &PlayerProfile,
        outcome: SessionOutcome,
        score: u32,
        category: &str,
    ) -> PlayerProfile {
        Self::record_result_at(profile, outcome, score, category, Utc::now())
    }

    /// Like [`ProfileAggregator::record_result`] with an explicit timestamp.
    /// An in-progress outcome is not a result and leaves the profile as is.
    pub fn record_result_at(
        profile: &PlayerProfile,
        outcome: SessionOutcome,
        score: u32,
        category: &str,
        now: DateTime<Utc>,
    ) -> PlayerProfile {
        let mut updated = profile.clone();
        match outcome {
            SessionOutcome::InProgress => {
                warn!("Ignoring result for a session that has not finished");
                return updated;
            }
            SessionOutcome::Won => {
                updated.games_won += 1;
                updated.current_streak += 1;
                updated.highest_streak = updated.highest_streak.max(updated.current_streak);
            }
            SessionOutcome::Lost => {
                updated.games_lost += 1;
                updated.current_streak = 0;
            }
        }

        updated.games_played += 1;
        updated.total_score += u64::from(score);
        updated.best_score = updated.best_score.max(score);
        *updated
            .category_counts
            .entry(category.to_string())
            .or_insert(0) += 1;
        updated.favorite_category = Self::favorite_category(&updated.category_counts);
        updated.last_played = Some(now.to_rfc3339());
        updated
    }

    pub fn record_session(profile: &PlayerProfile, summary: &SessionSummary) -> PlayerProfile {
        Self::record_result(profile, summary.outcome, summary.score, &summary.requested_category)
    }

    /// Most played category; ties go to the one played first.
    pub fn favorite_category(counts: &IndexMap<String, u32>) -> Option<String> {
        let mut favorite: Option<(&String, u32)> = None;
        for (category, &count) in counts {
            if favorite.is_none_or(|(_, best)| count > best) {
                favorite = Some((category, count));
            }
        }
        favorite.map(|(category, _)| category.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_or_get() {
        let mut profiles = ProfileMap::new();
        ProfileAggregator::create_or_get(&mut profiles, "alice").games_played = 3;

        let existing = ProfileAggregator::create_or_get(&mut profiles, "alice");
        assert_eq!(existing.games_played, 3);

        // Names are case-sensitive.
        let other = ProfileAggregator::create_or_get(&mut profiles, "Alice");
        assert_eq!(*other, PlayerProfile::default());
        assert_eq!(profiles.len(), 2);
    }

    #[test]
    fn test_scores_accumulate() {
        let fresh = PlayerProfile::new();
        let once = ProfileAggregator::record_result(&fresh, SessionOutcome::Won, 100, "animals");
        let twice = ProfileAggregator::record_result(&once, SessionOutcome::Won, 50, "animals");

        assert_eq!(twice.total_score, 150);
        assert_eq!(twice.best_score, 100);
        assert_eq!(twice.games_played, 2);
        assert!(twice.last_played.is_some());
        // Input profile is not modified.
        assert_eq!(fresh, PlayerProfile::new());
    }

    #[test]
    fn test_streaks() {
        let mut profile = PlayerProfile::new();
        for outcome in [
            SessionOutcome::Won,
            SessionOutcome::Won,
            SessionOutcome::Won,
            SessionOutcome::Lost,
            SessionOutcome::Won,
        ] {
            profile = ProfileAggregator::record_result(&profile, outcome, 10, "food");
        }

        assert_eq!(profile.current_streak, 1);
        assert_eq!(profile.highest_streak, 3);
        assert_eq!(profile.games_won, 4);
        assert_eq!(profile.games_lost, 1);
        assert_eq!(profile.games_played, profile.games_won + profile.games_lost);
    }

    #[test]
    fn test_favorite_category_tie_goes_to_first_played() {
        let mut profile = PlayerProfile::new();
        for category in ["space", "food", "food", "space"] {
            profile = ProfileAggregator::record_result(&profile, SessionOutcome::Lost, 0, category);
        }
        assert_eq!(profile.favorite_category.as_deref(), Some("space"));

        profile = ProfileAggregator::record_result(&profile, SessionOutcome::Lost, 0, "food");
        assert_eq!(profile.favorite_category.as_deref(), Some("food"));
    }

    #[test]
    fn test_in_progress_is_ignored() {
        let profile = PlayerProfile::new();
        let updated = ProfileAggregator::record_result(&profile, SessionOutcome::InProgress, 40, "food");
        assert_eq!(updated, profile);
    }

    #[test]
    fn test_last_played_uses_given_time() {
        let now = DateTime::parse_from_rfc3339("2024-05-01T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let profile =
            ProfileAggregator::record_result_at(&PlayerProfile::new(), SessionOutcome::Won, 5, "space", now);
        assert_eq!(profile.last_played.as_deref(), Some("2024-05-01T12:00:00+00:00"));
    }

    #[test]
    fn test_favorite_of_empty_counts() {
        assert_eq!(ProfileAggregator::favorite_category(&IndexMap::new()), None);
    }
}
