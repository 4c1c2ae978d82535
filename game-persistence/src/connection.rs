use crate::JsonProfileStore;
use std::path::Path;
use tracing::info;

pub const DEFAULT_PROFILES_PATH: &str = "hangman_profiles.json";

pub fn open_profile_store(path: &Path) -> JsonProfileStore {
    info!("Using profile store at {}", path.display());
    JsonProfileStore::new(path)
}
