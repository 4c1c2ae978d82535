use anyhow::{Context, Result, bail};
use game_types::ProfileMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Durable home of the profile map.
///
/// `load` never fails: a missing or unreadable store yields an empty map so
/// a broken file can never stop a round from being played.
pub trait ProfileStore {
    fn load(&self) -> ProfileMap;

    /// Replace the stored map with `profiles`.
    fn save(&mut self, profiles: &ProfileMap) -> Result<()>;

    /// Remove one player from what is stored. Returns whether the player
    /// existed. Holders of an in-memory map should save that map instead.
    fn delete(&mut self, name: &str) -> Result<bool>;
}

/// Profiles kept as one pretty-printed JSON object keyed by player name.
#[derive(Debug, Clone)]
pub struct JsonProfileStore {
    path: PathBuf,
}

impl JsonProfileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn try_load(&self) -> Result<Option<ProfileMap>> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e).with_context(|| format!("reading {}", self.path.display()));
            }
        };
        let profiles = serde_json::from_str(&contents)
            .with_context(|| format!("parsing {}", self.path.display()))?;
        Ok(Some(profiles))
    }
}

impl ProfileStore for JsonProfileStore {
    fn load(&self) -> ProfileMap {
        match self.try_load() {
            Ok(Some(profiles)) => {
                info!(
                    "Loaded {} player profile(s) from {}",
                    profiles.len(),
                    self.path.display()
                );
                profiles
            }
            Ok(None) => {
                info!("No player profiles at {}, starting fresh", self.path.display());
                ProfileMap::new()
            }
            Err(e) => {
                warn!("Player profiles unusable, starting fresh: {:#}", e);
                ProfileMap::new()
            }
        }
    }

    fn save(&mut self, profiles: &ProfileMap) -> Result<()> {
        let json = serde_json::to_string_pretty(profiles).context("serializing profiles")?;
        std::fs::write(&self.path, json)
            .with_context(|| format!("writing {}", self.path.display()))?;
        debug!("Saved {} profile(s) to {}", profiles.len(), self.path.display());
        Ok(())
    }

    fn delete(&mut self, name: &str) -> Result<bool> {
        let Some(mut profiles) = self.try_load()? else {
            return Ok(false);
        };
        if profiles.shift_remove(name).is_none() {
            return Ok(false);
        }
        self.save(&profiles)?;
        Ok(true)
    }
}

/// In-process store for tests and throwaway sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryProfileStore {
    profiles: ProfileMap,
    read_only: bool,
}

impl MemoryProfileStore {
    pub fn with_profiles(profiles: ProfileMap) -> Self {
        Self {
            profiles,
            read_only: false,
        }
    }

    /// A store whose writes always fail.
    pub fn read_only(profiles: ProfileMap) -> Self {
        Self {
            profiles,
            read_only: true,
        }
    }
}

impl ProfileStore for MemoryProfileStore {
    fn load(&self) -> ProfileMap {
        self.profiles.clone()
    }

    fn save(&mut self, profiles: &ProfileMap) -> Result<()> {
        if self.read_only {
            bail!("profile store is read-only");
        }
        self.profiles = profiles.clone();
        Ok(())
    }

    fn delete(&mut self, name: &str) -> Result<bool> {
        if self.read_only {
            bail!("profile store is read-only");
        }
        Ok(self.profiles.shift_remove(name).is_some())
    }
}
