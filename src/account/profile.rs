//! Profile documents, one JSON file per user

use super::{SignUp, UserId};
use crate::persist::{self, PersistError};
use crate::stats::{PlayerId, PlayerStatistics, StatsStore, StoreError, checked_on_load};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub display_name: String,
    /// RFC 3339 timestamp
    pub created_at: String,
    #[serde(default)]
    pub stats: PlayerStatistics,
}

impl Profile {
    pub(crate) fn new(details: &SignUp) -> Self {
        let first_name = details.first_name.trim().to_string();
        let last_name = details.last_name.trim().to_string();
        Self {
            username: details.username.trim().to_string(),
            email: details.email.trim().to_string(),
            display_name: format!("{first_name} {last_name}"),
            first_name,
            last_name,
            created_at: OffsetDateTime::now_utc()
                .format(&Rfc3339)
                .unwrap_or_default(),
            stats: PlayerStatistics::default(),
        }
    }
}

/// Account-backed statistics: the `stats` field of each profile document
///
/// Writing statistics for a player without a profile fails rather than
/// creating a half-empty profile.
#[derive(Debug, Clone)]
pub struct ProfileStore {
    dir: PathBuf,
}

impl ProfileStore {
    pub const DIR_NAME: &'static str = "profiles";

    #[must_use]
    pub fn in_dir(data_dir: &Path) -> Self {
        Self {
            dir: data_dir.join(Self::DIR_NAME),
        }
    }

    fn path_for(&self, user: UserId) -> PathBuf {
        self.dir.join(format!("{user}.json"))
    }

    /// # Errors
    ///
    /// Returns `PersistError` if the document exists but cannot be read.
    pub fn load(&self, user: UserId) -> Result<Option<Profile>, PersistError> {
        persist::read_json(&self.path_for(user))
    }

    /// # Errors
    ///
    /// Returns `PersistError` if the document cannot be written.
    pub fn save(&self, user: UserId, profile: &Profile) -> Result<(), PersistError> {
        persist::write_json(&self.path_for(user), profile)
    }
}

impl StatsStore for ProfileStore {
    fn get(&self, player: &PlayerId) -> Result<Option<PlayerStatistics>, StoreError> {
        // Keys that are not user ids cannot name a profile
        let Ok(user) = player.as_str().parse::<UserId>() else {
            return Ok(None);
        };
        let path = self.path_for(user);
        Ok(self
            .load(user)?
            .map(|profile| checked_on_load(profile.stats, &path)))
    }

    fn set(&mut self, player: &PlayerId, stats: &PlayerStatistics) -> Result<(), StoreError> {
        let user = player
            .as_str()
            .parse::<UserId>()
            .map_err(|_| StoreError::NoProfile(player.clone()))?;
        let mut profile =
            self.load(user)?.ok_or_else(|| StoreError::NoProfile(player.clone()))?;
        profile.stats = *stats;
        self.save(user, &profile)?;
        Ok(())
    }
}
