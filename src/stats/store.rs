//! Where statistics live between games
//!
//! `StatsStore` is the get/set boundary the recorder read-modify-writes
//! through. Account-backed storage lives with the account profiles
//! (`account::ProfileStore`); this module holds the in-memory store and the
//! device-local fallback used when nobody is signed in.

use super::PlayerStatistics;
use crate::persist::{self, PersistError};
use rustc_hash::FxHashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Key under which a player's statistics are stored
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerId(String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Key used for the signed-out, device-local player
    #[must_use]
    pub fn device() -> Self {
        Self("device".to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Persist(#[from] PersistError),
    #[error("no profile for player {0}")]
    NoProfile(PlayerId),
    #[error("statistics store unavailable: {0}")]
    Unavailable(String),
}

/// Get/set access to player statistics
///
/// `get` returns `Ok(None)` when the player has no record yet; callers treat
/// that as all-zero statistics.
pub trait StatsStore {
    /// Fetch a player's statistics
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backing storage cannot be read.
    fn get(&self, player: &PlayerId) -> Result<Option<PlayerStatistics>, StoreError>;

    /// Replace a player's statistics
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backing storage cannot be written.
    fn set(&mut self, player: &PlayerId, stats: &PlayerStatistics) -> Result<(), StoreError>;
}

impl<S: StatsStore + ?Sized> StatsStore for Box<S> {
    fn get(&self, player: &PlayerId) -> Result<Option<PlayerStatistics>, StoreError> {
        (**self).get(player)
    }

    fn set(&mut self, player: &PlayerId, stats: &PlayerStatistics) -> Result<(), StoreError> {
        (**self).set(player, stats)
    }
}

/// Repair a record read from disk if it breaks the statistics invariants
///
/// Folding further games onto a broken record would persist the damage, so
/// the repaired value is what callers see and what the next write stores.
pub(crate) fn checked_on_load(stats: PlayerStatistics, origin: &Path) -> PlayerStatistics {
    if stats.is_consistent() {
        return stats;
    }
    let repaired = stats.repaired();
    tracing::warn!(
        path = %origin.display(),
        loaded = ?stats,
        repaired = ?repaired,
        "inconsistent statistics record, using repaired values"
    );
    repaired
}

/// Process-local store
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    records: FxHashMap<PlayerId, PlayerStatistics>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StatsStore for MemoryStore {
    fn get(&self, player: &PlayerId) -> Result<Option<PlayerStatistics>, StoreError> {
        Ok(self.records.get(player).copied())
    }

    fn set(&mut self, player: &PlayerId, stats: &PlayerStatistics) -> Result<(), StoreError> {
        self.records.insert(player.clone(), *stats);
        Ok(())
    }
}

/// Device-local fallback store: one JSON document, whoever is playing
///
/// Uses the same statistics schema as account profiles so either can stand
/// in for the other.
#[derive(Debug, Clone)]
pub struct DeviceStore {
    path: PathBuf,
}

impl DeviceStore {
    pub const FILE_NAME: &'static str = "device_stats.json";

    /// Store rooted at `data_dir/device_stats.json`
    #[must_use]
    pub fn in_dir(data_dir: &Path) -> Self {
        Self::at(data_dir.join(Self::FILE_NAME))
    }

    #[must_use]
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StatsStore for DeviceStore {
    fn get(&self, _player: &PlayerId) -> Result<Option<PlayerStatistics>, StoreError> {
        let stats: Option<PlayerStatistics> = persist::read_json(&self.path)?;
        Ok(stats.map(|stats| checked_on_load(stats, &self.path)))
    }

    fn set(&mut self, _player: &PlayerId, stats: &PlayerStatistics) -> Result<(), StoreError> {
        persist::write_json(&self.path, stats)?;
        Ok(())
    }
}
