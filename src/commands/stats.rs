//! Statistics lookup for whoever is playing on this machine

use crate::account::{ProfileStore, Session};
use crate::stats::{DeviceStore, PlayerId, PlayerStatistics, Recorder, StatsStore};
use anyhow::{Context, Result};
use std::path::Path;

/// The store and key a game's outcome goes to
pub struct StatsTarget {
    pub store: Box<dyn StatsStore>,
    pub player: PlayerId,
    /// Who the statistics belong to, for display
    pub label: String,
}

impl StatsTarget {
    /// The signed-in player's profile, or the device store if nobody is
    /// signed in
    ///
    /// # Errors
    ///
    /// Returns an error if the session file is unreadable.
    pub fn resolve(data_dir: &Path) -> Result<Self> {
        let session = Session::load(data_dir).context("reading sign-in session")?;
        Ok(match session {
            Some(session) => Self {
                store: Box::new(ProfileStore::in_dir(data_dir)),
                player: session.player(),
                label: session.username,
            },
            None => Self {
                store: Box::new(DeviceStore::in_dir(data_dir)),
                player: PlayerId::device(),
                label: "this device".to_string(),
            },
        })
    }

    #[must_use]
    pub fn into_recorder(self) -> (Recorder<Box<dyn StatsStore>>, String) {
        (Recorder::new(self.store, self.player), self.label)
    }
}

/// Current statistics for the resolved player, zero if none recorded
///
/// # Errors
///
/// Returns an error if the store cannot be read.
pub fn load_statistics(target: &StatsTarget) -> Result<PlayerStatistics> {
    let stats = target
        .store
        .get(&target.player)
        .with_context(|| format!("loading statistics for {}", target.label))?;
    Ok(stats.unwrap_or_default())
}
