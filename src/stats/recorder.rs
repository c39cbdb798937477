//! Records finished games into a statistics store
//!
//! The recorder is the only place a session's outcome meets persistence. It
//! takes the session's one-shot outcome, so a game is counted at most once
//! even if the caller asks twice. A failed write is reported but not retried.
//!
//! Known gap: the read-modify-write is not guarded against two sessions of the
//! same player finishing at once; the last write wins.

use super::store::{PlayerId, StatsStore, StoreError};
use super::{PlayerStatistics, record_outcome};
use crate::game::{GameOutcome, GameSession};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecordError {
    /// Current statistics could not be loaded; nothing was written
    #[error("could not load statistics: {0}")]
    Read(#[source] StoreError),
    /// The new statistics were computed but could not be saved
    #[error("could not save statistics: {source}")]
    Write {
        stats: PlayerStatistics,
        #[source]
        source: StoreError,
    },
}

impl RecordError {
    /// Statistics computed before the failure, if the failure was a write
    #[must_use]
    pub const fn computed_stats(&self) -> Option<&PlayerStatistics> {
        match self {
            Self::Read(_) => None,
            Self::Write { stats, .. } => Some(stats),
        }
    }
}

/// Persists game outcomes for one player through an explicit store handle
#[derive(Debug)]
pub struct Recorder<S: StatsStore> {
    store: S,
    player: PlayerId,
}

impl<S: StatsStore> Recorder<S> {
    pub const fn new(store: S, player: PlayerId) -> Self {
        Self { store, player }
    }

    #[must_use]
    pub const fn player(&self) -> &PlayerId {
        &self.player
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Current statistics, all zero if the player has none yet
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store cannot be read.
    pub fn current(&self) -> Result<PlayerStatistics, StoreError> {
        Ok(self.store.get(&self.player)?.unwrap_or_default())
    }

    /// Record the session's outcome if it has one that was not yet recorded
    ///
    /// Returns `Ok(None)` while the game is running or once its outcome has
    /// already been taken.
    ///
    /// # Errors
    ///
    /// See [`Recorder::record_outcome`].
    pub fn record(
        &mut self,
        session: &mut GameSession<'_>,
    ) -> Result<Option<PlayerStatistics>, RecordError> {
        match session.take_outcome() {
            Some(outcome) => self.record_outcome(outcome).map(Some),
            None => Ok(None),
        }
    }

    /// Fold one outcome into the stored statistics
    ///
    /// # Errors
    ///
    /// - `RecordError::Read` if the current statistics cannot be loaded
    /// - `RecordError::Write` if saving fails; it carries the new statistics
    pub fn record_outcome(&mut self, outcome: GameOutcome) -> Result<PlayerStatistics, RecordError> {
        let current = self.current().map_err(RecordError::Read)?;
        let next = record_outcome(&current, outcome.won, outcome.attempts_used);

        match self.store.set(&self.player, &next) {
            Ok(()) => {
                tracing::info!(
                    player = %self.player,
                    won = outcome.won,
                    attempts = outcome.attempts_used,
                    played = next.games_played,
                    streak = next.current_streak,
                    "recorded game"
                );
                Ok(next)
            }
            Err(source) => {
                tracing::warn!(player = %self.player, "failed to save statistics: {source}");
                Err(RecordError::Write {
                    stats: next,
                    source,
                })
            }
        }
    }
}
