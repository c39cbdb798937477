//! Cumulative player statistics
//!
//! `record_outcome` is the only way statistics change: one call per finished
//! game. It is a pure transform, so callers decide where the result is stored.
//! It is not idempotent; calling it twice for one game counts the game twice.

use crate::game::{GameOutcome, MAX_ATTEMPTS};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Wins bucketed by the number of guesses they took (1..=6)
///
/// Serialized as an object keyed `"1"` through `"6"`, every key present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, Option<u32>>", into = "BTreeMap<String, u32>")]
pub struct GuessDistribution([u32; MAX_ATTEMPTS]);

impl GuessDistribution {
    /// Wins that took exactly `attempts` guesses; 0 outside 1..=6
    #[must_use]
    pub fn get(&self, attempts: usize) -> u32 {
        attempts
            .checked_sub(1)
            .and_then(|idx| self.0.get(idx))
            .copied()
            .unwrap_or(0)
    }

    /// `(attempts, wins)` pairs in ascending attempt order
    pub fn iter(&self) -> impl Iterator<Item = (usize, u32)> + '_ {
        self.0.iter().enumerate().map(|(idx, &count)| (idx + 1, count))
    }

    /// Sum of all buckets; equals `games_won` for consistent statistics
    #[must_use]
    pub fn total(&self) -> u32 {
        self.0.iter().fold(0, |sum, &count| sum.saturating_add(count))
    }

    /// Largest bucket, used to scale distribution bars
    #[must_use]
    pub fn max_count(&self) -> u32 {
        self.0.iter().copied().max().unwrap_or(0)
    }

    fn increment(&mut self, attempts: usize) {
        let bucket = &mut self.0[attempts - 1];
        *bucket = bucket.saturating_add(1);
    }
}

impl From<BTreeMap<String, Option<u32>>> for GuessDistribution {
    fn from(raw: BTreeMap<String, Option<u32>>) -> Self {
        let mut buckets = [0; MAX_ATTEMPTS];
        for (key, value) in raw {
            match key.parse::<usize>() {
                Ok(attempts @ 1..=MAX_ATTEMPTS) => buckets[attempts - 1] = value.unwrap_or(0),
                _ => tracing::warn!("ignoring guess distribution entry '{key}'"),
            }
        }
        Self(buckets)
    }
}

impl From<GuessDistribution> for BTreeMap<String, u32> {
    fn from(dist: GuessDistribution) -> Self {
        dist.iter()
            .map(|(attempts, count)| (attempts.to_string(), count))
            .collect()
    }
}

/// A player's lifetime record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerStatistics {
    pub games_played: u32,
    pub games_won: u32,
    pub current_streak: u32,
    pub max_streak: u32,
    pub guess_distribution: GuessDistribution,
}

impl PlayerStatistics {
    /// Rounded win rate in percent; 0 before the first game
    #[must_use]
    pub fn win_percentage(&self) -> u32 {
        if self.games_played == 0 {
            return 0;
        }
        (f64::from(self.games_won) / f64::from(self.games_played) * 100.0).round() as u32
    }

    /// Fold a finished game into these statistics
    #[must_use]
    pub fn apply(&self, outcome: GameOutcome) -> Self {
        record_outcome(self, outcome.won, outcome.attempts_used)
    }

    /// Check the record's internal invariants
    ///
    /// Holds for anything built from zero by `record_outcome`; records loaded
    /// from outside may violate it.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.games_won <= self.games_played
            && self.current_streak <= self.max_streak
            && self.max_streak <= self.games_won
            && self.guess_distribution.total() == self.games_won
    }

    /// The nearest consistent record
    ///
    /// The guess distribution is taken as the source of truth for wins;
    /// the other counters are raised or clamped around it.
    #[must_use]
    pub fn repaired(&self) -> Self {
        let games_won = self.guess_distribution.total();
        let current_streak = self.current_streak.min(games_won);
        Self {
            games_played: self.games_played.max(games_won),
            games_won,
            current_streak,
            max_streak: self.max_streak.min(games_won).max(current_streak),
            guess_distribution: self.guess_distribution,
        }
    }
}

/// Produce the statistics that follow `stats` after one finished game
///
/// - Every game: `games_played += 1`
/// - Win: `games_won`, `current_streak` and the `attempts_used` bucket go up
///   by one, `max_streak` follows the streak
/// - Loss: `current_streak` resets to 0, nothing else moves
///
/// Counters saturate at `u32::MAX` rather than wrap.
///
/// # Panics
///
/// Panics if `attempts_used` is outside `1..=6`.
///
/// # Examples
/// ```
/// use wordle_game::stats::{PlayerStatistics, record_outcome};
///
/// let stats = record_outcome(&PlayerStatistics::default(), true, 3);
/// assert_eq!(stats.games_played, 1);
/// assert_eq!(stats.max_streak, 1);
/// assert_eq!(stats.guess_distribution.get(3), 1);
/// ```
#[must_use]
pub fn record_outcome(stats: &PlayerStatistics, won: bool, attempts_used: u8) -> PlayerStatistics {
    let attempts = usize::from(attempts_used);
    assert!(
        (1..=MAX_ATTEMPTS).contains(&attempts),
        "attempts_used must be within 1..={MAX_ATTEMPTS}, got {attempts}"
    );

    let mut next = *stats;
    next.games_played = next.games_played.saturating_add(1);

    if won {
        next.games_won = next.games_won.saturating_add(1);
        next.current_streak = next.current_streak.saturating_add(1);
        next.max_streak = next.max_streak.max(next.current_streak);
        next.guess_distribution.increment(attempts);
    } else {
        next.current_streak = 0;
    }

    next
}
