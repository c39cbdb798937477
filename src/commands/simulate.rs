//! Bot simulation - plays many complete games through the engine
//!
//! Each game draws its own target and is played by a bot that guesses
//! uniformly among the words still consistent with the feedback so far.
//! Games run in parallel; their outcomes are folded into statistics in game
//! order, so a given seed always produces the same report.

use crate::core::{GuessRecord, Word, evaluate};
use crate::game::{GameOutcome, GameSession};
use crate::stats::{PlayerStatistics, record_outcome};
use crate::wordlists::WordList;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Result of a single simulated game
#[derive(Debug, Clone)]
pub struct SimulatedGame {
    pub target: Word,
    pub guesses: Vec<Word>,
    pub outcome: GameOutcome,
}

#[derive(Debug, Clone)]
pub struct SimulationReport {
    pub stats: PlayerStatistics,
    pub missed: Vec<Word>,
    pub duration: Duration,
}

impl SimulationReport {
    /// Mean attempts over won games, 0 if none were won
    #[must_use]
    pub fn average_attempts(&self) -> f64 {
        let wins = self.stats.guess_distribution.total();
        if wins == 0 {
            return 0.0;
        }
        let attempts: u32 = self
            .stats
            .guess_distribution
            .iter()
            .map(|(n, count)| u32::try_from(n).unwrap_or(u32::MAX).saturating_mul(count))
            .sum();
        f64::from(attempts) / f64::from(wins)
    }
}

/// Words that would have produced every verdict row seen so far
#[must_use]
pub fn consistent_candidates<'w>(words: &'w WordList, history: &[GuessRecord]) -> Vec<&'w Word> {
    words
        .words()
        .iter()
        .filter(|candidate| {
            history
                .iter()
                .all(|record| evaluate(record.word(), candidate) == *record.verdicts())
        })
        .collect()
}

/// Play one game to completion with the given seed
#[must_use]
pub fn play_one(words: &WordList, seed: u64) -> SimulatedGame {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut session = GameSession::new(words, &mut rng);

    while !session.is_over() {
        let candidates = consistent_candidates(words, session.history());
        // The target is always consistent, so this only falls back if the
        // list and session disagree
        let guess = candidates
            .choose(&mut rng)
            .map_or_else(|| session.target().clone(), |w| (*w).clone());
        for ch in guess.text().chars() {
            session.append_letter(ch);
        }
        if let Err(err) = session.submit_guess() {
            tracing::warn!("bot guess {guess} refused: {err}");
            break;
        }
    }

    let outcome = session.outcome().unwrap_or(GameOutcome {
        won: false,
        attempts_used: session.attempts_used().try_into().unwrap_or(u8::MAX),
    });
    SimulatedGame {
        target: session.target().clone(),
        guesses: session.history().iter().map(|r| r.word().clone()).collect(),
        outcome,
    }
}

/// Play `games` games in parallel and aggregate them
///
/// Game `i` uses seed `seed + i`.
#[must_use]
pub fn run_simulation(words: &WordList, games: usize, seed: u64, show_progress: bool) -> SimulationReport {
    let pb = if show_progress {
        ProgressBar::new(games as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .map_or_else(|_| ProgressStyle::default_bar(), |style| style.progress_chars("█▓▒░")),
    );
    pb.set_message("playing");

    let start = Instant::now();
    let results: Vec<SimulatedGame> = (0..games)
        .into_par_iter()
        .map(|i| {
            let game = play_one(words, seed.wrapping_add(i as u64));
            pb.inc(1);
            game
        })
        .collect();
    pb.finish_with_message("Complete!");

    let stats = results.iter().fold(PlayerStatistics::default(), |stats, game| {
        record_outcome(&stats, game.outcome.won, game.outcome.attempts_used)
    });
    let missed = results
        .iter()
        .filter(|game| !game.outcome.won)
        .map(|game| game.target.clone())
        .collect();

    let duration = start.elapsed();
    tracing::info!(
        games,
        won = stats.games_won,
        elapsed = ?duration,
        "simulation finished"
    );

    SimulationReport {
        stats,
        missed,
        duration,
    }
}
