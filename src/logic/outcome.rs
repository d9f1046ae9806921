//! Sources of randomness for match simulation.
//!
//! Every random decision the simulator makes goes through [`OutcomeSource`], so
//! production code can use a real RNG while tests replay fixed sequences.

use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::VecDeque;
use std::ops::RangeInclusive;

/// Confidence range for a simulated two-team match.
pub const CONFIDENCE_RANGE: RangeInclusive<u8> = 80..=100;

/// Confidence reported when a team advances without an opponent.
pub const WALKOVER_CONFIDENCE: u8 = 100;

/// The random draws a tournament simulation needs.
pub trait OutcomeSource {
    /// Put team names in random order (in place).
    fn shuffle_teams(&mut self, teams: &mut [String]);

    /// Fair coin: `true` when the home side takes the match.
    fn home_wins(&mut self) -> bool;

    /// Confidence percentage within [`CONFIDENCE_RANGE`].
    fn confidence(&mut self) -> u8;

    /// Uniform roll in `[0, 1)` used for league results.
    fn league_roll(&mut self) -> f64;
}

/// [`OutcomeSource`] backed by any `rand` RNG.
#[derive(Clone, Debug)]
pub struct RandomOutcomes<R = ThreadRng> {
    rng: R,
}

impl RandomOutcomes<ThreadRng> {
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for RandomOutcomes<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomOutcomes<R> {
    /// Use a specific RNG, e.g. a seeded `StdRng` for reproducible runs.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> OutcomeSource for RandomOutcomes<R> {
    fn shuffle_teams(&mut self, teams: &mut [String]) {
        teams.shuffle(&mut self.rng);
    }

    fn home_wins(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }

    fn confidence(&mut self) -> u8 {
        self.rng.gen_range(CONFIDENCE_RANGE)
    }

    fn league_roll(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Deterministic [`OutcomeSource`] that replays queued values.
///
/// Shuffling keeps the input order. Once a queue runs dry it falls back to home
/// wins, the lowest confidence and a roll of `0.0` (a home win in the league).
#[derive(Clone, Debug, Default)]
pub struct ScriptedOutcomes {
    home_wins: VecDeque<bool>,
    confidences: VecDeque<u8>,
    rolls: VecDeque<f64>,
}

impl ScriptedOutcomes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_home_wins(mut self, results: impl IntoIterator<Item = bool>) -> Self {
        self.home_wins.extend(results);
        self
    }

    pub fn with_confidences(mut self, values: impl IntoIterator<Item = u8>) -> Self {
        self.confidences.extend(values);
        self
    }

    pub fn with_rolls(mut self, values: impl IntoIterator<Item = f64>) -> Self {
        self.rolls.extend(values);
        self
    }
}

impl OutcomeSource for ScriptedOutcomes {
    fn shuffle_teams(&mut self, _teams: &mut [String]) {}

    fn home_wins(&mut self) -> bool {
        self.home_wins.pop_front().unwrap_or(true)
    }

    fn confidence(&mut self) -> u8 {
        self.confidences
            .pop_front()
            .unwrap_or(*CONFIDENCE_RANGE.start())
    }

    fn league_roll(&mut self) -> f64 {
        self.rolls.pop_front().unwrap_or(0.0)
    }
}
