//! First-round draw: random pairing of teams with predicted winners.

use crate::logic::outcome::OutcomeSource;
use crate::models::{GameMatch, Prediction};

/// Pair the given teams into first-round matches.
///
/// 1. Shuffle the team names.
/// 2. Pair consecutive names; with an odd count the last team gets a bye.
/// 3. Every two-team match gets a random predicted winner and a confidence.
///
/// An empty team list yields an empty draw.
pub fn generate_matches<O: OutcomeSource + ?Sized>(
    mut teams: Vec<String>,
    outcomes: &mut O,
) -> Vec<GameMatch> {
    outcomes.shuffle_teams(&mut teams);

    teams
        .chunks(2)
        .map(|pair| match pair {
            [home, away] => {
                let winner = if outcomes.home_wins() { home } else { away };
                let prediction = Prediction {
                    winner: winner.clone(),
                    confidence: outcomes.confidence(),
                };
                GameMatch::new(home.clone(), away.clone(), prediction)
            }
            [home] => GameMatch::bye(home.clone()),
            _ => unreachable!("chunks(2) yields one or two items"),
        })
        .collect()
}
