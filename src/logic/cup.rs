//! Cup: single-elimination bracket built on top of a first-round draw.

use crate::logic::outcome::{OutcomeSource, WALKOVER_CONFIDENCE};
use crate::models::{Bracket, BracketMatch, BracketRound, GameMatch, TournamentError};

/// Simulate a knockout cup from the first-round matches.
///
/// The first round keeps the draw's predicted winners. Each later round pairs
/// consecutive winners of the previous one; a lone team at the end of an odd
/// round advances unopposed. Stops once a single winner is left.
pub fn build_cup_bracket<O: OutcomeSource + ?Sized>(
    first_round: &[GameMatch],
    outcomes: &mut O,
) -> Result<Bracket, TournamentError> {
    if first_round.is_empty() {
        return Err(TournamentError::NoMatches);
    }

    let mut current: Vec<BracketMatch> = first_round
        .iter()
        .map(|m| seed_match(m, outcomes))
        .collect();
    let mut played = Vec::new();

    while current.len() > 1 {
        let next = play_round(&current, outcomes);
        played.push(std::mem::replace(&mut current, next));
    }
    let winner = current[0].winner.clone();
    played.push(current);

    let total = played.len();
    let rounds = played
        .into_iter()
        .enumerate()
        .map(|(index, matches)| BracketRound {
            name: round_label(index, total),
            matches,
        })
        .collect();

    Ok(Bracket { rounds, winner })
}

/// Name of round `index` (0-based) in a bracket of `total` rounds, counted
/// back from the final.
pub fn round_label(index: usize, total: usize) -> String {
    match total.saturating_sub(index) {
        1 => "FINAL".to_string(),
        2 => "SEMIFINAL".to_string(),
        3 => "QUARTERFINAL".to_string(),
        _ => format!("ROUND {}", index + 1),
    }
}

fn seed_match<O: OutcomeSource + ?Sized>(m: &GameMatch, outcomes: &mut O) -> BracketMatch {
    match (&m.away, &m.prediction) {
        (None, _) => BracketMatch {
            home: m.home.clone(),
            away: None,
            winner: m.home.clone(),
            confidence: WALKOVER_CONFIDENCE,
        },
        (Some(away), Some(p)) => BracketMatch {
            home: m.home.clone(),
            away: Some(away.clone()),
            winner: p.winner.clone(),
            confidence: p.confidence,
        },
        // Draw supplied without a prediction: decide it now.
        (Some(away), None) => simulate(&m.home, away, outcomes),
    }
}

fn play_round<O: OutcomeSource + ?Sized>(previous: &[BracketMatch], outcomes: &mut O) -> Vec<BracketMatch> {
    previous
        .chunks(2)
        .map(|pair| match pair {
            [a, b] => simulate(&a.winner, &b.winner, outcomes),
            [lone] => BracketMatch {
                home: lone.winner.clone(),
                away: None,
                winner: lone.winner.clone(),
                confidence: WALKOVER_CONFIDENCE,
            },
            _ => unreachable!("chunks(2) yields one or two items"),
        })
        .collect()
}

fn simulate<O: OutcomeSource + ?Sized>(home: &str, away: &str, outcomes: &mut O) -> BracketMatch {
    let winner = if outcomes.home_wins() { home } else { away };
    BracketMatch {
        home: home.to_string(),
        away: Some(away.to_string()),
        winner: winner.to_string(),
        confidence: outcomes.confidence(),
    }
}
