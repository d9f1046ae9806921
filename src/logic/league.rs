//! League: one simulated round of results aggregated into a points table.

use crate::logic::outcome::OutcomeSource;
use crate::models::{GameMatch, LeagueRow, TournamentError};
use std::collections::HashMap;

/// Rolls below this are home wins.
pub const HOME_WIN_BELOW: f64 = 0.45;

/// Rolls below this (and at least [`HOME_WIN_BELOW`]) are away wins; the rest are draws.
pub const AWAY_WIN_BELOW: f64 = 0.90;

/// Simulate every match and rank teams by points (win 3, draw 1, loss 0).
///
/// A bye counts as a win for the home team. Teams on equal points keep the
/// order in which they first appear in the draw.
pub fn run_league<O: OutcomeSource + ?Sized>(
    matches: &[GameMatch],
    outcomes: &mut O,
) -> Result<Vec<LeagueRow>, TournamentError> {
    if matches.is_empty() {
        return Err(TournamentError::NoMatches);
    }

    let mut table: Vec<LeagueRow> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut row = |name: &str, table: &mut Vec<LeagueRow>| -> usize {
        *index.entry(name.to_string()).or_insert_with(|| {
            table.push(LeagueRow::new(name));
            table.len() - 1
        })
    };

    for m in matches {
        let home = row(&m.home, &mut table);
        let away = match &m.away {
            Some(away) => row(away, &mut table),
            None => {
                table[home].add_win();
                continue;
            }
        };

        let r = outcomes.league_roll();
        if r < HOME_WIN_BELOW {
            table[home].add_win();
            table[away].add_loss();
        } else if r < AWAY_WIN_BELOW {
            table[away].add_win();
            table[home].add_loss();
        } else {
            table[home].add_draw();
            table[away].add_draw();
        }
    }

    table.sort_by(|a, b| b.points.cmp(&a.points));
    Ok(table)
}
