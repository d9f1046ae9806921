//! Team rosters: the mapping persisted by the team store.

use crate::models::player::{Player, MAX_RATING};
use std::collections::BTreeMap;

/// Team name -> ordered roster. Keys are unique by construction.
pub type Teams = BTreeMap<String, Vec<Player>>;

/// Reasons a replacement roster mapping is refused.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RosterError {
    /// A player's rating is above [`MAX_RATING`].
    RatingOutOfRange { team: String, player: String, rating: u8 },
}

impl std::fmt::Display for RosterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RosterError::RatingOutOfRange { team, player, rating } => write!(
                f,
                "Rating {} for {} ({}) is outside 0-{}",
                rating, player, team, MAX_RATING
            ),
        }
    }
}

impl std::error::Error for RosterError {}

/// Check a full replacement mapping before it is written. Only ratings are
/// checked; team and player names are stored as given.
pub fn validate_teams(teams: &Teams) -> Result<(), RosterError> {
    for (team, players) in teams {
        if let Some(p) = players.iter().find(|p| p.rating > MAX_RATING) {
            return Err(RosterError::RatingOutOfRange {
                team: team.clone(),
                player: p.name.clone(),
                rating: p.rating,
            });
        }
    }
    Ok(())
}

/// Team names in store order.
pub fn team_names(teams: &Teams) -> Vec<String> {
    teams.keys().cloned().collect()
}
