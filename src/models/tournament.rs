//! Draw (one generated match list) and TournamentError.

use crate::models::game::GameMatch;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Errors that can occur during tournament simulation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// Cup or league requested before any matches were generated.
    NoMatches,
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::NoMatches => write!(f, "No matches generated yet"),
        }
    }
}

impl std::error::Error for TournamentError {}

/// Unique identifier for a draw.
pub type DrawId = Uuid;

/// A generated first-round match list. Immutable once created; a new generate
/// call produces a new draw instead of editing this one.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Draw {
    pub id: DrawId,
    pub generated_at: DateTime<Utc>,
    pub matches: Vec<GameMatch>,
}

impl Draw {
    pub fn new(matches: Vec<GameMatch>) -> Self {
        Self {
            id: Uuid::new_v4(),
            generated_at: Utc::now(),
            matches,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}
