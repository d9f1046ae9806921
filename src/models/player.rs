//! Player and Position data structures.

use serde::{Deserialize, Serialize};

/// Rating given to a player when none is supplied.
pub const DEFAULT_RATING: u8 = 75;

/// Highest rating a player can carry.
pub const MAX_RATING: u8 = 100;

/// Where a player lines up on the pitch.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum Position {
    #[default]
    Forward,
    Midfielder,
    Defender,
    Goalkeeper,
}

impl Position {
    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Forward => "Forward",
            Position::Midfielder => "Midfielder",
            Position::Defender => "Defender",
            Position::Goalkeeper => "Goalkeeper",
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn default_rating() -> u8 {
    DEFAULT_RATING
}

/// A player on a team roster.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    #[serde(default)]
    pub position: Position,
    /// 0-100; missing ratings fall back to [`DEFAULT_RATING`].
    #[serde(default = "default_rating")]
    pub rating: u8,
}

impl Player {
    /// Create a player at the given position with the default rating.
    pub fn new(name: impl Into<String>, position: Position) -> Self {
        Self {
            name: name.into(),
            position,
            rating: DEFAULT_RATING,
        }
    }

    /// Same player with an explicit rating.
    pub fn with_rating(mut self, rating: u8) -> Self {
        self.rating = rating;
        self
    }
}
