//! Match (game), prediction, bracket rounds and league rows.

use serde::{Deserialize, Serialize};

/// Predicted outcome attached to a generated match.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Name of the team predicted to win.
    #[serde(rename = "result")]
    pub winner: String,
    /// Cosmetic percentage, 80-100 when generated.
    pub confidence: u8,
}

/// A first-round match. `away == None` is a bye: the home team advances.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameMatch {
    pub home: String,
    #[serde(default)]
    pub away: Option<String>,
    #[serde(default)]
    pub prediction: Option<Prediction>,
}

impl GameMatch {
    pub fn new(home: impl Into<String>, away: impl Into<String>, prediction: Prediction) -> Self {
        Self {
            home: home.into(),
            away: Some(away.into()),
            prediction: Some(prediction),
        }
    }

    pub fn bye(home: impl Into<String>) -> Self {
        Self {
            home: home.into(),
            away: None,
            prediction: None,
        }
    }

    pub fn is_bye(&self) -> bool {
        self.away.is_none()
    }
}

/// One simulated pairing inside a bracket round.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct BracketMatch {
    pub home: String,
    pub away: Option<String>,
    pub winner: String,
    pub confidence: u8,
}

/// A named round of the cup bracket.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct BracketRound {
    pub name: String,
    pub matches: Vec<BracketMatch>,
}

/// Full cup simulation: every round in order plus the champion.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Bracket {
    #[serde(rename = "bracket")]
    pub rounds: Vec<BracketRound>,
    pub winner: String,
}

/// A team's line in the league table.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct LeagueRow {
    pub name: String,
    pub points: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
}

impl LeagueRow {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn add_win(&mut self) {
        self.wins += 1;
        self.points += 3;
    }

    pub fn add_draw(&mut self) {
        self.draws += 1;
        self.points += 1;
    }

    pub fn add_loss(&mut self) {
        self.losses += 1;
    }
}
