//! Football cup web app: library with models, simulation logic and the HTTP API.

pub mod api;
pub mod config;
pub mod logic;
pub mod models;
pub mod state;
pub mod store;

pub use config::{Config, ConfigError};
pub use logic::{
    build_cup_bracket, generate_matches, run_league, OutcomeSource, RandomOutcomes,
    ScriptedOutcomes,
};
pub use models::{
    Bracket, BracketMatch, BracketRound, Draw, DrawId, GameMatch, LeagueRow, Player, Position,
    Prediction, RosterError, Teams, TournamentError,
};
pub use state::DrawRegistry;
pub use store::{StoreError, TeamStore};
