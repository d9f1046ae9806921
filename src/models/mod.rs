//! Data structures for the football manager: players, rosters, matches, draws.

mod game;
mod player;
mod team;
mod tournament;

pub use game::{Bracket, BracketMatch, BracketRound, GameMatch, LeagueRow, Prediction};
pub use player::{Player, Position, DEFAULT_RATING, MAX_RATING};
pub use team::{team_names, validate_teams, RosterError, Teams};
pub use tournament::{Draw, DrawId, TournamentError};
