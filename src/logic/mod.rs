//! Tournament business logic: first-round draw, cup bracket, league table.

mod cup;
mod draw;
mod league;
mod outcome;

pub use cup::{build_cup_bracket, round_label};
pub use draw::generate_matches;
pub use league::{run_league, AWAY_WIN_BELOW, HOME_WIN_BELOW};
pub use outcome::{
    OutcomeSource, RandomOutcomes, ScriptedOutcomes, CONFIDENCE_RANGE, WALKOVER_CONFIDENCE,
};
