//! Tournament-structure engine: materializes duel single/double elimination
//! and FFA brackets, propagates scores, and derives final standings.

pub mod logic;
pub mod models;

pub use logic::{duel_expected, groups, robin, seeds};
pub use models::{
    Bracket, Elimination, GameMatch, MatchId, Rules, Seed, Slot, Standing, Tournament,
    TournamentError, TournamentId,
};
