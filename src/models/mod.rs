//! Data structures for the bracket engine: matches, slots, tournaments.

mod game;
mod tournament;

pub use game::{Bracket, GameMatch, MatchId, Seed, Slot};
pub use tournament::{
    Elimination, Rules, Standing, Tournament, TournamentError, TournamentId,
};
