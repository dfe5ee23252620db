//! Tournament snapshot, rules, standings, and errors.

use crate::logic::{duel, ffa, scoring};
use crate::models::game::{GameMatch, MatchId, Seed};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Errors that can occur while building or scoring a tournament.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// Not enough players for the chosen kind (duel needs 4, FFA needs 3).
    TooFewPlayers,
    /// FFA group size must be at least 3.
    GroupTooSmall,
    /// FFA needs more players than one group holds.
    TooFewGroups,
    /// FFA advancer count must be smaller than the group size.
    AdvanceTooLarge,
    /// FFA must advance at least one player per group.
    AdvanceTooSmall,
    /// The match id is not part of this tournament.
    UnknownMatch(MatchId),
    /// The match still has pending or conceded slots.
    MatchNotReady(MatchId),
    /// The score vector length does not match the player count.
    ScoreArityMismatch { expected: usize, got: usize },
    /// Duel matches need a strict winner.
    TieNotPermitted,
    /// A progression step produced a match id outside the bracket.
    BadMatchId(MatchId),
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::TooFewPlayers => {
                write!(f, "Not enough players for this tournament kind")
            }
            TournamentError::GroupTooSmall => write!(f, "FFA group size must be at least 3"),
            TournamentError::TooFewGroups => {
                write!(f, "Player count must exceed the FFA group size")
            }
            TournamentError::AdvanceTooLarge => {
                write!(f, "Advancer count must be smaller than the group size")
            }
            TournamentError::AdvanceTooSmall => {
                write!(f, "At least one player must advance per group")
            }
            TournamentError::UnknownMatch(id) => write!(f, "No match {} in this tournament", id),
            TournamentError::MatchNotReady(id) => {
                write!(f, "Match {} is still waiting for players", id)
            }
            TournamentError::ScoreArityMismatch { expected, got } => {
                write!(f, "Expected {} scores, got {}", expected, got)
            }
            TournamentError::TieNotPermitted => write!(f, "Duel matches cannot end in a tie"),
            TournamentError::BadMatchId(id) => write!(f, "Match id {} is outside the bracket", id),
        }
    }
}

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// Elimination style for duel tournaments.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Elimination {
    /// One loss eliminates.
    Single,
    /// Losers drop to a second bracket; two losses eliminate.
    Double,
}

/// Tournament kind and its parameters.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rules {
    /// Head-to-head bracket play.
    Duel { elimination: Elimination },
    /// Rounds of group matches where the top `advancers` of each group of up
    /// to `group_size` players advance.
    Ffa { group_size: u32, advancers: u32 },
}

/// One row of the final standings; placement 1 is the champion.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Standing {
    pub seed: Seed,
    pub placement: u32,
    /// Matches won, counted over matches where every slot held an entrant.
    pub wins: u32,
    /// Score total over the same matches.
    pub score_sum: i64,
}

/// An immutable tournament snapshot: all match shells plus, once the bracket
/// has terminated, the final standings. Scoring never mutates a snapshot; it
/// returns a new one.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    /// Participant count.
    pub size: u32,
    pub rules: Rules,
    /// Every match shell, keyed and iterable in play order.
    pub matches: BTreeMap<MatchId, GameMatch>,
    /// Present once the tournament has terminated.
    pub results: Option<Vec<Standing>>,
}

impl Tournament {
    /// Materialize the full set of match shells for `rules` and `np`
    /// participants, with walkovers pre-resolved.
    pub fn new(rules: Rules, np: u32) -> Result<Self, TournamentError> {
        let matches = match rules {
            Rules::Duel { elimination } => duel::build(elimination, np)?,
            Rules::Ffa {
                group_size,
                advancers,
            } => ffa::build(group_size, advancers, np)?,
        };
        Ok(Self {
            id: Uuid::new_v4(),
            size: np,
            rules,
            matches,
            results: None,
        })
    }

    /// Match ids in play order (WB before LB, then round, then game).
    pub fn keys(&self) -> impl Iterator<Item = &MatchId> + '_ {
        self.matches.keys()
    }

    /// Look up a match shell by id.
    pub fn match_at(&self, id: &MatchId) -> Option<&GameMatch> {
        self.matches.get(id)
    }

    /// Report scores for a match and get the updated snapshot, with winners
    /// advanced, losers dropped, and walkovers cascaded.
    pub fn score(&self, id: MatchId, scores: &[i32]) -> Result<Self, TournamentError> {
        scoring::score(self, id, scores)
    }

    /// Final standings, present once the tournament has terminated.
    pub fn results(&self) -> Option<&[Standing]> {
        self.results.as_deref()
    }
}
