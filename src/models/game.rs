//! Match shells: bracket, match identity, player slots, and the match itself.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A pre-tournament seed in `[1..np]`; 1 is the strongest entrant.
pub type Seed = u32;

/// Which bracket a match belongs to. `Wb` orders before `Lb`, so match ids
/// sort in natural play order.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bracket {
    /// Winners' bracket (the only bracket for single elimination and FFA).
    Wb,
    /// Losers' bracket, including the grand finals.
    Lb,
}

impl fmt::Display for Bracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bracket::Wb => write!(f, "WB"),
            Bracket::Lb => write!(f, "LB"),
        }
    }
}

/// Unique identifier for a match: bracket, round, and game, counted from 1.
/// Ordering is lexicographic on `(bracket, round, game)`.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct MatchId {
    pub bracket: Bracket,
    pub round: u32,
    pub game: u32,
}

impl MatchId {
    pub fn new(bracket: Bracket, round: u32, game: u32) -> Self {
        Self { bracket, round, game }
    }
}

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} R{} G{}", self.bracket, self.round, self.game)
    }
}

/// One player position in a match.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    /// Awaiting the outcome of an earlier match.
    Empty,
    /// Missing opponent: concedes any match it appears in.
    Bye,
    /// A seeded entrant.
    Entrant(Seed),
}

impl Slot {
    /// The seed held by this slot, if it holds one.
    pub fn seed(&self) -> Option<Seed> {
        match self {
            Slot::Entrant(s) => Some(*s),
            _ => None,
        }
    }
}

/// A single match: positional player slots (2 for duel, group size for FFA)
/// plus one score per slot once the match is played or conceded.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameMatch {
    pub players: Vec<Slot>,
    /// `None` until the match is played; fixed immediately for walkovers.
    pub scores: Option<Vec<i32>>,
}

impl GameMatch {
    /// Create a match from slots; a walkover is scored on the spot.
    pub fn new(players: Vec<Slot>) -> Self {
        let mut m = Self { players, scores: None };
        m.apply_walkover();
        m
    }

    /// An unfilled shell of `len` pending slots.
    pub(crate) fn shell(len: usize) -> Self {
        Self {
            players: vec![Slot::Empty; len],
            scores: None,
        }
    }

    /// A match can take a score report only when every slot holds an entrant.
    pub fn is_scorable(&self) -> bool {
        self.players.iter().all(|s| matches!(s, Slot::Entrant(_)))
    }

    /// The winning slot (strictly greatest score). `Empty` while unscored.
    pub fn winner(&self) -> Slot {
        match &self.scores {
            None => Slot::Empty,
            Some(scores) => {
                let mut best = 0;
                for i in 1..scores.len() {
                    if scores[i] > scores[best] {
                        best = i;
                    }
                }
                self.players[best]
            }
        }
    }

    /// The losing slot of a duel match. `Empty` while unscored.
    pub fn loser(&self) -> Slot {
        match &self.scores {
            None => Slot::Empty,
            Some(scores) => {
                let mut worst = 0;
                for i in 1..scores.len() {
                    if scores[i] <= scores[worst] {
                        worst = i;
                    }
                }
                self.players[worst]
            }
        }
    }

    /// Write `slot` at `pos`, keep the other slots, then re-check concession.
    pub(crate) fn set_slot(&mut self, pos: usize, slot: Slot) {
        if let Some(p) = self.players.get_mut(pos) {
            *p = slot;
        }
        self.apply_walkover();
    }

    /// A bye concedes: once no slot is pending, a match containing a bye gets
    /// fixed scores (1 per entrant, 0 per bye).
    fn apply_walkover(&mut self) {
        let pending = self.players.iter().any(|s| matches!(s, Slot::Empty));
        let bye = self.players.iter().any(|s| matches!(s, Slot::Bye));
        if !pending && bye {
            self.scores = Some(
                self.players
                    .iter()
                    .map(|s| if matches!(s, Slot::Bye) { 0 } else { 1 })
                    .collect(),
            );
        }
    }
}
