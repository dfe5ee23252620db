//! Duel bracket construction: winners' bracket, losers' bracket, and grand
//! final shells, with walkovers pre-resolved.

use crate::logic::seeding::seeds;
use crate::models::{Bracket, Elimination, GameMatch, MatchId, Slot, TournamentError};
use std::collections::BTreeMap;

/// Number of winners' bracket rounds for `np` players: `ceil(log2(np))`.
pub(crate) fn pow_of(np: u32) -> u32 {
    np.next_power_of_two().ilog2()
}

/// Materialize every match shell of a duel bracket for `np >= 4` players.
///
/// Round 1 carries the perfect seeding with seeds beyond `np` marked as byes;
/// WB round 2 and LB rounds 1-2 are pre-filled from the resulting walkover
/// outcomes; everything further out is a pending shell.
pub(crate) fn build(
    elimination: Elimination,
    np: u32,
) -> Result<BTreeMap<MatchId, GameMatch>, TournamentError> {
    if np < 4 {
        return Err(TournamentError::TooFewPlayers);
    }
    let p = pow_of(np);
    let mut matches = BTreeMap::new();

    // WB round 1: seed pairings; the first seed of a pair is always real.
    let mark = |s: u32| {
        if s <= np {
            Slot::Entrant(s)
        } else {
            Slot::Bye
        }
    };
    for i in 1..=(1u32 << (p - 1)) {
        let (a, b) = seeds(p, i);
        matches.insert(
            MatchId::new(Bracket::Wb, 1, i),
            GameMatch::new(vec![mark(a), mark(b)]),
        );
    }

    // WB round 2 (and LB round 1 for double elimination) are pre-filled by
    // propagating round-1 walkover outcomes; slots fed by undecided matches
    // stay pending.
    for g in 1..=(1u32 << (p - 2)) {
        let (w1, w2, l1, l2) = {
            let m1 = &matches[&MatchId::new(Bracket::Wb, 1, 2 * g - 1)];
            let m2 = &matches[&MatchId::new(Bracket::Wb, 1, 2 * g)];
            (m1.winner(), m2.winner(), m1.loser(), m2.loser())
        };
        matches.insert(MatchId::new(Bracket::Wb, 2, g), GameMatch::new(vec![w1, w2]));
        if elimination == Elimination::Double {
            matches.insert(MatchId::new(Bracket::Lb, 1, g), GameMatch::new(vec![l1, l2]));
        }
    }

    // Remaining WB shells.
    for r in 3..=p {
        for g in 1..=(1u32 << (p - r)) {
            matches.insert(MatchId::new(Bracket::Wb, r, g), GameMatch::shell(2));
        }
    }

    if elimination == Elimination::Double {
        // LB round 2 takes the LB round-1 winner on one side and a WB round-2
        // loser on the other; the occupied side alternates with game parity.
        for g in 1..=(1u32 << (p - 2)) {
            let w = matches[&MatchId::new(Bracket::Lb, 1, g)].winner();
            let players = if g % 2 == 1 {
                vec![Slot::Empty, w]
            } else {
                vec![w, Slot::Empty]
            };
            matches.insert(MatchId::new(Bracket::Lb, 2, g), GameMatch::new(players));
        }

        // Remaining LB shells: alternating drop and contraction rounds.
        for r in 3..=(2 * p - 2) {
            for g in 1..=(1u32 << (p - 1 - (r + 1) / 2)) {
                matches.insert(MatchId::new(Bracket::Lb, r, g), GameMatch::shell(2));
            }
        }

        // Grand final, and the bracket reset played only if the LB side wins it.
        matches.insert(MatchId::new(Bracket::Lb, 2 * p - 1, 1), GameMatch::shell(2));
        matches.insert(MatchId::new(Bracket::Lb, 2 * p, 1), GameMatch::shell(2));
    }

    Ok(matches)
}
