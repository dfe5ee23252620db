//! Final standings: win and score tallies plus placement derivation.

use crate::logic::duel::pow_of;
use crate::models::{
    Bracket, Elimination, MatchId, Rules, Seed, Slot, Standing, Tournament,
};
use std::collections::BTreeMap;

/// Standings for a terminated tournament, `None` while play is still open.
pub(crate) fn compute(t: &Tournament) -> Option<Vec<Standing>> {
    match t.rules {
        Rules::Duel { elimination } => duel(t, elimination),
        Rules::Ffa { .. } => ffa(t),
    }
}

fn duel(t: &Tournament, elimination: Elimination) -> Option<Vec<Standing>> {
    let p = pow_of(t.size);
    let gf1 = match elimination {
        Elimination::Single => MatchId::new(Bracket::Wb, p, 1),
        Elimination::Double => MatchId::new(Bracket::Lb, 2 * p - 1, 1),
    };
    let gf2 = MatchId::new(Bracket::Lb, 2 * p, 1);

    // Terminated: the final is scored, and for double elimination either the
    // WB side took GF1 outright or the bracket reset is also scored.
    let decided = match (elimination, &t.matches.get(&gf1)?.scores) {
        (_, None) => false,
        (Elimination::Single, Some(_)) => true,
        (Elimination::Double, Some(s)) => {
            s.first() == s.iter().max()
                || t.matches.get(&gf2).is_some_and(|m| m.scores.is_some())
        }
    };
    if !decided {
        return None;
    }

    let mut rows: BTreeMap<Seed, Standing> = (1..=t.size)
        .map(|seed| {
            (
                seed,
                Standing {
                    seed,
                    placement: 0,
                    wins: 0,
                    score_sum: 0,
                },
            )
        })
        .collect();

    // Wins and score sums count only matches between two real entrants;
    // last_round tracks each player's deepest appearance in the terminal
    // bracket (LB for double, WB for single), which determines placement.
    let terminal_bracket = match elimination {
        Elimination::Single => Bracket::Wb,
        Elimination::Double => Bracket::Lb,
    };
    let mut last_round: BTreeMap<Seed, u32> = BTreeMap::new();
    for (mid, m) in &t.matches {
        if m.is_scorable() {
            if let Some(scores) = &m.scores {
                for (slot, &sc) in m.players.iter().zip(scores) {
                    if let Some(row) = slot.seed().and_then(|s| rows.get_mut(&s)) {
                        row.score_sum += i64::from(sc);
                    }
                }
                if let Some(row) = m.winner().seed().and_then(|s| rows.get_mut(&s)) {
                    row.wins += 1;
                }
            }
        }
        if mid.bracket == terminal_bracket {
            for slot in &m.players {
                if let Slot::Entrant(seed) = *slot {
                    let deepest = last_round.entry(seed).or_insert(0);
                    *deepest = (*deepest).max(mid.round);
                }
            }
        }
    }

    for (seed, row) in rows.iter_mut() {
        let max_r = last_round.get(seed).copied().unwrap_or(1);
        row.placement = match elimination {
            Elimination::Single => placement_single(p, max_r),
            Elimination::Double => placement_double(p, max_r),
        };
    }

    // The raw formula cannot split the two finalists; pin the champion of the
    // last final played to 1 and the other finalist to 2.
    let last_final = if elimination == Elimination::Double
        && t.matches.get(&gf2).is_some_and(|m| m.scores.is_some())
    {
        gf2
    } else {
        gf1
    };
    let fm = t.matches.get(&last_final)?;
    if let Some(champion) = fm.winner().seed() {
        if let Some(row) = rows.get_mut(&champion) {
            row.placement = 1;
        }
        for slot in &fm.players {
            if let Some(other) = slot.seed().filter(|&s| s != champion) {
                if let Some(row) = rows.get_mut(&other) {
                    row.placement = 2;
                }
            }
        }
    }

    let mut out: Vec<Standing> = rows.into_values().collect();
    out.sort_by(|a, b| a.placement.cmp(&b.placement).then(a.seed.cmp(&b.seed)));
    Some(out)
}

/// Placement from the deepest LB round reached in a double bracket of `2^p`.
/// Reproduces the standard table 1, 2, 3, 4, 5, 5, 7, 7, 9, ..., 13, ...
fn placement_double(p: u32, max_r: u32) -> u32 {
    let metric = 2 * p + 1 - max_r;
    if metric <= 4 {
        return metric;
    }
    let r = metric - 4;
    let k = r.div_ceil(2);
    let odd_extra = if r % 2 == 0 { 1 << k } else { 0 };
    (1 << (k + 1)) + 1 + odd_extra
}

/// Placement from the deepest WB round reached in a single bracket of `2^p`:
/// both finalists 1 (split afterwards), then 3, 5, 9, ...
fn placement_single(p: u32, max_r: u32) -> u32 {
    let metric = p + 1 - max_r;
    if metric <= 1 {
        metric
    } else {
        (1 << (metric - 1)) + 1
    }
}

fn ffa(t: &Tournament) -> Option<Vec<Standing>> {
    let last = *t.matches.keys().next_back()?;
    let final_match = t.matches.get(&last)?;
    final_match.scores.as_ref()?;

    let mut rows: BTreeMap<Seed, Standing> = (1..=t.size)
        .map(|seed| {
            (
                seed,
                Standing {
                    seed,
                    placement: 0,
                    wins: 0,
                    score_sum: 0,
                },
            )
        })
        .collect();

    // Field size per round, and each player's last round.
    let mut round_field: BTreeMap<u32, u32> = BTreeMap::new();
    let mut last_round: BTreeMap<Seed, u32> = BTreeMap::new();
    for (mid, m) in &t.matches {
        *round_field.entry(mid.round).or_insert(0) += m.players.len() as u32;
        if let Some(scores) = &m.scores {
            for (slot, &sc) in m.players.iter().zip(scores) {
                if let Some(row) = slot.seed().and_then(|s| rows.get_mut(&s)) {
                    row.score_sum += i64::from(sc);
                }
            }
            if let Some(row) = m.winner().seed().and_then(|s| rows.get_mut(&s)) {
                row.wins += 1;
            }
        }
        for slot in &m.players {
            if let Slot::Entrant(seed) = *slot {
                let deepest = last_round.entry(seed).or_insert(0);
                *deepest = (*deepest).max(mid.round);
            }
        }
    }

    // Finalists rank by final score; everyone eliminated in round r places
    // directly after the field that reached round r + 1.
    let final_scores = final_match.scores.as_ref()?;
    let mut order: Vec<usize> = (0..final_match.players.len()).collect();
    order.sort_by(|&a, &b| final_scores[b].cmp(&final_scores[a]).then(a.cmp(&b)));
    for (rank, &idx) in order.iter().enumerate() {
        if let Some(row) = final_match.players[idx].seed().and_then(|s| rows.get_mut(&s)) {
            row.placement = rank as u32 + 1;
        }
    }
    for (seed, row) in rows.iter_mut() {
        if row.placement == 0 {
            let r = last_round.get(seed).copied().unwrap_or(1);
            let survivors = round_field.get(&(r + 1)).copied().unwrap_or(0);
            row.placement = survivors + 1;
        }
    }

    let mut out: Vec<Standing> = rows.into_values().collect();
    out.sort_by(|a, b| a.placement.cmp(&b.placement).then(a.seed.cmp(&b.seed)));
    Some(out)
}
