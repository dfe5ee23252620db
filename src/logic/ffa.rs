//! FFA bracket construction and round activation.

use crate::logic::groups::groups;
use crate::logic::results;
use crate::models::{
    Bracket, GameMatch, MatchId, Seed, Slot, Tournament, TournamentError,
};
use std::collections::BTreeMap;

/// Materialize all rounds of an FFA elimination bracket.
///
/// Round 1 seats the real seeds per `groups`; later rounds are pending shells
/// of the precomputed group shapes, filled in once the round before them
/// completes. The final round is the one whose partition is a single group.
pub(crate) fn build(
    group_size: u32,
    advancers: u32,
    np: u32,
) -> Result<BTreeMap<MatchId, GameMatch>, TournamentError> {
    if np <= 2 {
        return Err(TournamentError::TooFewPlayers);
    }
    if group_size <= 2 {
        return Err(TournamentError::GroupTooSmall);
    }
    if np <= group_size {
        return Err(TournamentError::TooFewGroups);
    }
    if advancers >= group_size {
        return Err(TournamentError::AdvanceTooLarge);
    }
    if advancers == 0 {
        return Err(TournamentError::AdvanceTooSmall);
    }

    let mut matches = BTreeMap::new();

    let first = groups(group_size, np);
    for (i, grp) in first.iter().enumerate() {
        matches.insert(
            MatchId::new(Bracket::Wb, 1, i as u32 + 1),
            GameMatch::new(grp.iter().map(|&s| Slot::Entrant(s)).collect()),
        );
    }

    let mut sizes: Vec<u32> = first.iter().map(|g| g.len() as u32).collect();
    let mut round = 1;
    while sizes.len() > 1 {
        let adv = effective_advancers(group_size, advancers, &sizes);
        let shape = groups(group_size, sizes.len() as u32 * adv);
        round += 1;
        for (i, grp) in shape.iter().enumerate() {
            matches.insert(
                MatchId::new(Bracket::Wb, round, i as u32 + 1),
                GameMatch::shell(grp.len()),
            );
        }
        sizes = shape.iter().map(|g| g.len() as u32).collect();
    }

    Ok(matches)
}

/// Per-group advancement for a round with the given group sizes: reduced when
/// short groups cannot spare the configured count, but never below one.
fn effective_advancers(group_size: u32, advancers: u32, sizes: &[u32]) -> u32 {
    let min_size = sizes.iter().copied().min().unwrap_or(group_size);
    advancers.saturating_sub(group_size - min_size).max(1)
}

/// Write the scores for one FFA match; when that completes the round, bind
/// the round's advancers to the next round's pending slots.
pub(crate) fn score(
    t: &Tournament,
    mid: MatchId,
    scores: &[i32],
    group_size: u32,
    advancers: u32,
) -> Result<Tournament, TournamentError> {
    let mut next = t.clone();
    {
        let m = next
            .matches
            .get_mut(&mid)
            .ok_or(TournamentError::UnknownMatch(mid))?;
        m.scores = Some(scores.to_vec());
    }

    let round: Vec<(MatchId, GameMatch)> = next
        .matches
        .iter()
        .filter(|(id, _)| id.round == mid.round)
        .map(|(id, m)| (*id, m.clone()))
        .collect();
    let round_done = round.iter().all(|(_, m)| m.scores.is_some());
    let has_next = next
        .matches
        .contains_key(&MatchId::new(Bracket::Wb, mid.round + 1, 1));

    if round_done && has_next {
        activate_next_round(&mut next, &round, mid.round, group_size, advancers);
    }

    next.results = results::compute(&next);
    Ok(next)
}

/// Rank the finished round's advancers and seat them in the next round.
///
/// Advancers are ordered by in-match finishing rank, then by seed, and bound
/// to the next round's groups exactly as `groups` laid them out at build
/// time: the j-th ranked advancer becomes round-seed j.
fn activate_next_round(
    t: &mut Tournament,
    round: &[(MatchId, GameMatch)],
    round_no: u32,
    group_size: u32,
    advancers: u32,
) {
    let sizes: Vec<u32> = round.iter().map(|(_, m)| m.players.len() as u32).collect();
    let adv = effective_advancers(group_size, advancers, &sizes);

    let mut ranked: Vec<(usize, Seed)> = Vec::new();
    for (_, m) in round {
        let scores = match &m.scores {
            Some(s) => s,
            None => continue,
        };
        let mut order: Vec<usize> = (0..m.players.len()).collect();
        order.sort_by(|&a, &b| scores[b].cmp(&scores[a]).then(a.cmp(&b)));
        for (rank, &idx) in order.iter().take(adv as usize).enumerate() {
            if let Slot::Entrant(seed) = m.players[idx] {
                ranked.push((rank, seed));
            }
        }
    }
    ranked.sort_by(|a, b| a.0.cmp(&b.0).then(a.1.cmp(&b.1)));

    let shape = groups(group_size, ranked.len() as u32);
    for (i, grp) in shape.iter().enumerate() {
        let target = MatchId::new(Bracket::Wb, round_no + 1, i as u32 + 1);
        if let Some(m) = t.matches.get_mut(&target) {
            m.players = grp
                .iter()
                .map(|&round_seed| Slot::Entrant(ranked[round_seed as usize - 1].1))
                .collect();
        }
    }
}
