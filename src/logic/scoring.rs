//! Score reporting and propagation: advancing winners, dropping losers into
//! the losers' bracket, and cascading walkovers.

use crate::logic::duel::pow_of;
use crate::logic::{ffa, results};
use crate::models::{
    Bracket, Elimination, GameMatch, MatchId, Rules, Slot, Tournament, TournamentError,
};

/// Score the match `mid` and return the updated snapshot.
pub(crate) fn score(
    t: &Tournament,
    mid: MatchId,
    scores: &[i32],
) -> Result<Tournament, TournamentError> {
    let m = t
        .matches
        .get(&mid)
        .ok_or(TournamentError::UnknownMatch(mid))?;
    if !m.is_scorable() {
        return Err(TournamentError::MatchNotReady(mid));
    }
    if scores.len() != m.players.len() {
        return Err(TournamentError::ScoreArityMismatch {
            expected: m.players.len(),
            got: scores.len(),
        });
    }

    match t.rules {
        Rules::Duel { elimination } => {
            if scores[0] == scores[1] {
                return Err(TournamentError::TieNotPermitted);
            }
            score_duel(t, mid, scores, elimination)
        }
        Rules::Ffa {
            group_size,
            advancers,
        } => ffa::score(t, mid, scores, group_size, advancers),
    }
}

fn score_duel(
    t: &Tournament,
    mid: MatchId,
    scores: &[i32],
    elimination: Elimination,
) -> Result<Tournament, TournamentError> {
    let p = pow_of(t.size);
    let mut next = t.clone();

    let scored = {
        let m = next
            .matches
            .get_mut(&mid)
            .ok_or(TournamentError::UnknownMatch(mid))?;
        m.scores = Some(scores.to_vec());
        m.clone()
    };

    let mut walkovers = Vec::new();
    if let Some((target, pos)) = m_right(true, elimination, p, mid, &scored)? {
        if place(&mut next, target, pos, scored.winner())? {
            walkovers.push(target);
        }
    }
    if let Some((target, pos)) = m_down(elimination, p, mid)? {
        if place(&mut next, target, pos, scored.loser())? {
            walkovers.push(target);
        }
    }
    for w in walkovers {
        cascade(&mut next, w, elimination, p)?;
    }

    next.results = results::compute(&next);
    Ok(next)
}

/// Write `slot` into `target` at `pos`, keeping the other slot. Returns true
/// when the write produced a walkover score, in which case the new occupant
/// has to cascade onward.
fn place(
    t: &mut Tournament,
    target: MatchId,
    pos: usize,
    slot: Slot,
) -> Result<bool, TournamentError> {
    let m = t
        .matches
        .get_mut(&target)
        .ok_or(TournamentError::BadMatchId(target))?;
    let had_scores = m.scores.is_some();
    m.set_slot(pos, slot);
    Ok(!had_scores && m.scores.is_some())
}

/// Push the winner of a freshly walkover-scored match onward, repeatedly. The
/// GF1 short-circuit is disabled here so a cascade into a pending grand final
/// still completes.
fn cascade(
    t: &mut Tournament,
    mid: MatchId,
    elimination: Elimination,
    p: u32,
) -> Result<(), TournamentError> {
    let m = match t.matches.get(&mid) {
        Some(m) => m.clone(),
        None => return Ok(()),
    };
    if let Some((target, pos)) = m_right(false, elimination, p, mid, &m)? {
        if place(t, target, pos, m.winner())? {
            cascade(t, target, elimination, p)?;
        }
    }
    Ok(())
}

/// The match the winner of `mid` advances to and the slot index it occupies
/// there, or `None` when `mid` is terminal.
///
/// With `check_gf1` set, a grand final whose top (WB-side) slot holds the
/// maximal score is terminal: the WB champion has now won twice and the
/// bracket reset is not played.
fn m_right(
    check_gf1: bool,
    elimination: Elimination,
    p: u32,
    mid: MatchId,
    m: &GameMatch,
) -> Result<Option<(MatchId, usize)>, TournamentError> {
    let MatchId { bracket, round: r, game: g } = mid;
    if r < 1 || g < 1 {
        return Err(TournamentError::BadMatchId(mid));
    }

    let terminal = match bracket {
        Bracket::Wb => r > p || (elimination == Elimination::Single && r == p),
        Bracket::Lb => {
            r >= 2 * p
                || (r == 2 * p - 1
                    && check_gf1
                    && m.scores
                        .as_ref()
                        .is_some_and(|s| s.first() == s.iter().max()))
        }
    };
    if terminal {
        return Ok(None);
    }

    let (target, pos) = match bracket {
        // The WB champion meets the LB survivor in GF1.
        Bracket::Wb if elimination == Elimination::Double && r == p => {
            (MatchId::new(Bracket::Lb, 2 * p - 1, 1), 0)
        }
        Bracket::Wb => (
            MatchId::new(Bracket::Wb, r + 1, g.div_ceil(2)),
            if g % 2 == 1 { 0 } else { 1 },
        ),
        Bracket::Lb if r == 2 * p - 2 => (MatchId::new(Bracket::Lb, 2 * p - 1, 1), 1),
        // The LB side won GF1; the bracket reset decides it all.
        Bracket::Lb if r == 2 * p - 1 => (MatchId::new(Bracket::Lb, 2 * p, 1), 0),
        // Odd LB rounds feed the next drop round one-to-one; round 1
        // alternates the occupied side to mirror the WB drop positions.
        Bracket::Lb if r % 2 == 1 => (
            MatchId::new(Bracket::Lb, r + 1, g),
            if r == 1 && g % 2 == 0 { 0 } else { 1 },
        ),
        // Even LB rounds contract: their winners pair up.
        Bracket::Lb => (
            MatchId::new(Bracket::Lb, r + 1, g.div_ceil(2)),
            if g % 2 == 1 { 0 } else { 1 },
        ),
    };
    Ok(Some((target, pos)))
}

/// The LB slot the loser of `mid` drops into, or `None` when the loser is out
/// (single elimination, LB sources) or never existed (extinct WB rounds).
fn m_down(
    elimination: Elimination,
    p: u32,
    mid: MatchId,
) -> Result<Option<(MatchId, usize)>, TournamentError> {
    let MatchId { bracket, round: r, game: g } = mid;
    if r < 1 || g < 1 {
        return Err(TournamentError::BadMatchId(mid));
    }
    if elimination == Elimination::Single {
        return Ok(None);
    }
    // The GF1 loser gets the bracket reset.
    if bracket == Bracket::Lb && r == 2 * p - 1 {
        return Ok(Some((MatchId::new(Bracket::Lb, 2 * p, 1), 1)));
    }
    if bracket == Bracket::Lb || r > p {
        return Ok(None);
    }

    let pos = if r > 2 || g % 2 == 1 { 0 } else { 1 };
    let target = if r == 1 {
        MatchId::new(Bracket::Lb, 1, g.div_ceil(2))
    } else {
        MatchId::new(Bracket::Lb, 2 * (r - 1), g)
    };
    Ok(Some((target, pos)))
}
