//! FFA elimination: parameter validation, round shapes, advancement binding,
//! and the degenerate standings.

use bracket_engine::{Bracket, MatchId, Rules, Slot, Tournament, TournamentError};

fn ffa(group_size: u32, advancers: u32, np: u32) -> Result<Tournament, TournamentError> {
    Tournament::new(
        Rules::Ffa {
            group_size,
            advancers,
        },
        np,
    )
}

fn game(round: u32, game: u32) -> MatchId {
    MatchId::new(Bracket::Wb, round, game)
}

fn entrants(t: &Tournament, id: &MatchId) -> Vec<u32> {
    t.match_at(id)
        .unwrap()
        .players
        .iter()
        .filter_map(|s| s.seed())
        .collect()
}

#[test]
fn parameter_validation() {
    assert!(matches!(ffa(3, 1, 2), Err(TournamentError::TooFewPlayers)));
    assert!(matches!(ffa(2, 1, 10), Err(TournamentError::GroupTooSmall)));
    assert!(matches!(ffa(4, 1, 4), Err(TournamentError::TooFewGroups)));
    assert!(matches!(ffa(4, 4, 10), Err(TournamentError::AdvanceTooLarge)));
    assert!(matches!(ffa(4, 0, 10), Err(TournamentError::AdvanceTooSmall)));
}

#[test]
fn sixteen_player_round_shapes() {
    let t = ffa(4, 2, 16).unwrap();
    let counts: Vec<usize> = (1..=3)
        .map(|r| t.keys().filter(|k| k.round == r).count())
        .collect();
    assert_eq!(counts, vec![4, 2, 1]);
    assert_eq!(t.keys().count(), 7);

    // Round 1 seats the seeds in balanced groups.
    assert_eq!(entrants(&t, &game(1, 1)), vec![1, 5, 12, 16]);
    assert_eq!(entrants(&t, &game(1, 4)), vec![4, 8, 9, 13]);

    // Later rounds wait for advancers.
    let shell = t.match_at(&game(2, 1)).unwrap();
    assert_eq!(shell.players, vec![Slot::Empty; 4]);
    assert!(matches!(
        t.score(game(2, 1), &[4, 3, 2, 1]),
        Err(TournamentError::MatchNotReady(_))
    ));
}

#[test]
fn finished_round_binds_advancers_to_the_next() {
    let mut t = ffa(4, 2, 16).unwrap();
    for g in 1..=4 {
        t = t.score(game(1, g), &[4, 3, 2, 1]).unwrap();
    }
    // The top two of each group advance; group winners take the best slots
    // of the next round's balanced partition.
    assert_eq!(entrants(&t, &game(2, 1)), vec![1, 3, 6, 8]);
    assert_eq!(entrants(&t, &game(2, 2)), vec![2, 4, 5, 7]);
    assert!(t.results().is_none());
}

#[test]
fn ffa_ties_are_allowed() {
    let t = ffa(4, 2, 16).unwrap();
    assert!(t.score(game(1, 1), &[4, 4, 1, 1]).is_ok());
}

#[test]
fn full_playthrough_produces_standings() {
    let mut t = ffa(4, 2, 16).unwrap();
    for g in 1..=4 {
        t = t.score(game(1, g), &[4, 3, 2, 1]).unwrap();
    }
    for g in 1..=2 {
        t = t.score(game(2, g), &[4, 3, 2, 1]).unwrap();
    }
    assert_eq!(entrants(&t, &game(3, 1)), vec![1, 2, 3, 4]);
    t = t.score(game(3, 1), &[4, 3, 2, 1]).unwrap();

    let results = t.results().unwrap();
    assert_eq!(results.len(), 16);
    let rows: Vec<(u32, u32)> = results.iter().map(|s| (s.seed, s.placement)).collect();
    // Finalists rank by final score; the rest place after the field that
    // outlasted them.
    assert_eq!(&rows[..4], &[(1, 1), (2, 2), (3, 3), (4, 4)]);
    for &(seed, placement) in &rows[4..8] {
        assert!(seed >= 5 && seed <= 8);
        assert_eq!(placement, 5);
    }
    for &(seed, placement) in &rows[8..] {
        assert!(seed >= 9);
        assert_eq!(placement, 9);
    }

    let champion = &results[0];
    assert_eq!(champion.wins, 3);
    assert_eq!(champion.score_sum, 12);
}

#[test]
fn short_groups_reduce_advancement() {
    // groups(3, 10) leaves two groups of two, so only the group winner
    // advances even though two were requested.
    let t = ffa(3, 2, 10).unwrap();
    let counts: Vec<usize> = (1..=3)
        .map(|r| t.keys().filter(|k| k.round == r).count())
        .collect();
    assert_eq!(counts, vec![4, 2, 1]);
    let sizes: Vec<usize> = t
        .keys()
        .filter(|k| k.round == 1)
        .map(|k| t.match_at(k).unwrap().players.len())
        .collect();
    assert_eq!(sizes, vec![2, 2, 3, 3]);
}
