//! Round-robin schedules: round counts, per-round uniqueness, full coverage.

use bracket_engine::robin;
use std::collections::HashSet;

#[test]
fn four_players_three_rounds() {
    let rounds = robin(4);
    assert_eq!(rounds.len(), 3);
    for round in &rounds {
        assert_eq!(round.len(), 2);
    }
    let pairs: HashSet<(u32, u32)> = rounds
        .iter()
        .flatten()
        .map(|&(a, b)| (a.min(b), a.max(b)))
        .collect();
    let expected: HashSet<(u32, u32)> =
        [(1, 2), (1, 3), (1, 4), (2, 3), (2, 4), (3, 4)].into();
    assert_eq!(pairs, expected);
}

#[test]
fn round_count_matches_parity() {
    for n in 2..=16u32 {
        let expected = if n % 2 == 0 { n - 1 } else { n };
        assert_eq!(robin(n).len() as u32, expected, "n={n}");
    }
}

#[test]
fn each_round_pairs_half_the_field_at_most_once() {
    for n in 2..=16u32 {
        for (i, round) in robin(n).iter().enumerate() {
            assert_eq!(round.len() as u32, n / 2, "n={n} round={i}");
            let mut seen = HashSet::new();
            for &(a, b) in round {
                assert!(seen.insert(a), "player {a} twice in round {i} (n={n})");
                assert!(seen.insert(b), "player {b} twice in round {i} (n={n})");
            }
        }
    }
}

#[test]
fn every_pair_meets_exactly_once() {
    for n in 2..=16u32 {
        let mut pairs = HashSet::new();
        for round in robin(n) {
            for (a, b) in round {
                assert!(
                    pairs.insert((a.min(b), a.max(b))),
                    "repeat pairing {a}-{b} (n={n})"
                );
            }
        }
        assert_eq!(pairs.len() as u32, n * (n - 1) / 2, "n={n}");
    }
}
