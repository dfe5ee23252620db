//! Seeding: perfect round-1 pairings for every bracket size up to 2^8.

use bracket_engine::{duel_expected, seeds};

#[test]
fn last_match_of_eight_player_bracket() {
    assert_eq!(seeds(3, 4), (7, 2));
}

#[test]
fn full_round_one_of_eight_player_bracket() {
    let row: Vec<_> = (1..=4).map(|i| seeds(3, i)).collect();
    assert_eq!(row, vec![(1, 8), (5, 4), (3, 6), (7, 2)]);
}

#[test]
fn every_pairing_is_perfect_up_to_p8() {
    for p in 1..=8u32 {
        for i in 1..=(1u32 << (p - 1)) {
            let pair = seeds(p, i);
            assert!(duel_expected(p, pair), "p={p} i={i} pair={pair:?}");
        }
    }
}

#[test]
fn pairings_cover_every_seed_exactly_once() {
    for p in 1..=8u32 {
        let mut seen: Vec<u32> = (1..=(1u32 << (p - 1)))
            .flat_map(|i| {
                let (a, b) = seeds(p, i);
                [a, b]
            })
            .collect();
        seen.sort_unstable();
        assert_eq!(seen, (1..=(1u32 << p)).collect::<Vec<_>>(), "p={p}");
    }
}

#[test]
fn top_seeds_fall_in_opposite_halves() {
    // Seeds 1 and 2 can only meet in the final: they start in games from
    // opposite halves of round 1.
    for p in 2..=8u32 {
        let half = 1u32 << (p - 2);
        let mut game_of_1 = 0;
        let mut game_of_2 = 0;
        for i in 1..=(1u32 << (p - 1)) {
            let (a, b) = seeds(p, i);
            if a == 1 || b == 1 {
                game_of_1 = i;
            }
            if a == 2 || b == 2 {
                game_of_2 = i;
            }
        }
        assert!(game_of_1 <= half && game_of_2 > half, "p={p}");
    }
}
