//! Round-robin schedules via the circle method.

use crate::models::Seed;

/// The pairings of each round of a round-robin over players `[1..n]`:
/// `n - 1` rounds when `n` is even, `n` rounds (one sit-out per round) when
/// odd. Every player meets every other player exactly once.
pub fn robin(n: u32) -> Vec<Vec<(Seed, Seed)>> {
    if n < 2 {
        return Vec::new();
    }
    // Odd fields are padded with a dummy player n + 1; its pairings are
    // dropped, which sits one player out per round.
    let m = if n % 2 == 1 { n + 1 } else { n };
    let half = (m / 2) as usize;
    let mut order: Vec<Seed> = (1..=m).collect();

    (0..m - 1)
        .map(|_| {
            let round = (0..half)
                .map(|j| (order[j], order[m as usize - 1 - j]))
                .filter(|&(a, b)| a <= n && b <= n)
                .collect();
            // Fix the head, rotate the tail by one.
            if let Some(last) = order.pop() {
                order.insert(1, last);
            }
            round
        })
        .collect()
}
