//! Balanced group assignment: partition `[1..n]` into groups with near-equal
//! seed sums.

use crate::models::Seed;

/// Partition `[1..n]` into `ceil(n/s)` groups of size at most `s`.
///
/// 1. Shrink `s` to the smallest size that still fills at least one group.
/// 2. Pair seeds `(1, modl), (2, modl-1), ...` over the padded model
///    `[1..modl]` so each pair sums to `modl + 1`.
/// 3. Deal each group one leftover middle seed (odd sizes only) plus every
///    `ngrps`-th pair.
/// 4. Drop padding seeds `> n` and sort ascending.
///
/// When `s` divides `n` the group seed sums differ by at most `ngrps`, and
/// are equal when `s` is also even.
pub fn groups(s: u32, n: u32) -> Vec<Vec<Seed>> {
    if s == 0 || n == 0 {
        return Vec::new();
    }
    let ngrps = n.div_ceil(s);
    let gs = n.div_ceil(ngrps);
    let modl = ngrps * gs;
    let npairs = ngrps * (gs / 2);

    (1..=ngrps)
        .map(|i| {
            let mut grp = Vec::with_capacity(gs as usize);
            if gs % 2 == 1 {
                grp.push(npairs + i);
            }
            let mut a = i;
            while a <= npairs {
                grp.push(a);
                grp.push(modl + 1 - a);
                a += ngrps;
            }
            grp.retain(|&x| x <= n);
            grp.sort_unstable();
            grp
        })
        .collect()
}
