//! Initial assignment.
//!
//! Seeding is positional and deterministic. The first `k` positions are split
//! into thirds of the range `0..k`, labelled 0, 1 and 2 in turn; every other
//! point starts in cluster 0.
//!
//! For `k = 3` this seeds points 0, 1 and 2 into clusters 0, 1 and 2 and puts
//! everything else into cluster 0. For `k > 3` only ids 0..=2 are ever handed
//! out, so clusters 3.. start empty and the first mean update stalls. That is
//! the reference behaviour and is kept as-is: changing it changes every
//! downstream trajectory.

/// Build the starting assignment for `n` points and `k` clusters.
///
/// Ids that the third-split would place above `k - 1` (only possible for
/// `k < 3`) are clamped to `k - 1`. `k` must be at least 1.
pub fn initial_assignment(n: usize, k: usize) -> Vec<usize> {
    debug_assert!(k >= 1);
    let top = k.saturating_sub(1);
    let third = k / 3;

    let mut assignment = vec![0; n];
    for (i, slot) in assignment.iter_mut().enumerate().take(k) {
        let id = if i < third {
            0
        } else if i < 2 * third {
            1
        } else {
            2
        };
        *slot = id.min(top);
    }
    assignment
}
