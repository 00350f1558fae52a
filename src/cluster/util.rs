/// Index of the strictly smallest value; ties keep the lowest index.
///
/// Returns 0 for an empty input.
#[inline]
pub(crate) fn argmin(values: impl IntoIterator<Item = f64>) -> usize {
    let mut best_idx = 0;
    let mut best_val = f64::INFINITY;
    for (i, v) in values.into_iter().enumerate() {
        if i == 0 || v < best_val {
            best_val = v;
            best_idx = i;
        }
    }
    best_idx
}

/// Number of points carrying each id in `0..k`.
///
/// Ids outside `0..k` are ignored.
pub(crate) fn cluster_sizes(assignment: &[usize], k: usize) -> Vec<usize> {
    let mut sizes = vec![0; k];
    for &c in assignment {
        if let Some(s) = sizes.get_mut(c) {
            *s += 1;
        }
    }
    sizes
}

/// First id with no members.
#[inline]
pub(crate) fn first_empty(sizes: &[usize]) -> Option<usize> {
    sizes.iter().position(|&s| s == 0)
}
