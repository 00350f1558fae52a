//! The two half-steps of a Lloyd iteration.
//!
//! Both steps borrow the current state and hand back new state; neither
//! mutates its inputs. An [`EmptyCluster`] from either step tells the engine
//! to stop in [`Status::Stalled`](super::Status::Stalled).

use thiserror::Error;

use super::util::{argmin, cluster_sizes, first_empty};
use crate::point::Point;

/// A cluster would end up with no members.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("cluster {cluster} has no members")]
pub struct EmptyCluster {
    /// The first empty cluster id.
    pub cluster: usize,
}

/// M-step: recompute the `k` centroids as the mean of their members.
///
/// Fails if any id in `0..k` has no members.
pub fn update_means(
    data: &[Point],
    assignment: &[usize],
    k: usize,
) -> Result<Vec<Point>, EmptyCluster> {
    debug_assert_eq!(data.len(), assignment.len());
    let sizes = cluster_sizes(assignment, k);
    if let Some(cluster) = first_empty(&sizes) {
        return Err(EmptyCluster { cluster });
    }

    let mut sums = vec![Point::ZERO; k];
    for (&p, &c) in data.iter().zip(assignment) {
        sums[c] = sums[c] + p;
    }
    Ok(sums
        .into_iter()
        .zip(sizes)
        .map(|(sum, size)| sum / size as f64)
        .collect())
}

/// Index of the nearest centroid; ties go to the lowest index.
#[inline]
pub fn nearest(p: Point, centroids: &[Point]) -> usize {
    argmin(centroids.iter().map(|&c| p.distance(c)))
}

/// E-step: move every point to its nearest centroid.
///
/// - `Ok(None)`: no point moved; `assignment` is a fixed point.
/// - `Ok(Some(next))`: at least one point moved and every cluster kept a member.
/// - `Err(_)`: the candidate emptied a cluster and was discarded.
pub fn reassign(
    data: &[Point],
    assignment: &[usize],
    centroids: &[Point],
) -> Result<Option<Vec<usize>>, EmptyCluster> {
    debug_assert_eq!(data.len(), assignment.len());
    let candidate: Vec<usize> = data.iter().map(|&p| nearest(p, centroids)).collect();

    if candidate == assignment {
        return Ok(None);
    }

    let sizes = cluster_sizes(&candidate, centroids.len());
    if let Some(cluster) = first_empty(&sizes) {
        return Err(EmptyCluster { cluster });
    }
    Ok(Some(candidate))
}

/// Number of positions where two assignments differ.
pub(crate) fn moved(before: &[usize], after: &[usize]) -> usize {
    before.iter().zip(after).filter(|(a, b)| a != b).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(raw: &[(f64, f64)]) -> Vec<Point> {
        raw.iter().copied().map(Point::from).collect()
    }

    #[test]
    fn test_step_means_of_members() {
        let data = pts(&[(0.0, 0.0), (2.0, 2.0), (10.0, 0.0), (4.0, 4.0)]);
        let means = update_means(&data, &[0, 0, 1, 0], 2).unwrap();
        assert_eq!(means, vec![Point::new(2.0, 2.0), Point::new(10.0, 0.0)]);
    }

    #[test]
    fn test_step_means_reject_empty_cluster() {
        let data = pts(&[(0.0, 0.0), (1.0, 1.0)]);
        assert_eq!(
            update_means(&data, &[0, 0], 2),
            Err(EmptyCluster { cluster: 1 })
        );
        assert_eq!(
            update_means(&data, &[2, 2], 3),
            Err(EmptyCluster { cluster: 0 })
        );
    }

    #[test]
    fn test_step_nearest_breaks_ties_low() {
        let centroids = pts(&[(-1.0, 0.0), (1.0, 0.0), (5.0, 5.0)]);
        assert_eq!(nearest(Point::ZERO, &centroids), 0);
        assert_eq!(nearest(Point::new(0.9, 0.0), &centroids), 1);
        assert_eq!(nearest(Point::new(6.0, 6.0), &centroids), 2);

        let same = pts(&[(1.0, 1.0), (1.0, 1.0)]);
        assert_eq!(nearest(Point::new(3.0, 3.0), &same), 0);
    }

    #[test]
    fn test_step_reassign_reports_changes() {
        let data = pts(&[(0.0, 0.0), (0.1, 0.0), (9.0, 9.0), (9.1, 9.0)]);
        let centroids = pts(&[(0.0, 0.0), (9.0, 9.0)]);

        let next = reassign(&data, &[0, 1, 1, 1], &centroids).unwrap();
        assert_eq!(next, Some(vec![0, 0, 1, 1]));

        let again = reassign(&data, &[0, 0, 1, 1], &centroids).unwrap();
        assert_eq!(again, None);
    }

    #[test]
    fn test_step_reassign_rejects_emptying_candidate() {
        let data = pts(&[(0.0, 0.0), (1.0, 0.0)]);
        let centroids = pts(&[(0.5, 0.0), (0.5, 0.0)]);
        // Both points tie, both go to cluster 0, cluster 1 empties.
        assert_eq!(
            reassign(&data, &[0, 1], &centroids),
            Err(EmptyCluster { cluster: 1 })
        );
    }

    #[test]
    fn test_step_reassign_does_not_touch_input() {
        let data = pts(&[(0.0, 0.0), (5.0, 5.0)]);
        let centroids = pts(&[(5.0, 5.0), (0.0, 0.0)]);
        let before = vec![0, 1];
        let next = reassign(&data, &before, &centroids).unwrap();
        assert_eq!(next, Some(vec![1, 0]));
        assert_eq!(before, vec![0, 1]);
        assert_eq!(moved(&before, &[1, 0]), 2);
    }
}
