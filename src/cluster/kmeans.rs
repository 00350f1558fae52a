//! The Lloyd iteration driver.
//!
//! ```text
//! Initializing ──► Iterating ──┬──► Converged            (no point moved)
//!                     ▲        ├──► Stalled              (a cluster emptied)
//!                     └────────┤
//!                              └──► IterationCapReached  (factor × N rounds)
//! ```
//!
//! Every terminal state hands back an assignment. Only input validation and
//! normalization can fail outright.

use log::{debug, trace};

use super::normalize::normalize;
use super::seed::initial_assignment;
use super::step::{moved, reassign, update_means};
use super::traits::Clustering;
use super::util::cluster_sizes;
use crate::error::{Error, Result};
use crate::point::Point;

/// Default multiplier for the iteration cap (`cap = factor × N`).
pub const DEFAULT_ITERATION_FACTOR: usize = 10;

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// A reassignment moved no point.
    Converged,
    /// A mean update or reassignment would have left a cluster empty.
    Stalled,
    /// The iteration cap was hit before either of the above.
    IterationCapReached,
}

/// K-means over plane points with positional seeding.
#[derive(Debug, Clone)]
pub struct Kmeans {
    k: usize,
    iteration_factor: usize,
    max_iter: Option<usize>,
}

/// Outcome of [`Kmeans::fit`].
#[derive(Debug, Clone, PartialEq)]
pub struct KmeansFit {
    /// Cluster id per input point, in input order.
    pub assignment: Vec<usize>,
    /// Terminal state of the run.
    pub status: Status,
    /// Number of rounds started.
    pub iterations: usize,
    /// Last successfully computed centroids, in normalized coordinates.
    ///
    /// `None` if the first mean update already found an empty cluster.
    pub centroids: Option<Vec<Point>>,
    k: usize,
}

impl KmeansFit {
    /// Number of clusters the fit was asked for.
    pub fn k(&self) -> usize {
        self.k
    }

    /// True if the run ended in [`Status::Converged`].
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }

    /// Member count of each cluster.
    pub fn cluster_sizes(&self) -> Vec<usize> {
        cluster_sizes(&self.assignment, self.k)
    }

    /// True if one more reassignment against the final centroids moves no point.
    ///
    /// `points` must be the raw data this fit was computed from. A fit without
    /// centroids is never stable.
    pub fn is_stable(&self, points: &[Point]) -> Result<bool> {
        if points.len() != self.assignment.len() {
            return Err(Error::LengthMismatch {
                expected: self.assignment.len(),
                found: points.len(),
            });
        }
        let Some(centroids) = self.centroids.as_ref() else {
            return Ok(false);
        };
        let normalized = normalize(points)?;
        Ok(matches!(
            reassign(&normalized, &self.assignment, centroids),
            Ok(None)
        ))
    }

    /// Group the original `points` by this fit's assignment.
    pub fn groups(&self, points: &[Point]) -> Result<Vec<Vec<Point>>> {
        group_by_cluster(points, &self.assignment, self.k)
    }
}

impl Kmeans {
    /// Create a k-means clusterer with `k` clusters.
    pub fn new(k: usize) -> Self {
        Self {
            k,
            iteration_factor: DEFAULT_ITERATION_FACTOR,
            max_iter: None,
        }
    }

    /// Set the number of clusters.
    pub fn with_k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    /// Set the iteration cap multiplier (`cap = factor × N`).
    pub fn with_iteration_factor(mut self, factor: usize) -> Self {
        self.iteration_factor = factor;
        self
    }

    /// Set an absolute iteration cap, overriding `factor × N`.
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = Some(max_iter);
        self
    }

    fn cap(&self, n: usize) -> usize {
        self.max_iter
            .unwrap_or_else(|| self.iteration_factor.saturating_mul(n))
    }

    fn validate(&self, data: &[Point]) -> Result<()> {
        if data.is_empty() {
            return Err(Error::EmptyInput);
        }
        if self.k == 0 {
            return Err(Error::InvalidParameter {
                name: "k",
                message: "must be at least 1",
            });
        }
        if self.iteration_factor == 0 {
            return Err(Error::InvalidParameter {
                name: "iteration_factor",
                message: "must be at least 1",
            });
        }
        if self.max_iter == Some(0) {
            return Err(Error::InvalidParameter {
                name: "max_iter",
                message: "must be at least 1",
            });
        }
        if let Some(index) = data.iter().position(|p| !p.is_finite()) {
            return Err(Error::NonFiniteInput { index });
        }
        Ok(())
    }

    /// Run Lloyd's algorithm on `data`.
    pub fn fit(&self, data: &[Point]) -> Result<KmeansFit> {
        self.validate(data)?;
        let k = self.k;
        let n = data.len();

        let normalized = normalize(data)?;
        let mut assignment = initial_assignment(n, k);
        let cap = self.cap(n);
        debug!("k-means: n={n} k={k} cap={cap}");

        let mut centroids = None;
        let mut iterations = 0;
        let status = loop {
            if iterations >= cap {
                break Status::IterationCapReached;
            }
            iterations += 1;

            let means = match update_means(&normalized, &assignment, k) {
                Ok(means) => means,
                Err(e) => {
                    debug!("k-means: mean update stalled at iteration {iterations}: {e}");
                    break Status::Stalled;
                }
            };

            let step = reassign(&normalized, &assignment, &means);
            centroids = Some(means);
            match step {
                Ok(None) => break Status::Converged,
                Ok(Some(next)) => {
                    trace!(
                        "k-means: iteration {iterations} moved {} points",
                        moved(&assignment, &next)
                    );
                    assignment = next;
                }
                Err(e) => {
                    debug!("k-means: reassignment stalled at iteration {iterations}: {e}");
                    break Status::Stalled;
                }
            }
        };
        debug!("k-means: {status:?} after {iterations} iterations");

        Ok(KmeansFit {
            assignment,
            status,
            iterations,
            centroids,
            k,
        })
    }
}

impl Default for Kmeans {
    fn default() -> Self {
        Self::new(3)
    }
}

impl Clustering for Kmeans {
    fn fit_predict(&self, data: &[Point]) -> Result<Vec<usize>> {
        Ok(self.fit(data)?.assignment)
    }

    fn n_clusters(&self) -> usize {
        self.k
    }
}

/// Cluster `points` into `k` groups and return one id per point.
pub fn cluster(points: &[Point], k: usize) -> Result<Vec<usize>> {
    Kmeans::new(k).fit_predict(points)
}

/// Split `points` into `k` groups by `assignment`, keeping input order within each group.
pub fn group_by_cluster(
    points: &[Point],
    assignment: &[usize],
    k: usize,
) -> Result<Vec<Vec<Point>>> {
    if assignment.len() != points.len() {
        return Err(Error::LengthMismatch {
            expected: points.len(),
            found: assignment.len(),
        });
    }

    let mut groups = vec![Vec::new(); k];
    for (index, (&p, &cluster)) in points.iter().zip(assignment).enumerate() {
        match groups.get_mut(cluster) {
            Some(group) => group.push(p),
            None => return Err(Error::InvalidClusterId { index, cluster, k }),
        }
    }
    Ok(groups)
}
