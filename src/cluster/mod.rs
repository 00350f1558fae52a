//! K-means clustering for points in the plane.
//!
//! ## Lloyd's algorithm
//!
//! Assign each point to the nearest centroid, then move each centroid to the
//! mean of its points. Repeat until no point moves.
//!
//! **Objective**: minimize the within-cluster sum of squares:
//!
//! ```text
//! J = Σ_k Σ_{x ∈ C_k} ||x - μ_k||²
//! ```
//!
//! Each half-step can only lower `J`, so the iteration reaches a fixed point.
//! An iteration cap (`10 × N` by default) bounds the run regardless.
//!
//! ## Pipeline
//!
//! 1. [`normalize`]: center each axis and divide by its population variance.
//! 2. [`initial_assignment`]: deterministic positional seeding.
//! 3. Mean update (M-step) and nearest-centroid reassignment (E-step),
//!    alternated by [`Kmeans::fit`]. [`KmeansFit::is_stable`] replays one more
//!    reassignment against the final centroids.
//! 4. [`group_by_cluster`]: collect the *raw* points per cluster.
//!
//! Clusters are never allowed to go empty. When an update would empty one, the
//! run stops in [`Status::Stalled`] and keeps the last valid assignment.
//!
//! ## Usage
//!
//! ```rust
//! use lloyd::cluster::{group_by_cluster, Clustering, Kmeans, Point};
//!
//! let data = vec![
//!     Point::new(10.0, 10.0),
//!     Point::new(10.5, 10.0),
//!     Point::new(0.0, 0.0),
//!     Point::new(0.5, 0.0),
//!     Point::new(0.0, 0.5),
//!     Point::new(10.0, 10.5),
//! ];
//!
//! let labels = Kmeans::new(2).fit_predict(&data).unwrap();
//! assert_eq!(labels[0], labels[1]);
//! assert_ne!(labels[0], labels[2]);
//!
//! let groups = group_by_cluster(&data, &labels, 2).unwrap();
//! assert_eq!(groups.iter().map(Vec::len).sum::<usize>(), data.len());
//! ```

mod kmeans;
mod normalize;
mod seed;
pub(crate) mod step;
mod traits;
mod util;

pub use crate::point::{Axis, Point};
pub use kmeans::{
    cluster, group_by_cluster, Kmeans, KmeansFit, Status, DEFAULT_ITERATION_FACTOR,
};
pub use normalize::{normalize, Scaling};
pub use seed::initial_assignment;
pub use traits::Clustering;
