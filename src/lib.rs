//! Deterministic k-means for 2D points.
//!
//! `lloyd` partitions a fixed set of plane points into `k` clusters with
//! Lloyd's algorithm. Seeding is positional rather than random, so identical
//! inputs always follow the same trajectory.
//!
//! The primary public API is under [`cluster`], which provides:
//! - [`cluster()`] / [`Kmeans`]: run the iteration and get one label per point
//! - [`group_by_cluster`]: split the original points by label
//! - [`KmeansFit`]: labels plus the terminal [`Status`] and iteration count

#![forbid(unsafe_code)]

pub mod cluster;
pub mod error;
pub mod point;

pub use cluster::{
    cluster, group_by_cluster, Clustering, Kmeans, KmeansFit, Status,
};
pub use error::{Error, Result};
pub use point::{Axis, Point};
