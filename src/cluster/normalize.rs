//! Per-axis scaling applied before clustering.
//!
//! Each coordinate is centered on the dataset mean and divided by the
//! population variance of that axis:
//!
//! ```text
//! z = (p - mean) / var,    var = Σ (p - mean)² / N
//! ```
//!
//! Note the divisor is the variance, not the standard deviation. Distances in
//! the scaled space therefore shrink the axis with the larger spread more
//! aggressively than a textbook z-score would. The clustering trajectory
//! depends on this exact scaling.

use crate::error::{Error, Result};
use crate::point::{Axis, Point};

/// Summary statistics of a dataset, per axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scaling {
    /// Mean point.
    pub mean: Point,
    /// Population variance of each coordinate.
    pub variance: Point,
}

impl Scaling {
    /// Measure `points`.
    ///
    /// Fails with [`Error::DegenerateInput`] when every point shares the same
    /// coordinate along some axis, and with [`Error::NumericOverflow`] when the
    /// mean or variance of an axis is not finite. The x axis is checked first.
    pub fn fit(points: &[Point]) -> Result<Self> {
        if points.is_empty() {
            return Err(Error::EmptyInput);
        }
        let n = points.len() as f64;
        let mean = points.iter().sum::<Point>() / n;
        let variance = points.iter().map(|&p| p.squared_diff(mean)).sum::<Point>() / n;

        for axis in [Axis::X, Axis::Y] {
            if !mean.get(axis).is_finite() || !variance.get(axis).is_finite() {
                return Err(Error::NumericOverflow { axis });
            }
            if variance.get(axis) == 0.0 {
                return Err(Error::DegenerateInput { axis });
            }
        }
        Ok(Self { mean, variance })
    }

    /// Scale one point.
    #[inline]
    pub fn apply(&self, p: Point) -> Point {
        (p - self.mean) / self.variance
    }
}

/// Scale every point of `points`, preserving order.
pub fn normalize(points: &[Point]) -> Result<Vec<Point>> {
    let scaling = Scaling::fit(points)?;
    Ok(points.iter().map(|&p| scaling.apply(p)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_divides_by_variance() {
        // mean (1, 2), variance (1, 4)
        let data = [Point::new(0.0, 0.0), Point::new(2.0, 4.0)];
        let out = normalize(&data).unwrap();
        assert_eq!(out, vec![Point::new(-1.0, -0.5), Point::new(1.0, 0.5)]);
    }

    #[test]
    fn test_normalize_scaling_statistics() {
        let data = [
            Point::new(1.0, 10.0),
            Point::new(2.0, 20.0),
            Point::new(3.0, 30.0),
            Point::new(6.0, 40.0),
        ];
        let s = Scaling::fit(&data).unwrap();
        assert_eq!(s.mean, Point::new(3.0, 25.0));
        // x deviations: -2 -1 0 3 -> 14/4; y deviations: -15 -5 5 15 -> 500/4
        assert_eq!(s.variance, Point::new(3.5, 125.0));
    }

    #[test]
    fn test_normalize_output_is_centered() {
        let data = [
            Point::new(65.0, 220.0),
            Point::new(73.0, 160.0),
            Point::new(59.0, 110.0),
            Point::new(61.0, 120.0),
        ];
        let out = normalize(&data).unwrap();
        assert_eq!(out.len(), data.len());
        let mean = out.iter().sum::<Point>() / out.len() as f64;
        assert!(mean.x.abs() < 1e-12);
        assert!(mean.y.abs() < 1e-12);
    }

    #[test]
    fn test_normalize_deterministic() {
        let data = [Point::new(1.5, -3.0), Point::new(7.0, 2.0), Point::new(-4.0, 9.5)];
        assert_eq!(normalize(&data).unwrap(), normalize(&data).unwrap());
    }

    #[test]
    fn test_normalize_zero_variance_is_degenerate() {
        let same_x = [Point::new(5.0, 1.0), Point::new(5.0, 2.0), Point::new(5.0, 3.0)];
        assert_eq!(
            normalize(&same_x),
            Err(Error::DegenerateInput { axis: Axis::X })
        );

        let same_y = [Point::new(1.0, 5.0), Point::new(2.0, 5.0)];
        assert_eq!(
            normalize(&same_y),
            Err(Error::DegenerateInput { axis: Axis::Y })
        );

        // A single point has zero spread on both axes.
        assert!(normalize(&[Point::new(1.0, 2.0)]).is_err());
    }

    #[test]
    fn test_normalize_overflowing_statistics() {
        // The x sum overflows, so the mean is infinite.
        let huge_mean = [
            Point::new(1e308, 0.0),
            Point::new(1e308, 1.0),
            Point::new(1.7e308, 2.0),
        ];
        assert_eq!(
            normalize(&huge_mean),
            Err(Error::NumericOverflow { axis: Axis::X })
        );

        // The mean is finite but the squared deviations overflow.
        let huge_spread = [
            Point::new(1e200, 0.0),
            Point::new(-1e200, 1.0),
            Point::new(0.0, 2.0),
        ];
        assert_eq!(
            normalize(&huge_spread),
            Err(Error::NumericOverflow { axis: Axis::X })
        );

        let y_spread = [Point::new(0.0, 1e200), Point::new(1.0, -1e200)];
        assert_eq!(
            Scaling::fit(&y_spread),
            Err(Error::NumericOverflow { axis: Axis::Y })
        );
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize(&[]), Err(Error::EmptyInput));
    }
}
