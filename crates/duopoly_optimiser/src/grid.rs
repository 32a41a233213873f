//! Inclusive linear grids.
//!
//! Points are generated as `min + i * step` for integer `i`. Repeatedly
//! adding a fractional step drifts and can drop or add the final sample;
//! indexing keeps the sample count stable.

use crate::OptimiserError;

/// Slack allowed when deciding whether `max` itself lies on the grid.
const GRID_TOLERANCE: f64 = 1e-9;

/// Upper bound on the number of points a grid may produce.
pub const MAX_GRID_POINTS: usize = 1_000_000;

/// Evenly spaced samples over `[min, max]`, both ends included when `max`
/// lies on the grid.
///
/// # Examples
///
/// ```
/// use duopoly_optimiser::LinearGrid;
///
/// let prices = LinearGrid::reference_prices();
/// assert_eq!(prices.len(), 300);
/// assert_eq!(prices.point(0), 10.0);
/// assert_eq!(prices.point(299), 3000.0);
///
/// let qualities = LinearGrid::reference_qualities();
/// assert_eq!(qualities.len(), 55);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinearGrid {
    /// First sample
    pub min: f64,
    /// Last admissible sample
    pub max: f64,
    /// Distance between samples
    pub step: f64,
}

impl LinearGrid {
    /// Create a grid without validating it.
    pub fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    /// Reference price grid: 10 to 3000 in steps of 10.
    pub fn reference_prices() -> Self {
        Self::new(10.0, 3000.0, 10.0)
    }

    /// Reference quality grid: 0.5 to 5.9 in steps of 0.1.
    pub fn reference_qualities() -> Self {
        Self::new(0.5, 5.9, 0.1)
    }

    /// Check that the grid can be scanned.
    ///
    /// # Errors
    ///
    /// Returns [`OptimiserError::InvalidGrid`] for non-finite values, a
    /// non-positive step, `min > max`, or more than [`MAX_GRID_POINTS`] samples.
    pub fn validate(&self, name: &'static str) -> Result<(), OptimiserError> {
        if !(self.min.is_finite() && self.max.is_finite() && self.step.is_finite()) {
            return Err(OptimiserError::invalid_grid(
                name,
                format!(
                    "bounds and step must be finite (min={}, max={}, step={})",
                    self.min, self.max, self.step
                ),
            ));
        }
        if self.step <= 0.0 {
            return Err(OptimiserError::invalid_grid(
                name,
                format!("step must be positive (got {})", self.step),
            ));
        }
        if self.min > self.max {
            return Err(OptimiserError::invalid_grid(
                name,
                format!("min {} exceeds max {}", self.min, self.max),
            ));
        }
        if (self.max - self.min) / self.step >= MAX_GRID_POINTS as f64 {
            return Err(OptimiserError::invalid_grid(
                name,
                format!("more than {} points", MAX_GRID_POINTS),
            ));
        }
        Ok(())
    }

    /// Number of samples; 0 for a grid that fails [`validate`](Self::validate).
    pub fn len(&self) -> usize {
        if self.validate("unchecked").is_err() {
            return 0;
        }
        let span = (self.max - self.min) / self.step;
        (span + GRID_TOLERANCE).floor() as usize + 1
    }

    /// Whether the grid has no samples, i.e. it is malformed.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The `index`-th sample.
    #[inline]
    pub fn point(&self, index: usize) -> f64 {
        self.min + index as f64 * self.step
    }

    /// All samples in ascending order.
    pub fn points(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.len()).map(move |i| self.point(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_price_grid() {
        let grid = LinearGrid::reference_prices();
        assert!(grid.validate("price").is_ok());
        let points: Vec<f64> = grid.points().collect();
        assert_eq!(points.len(), 300);
        assert_eq!(points[0], 10.0);
        assert_eq!(points[1], 20.0);
        assert_eq!(*points.last().unwrap(), 3000.0);
    }

    #[test]
    fn test_reference_quality_grid_has_no_drift() {
        let grid = LinearGrid::reference_qualities();
        assert_eq!(grid.len(), 55);
        let last = grid.point(grid.len() - 1);
        assert!((last - 5.9).abs() < 1e-12);
        for (i, q) in grid.points().enumerate() {
            assert!((q - (0.5 + 0.1 * i as f64)).abs() < 1e-12);
        }
    }

    #[test]
    fn test_max_off_grid_is_excluded() {
        let grid = LinearGrid::new(0.0, 1.05, 0.1);
        assert_eq!(grid.len(), 11);
        assert!(grid.point(10) <= 1.05);
    }

    #[test]
    fn test_single_point_grid() {
        let grid = LinearGrid::new(4.0, 4.0, 0.5);
        assert!(grid.validate("quality").is_ok());
        assert_eq!(grid.points().collect::<Vec<_>>(), vec![4.0]);
    }

    #[test]
    fn test_malformed_grid_has_no_points() {
        for grid in [
            LinearGrid::new(0.0, 1.0, 0.0),
            LinearGrid::new(1.0, 0.0, 0.1),
            LinearGrid::new(0.0, f64::NAN, 0.1),
            LinearGrid::new(0.0, 1.0, 1e-12),
        ] {
            assert!(grid.is_empty());
            assert_eq!(grid.len(), 0);
            assert_eq!(grid.points().count(), 0);
        }
        assert!(!LinearGrid::reference_prices().is_empty());
    }

    #[test]
    fn test_rejects_bad_grids() {
        assert!(LinearGrid::new(1.0, 0.0, 0.1).validate("g").is_err());
        assert!(LinearGrid::new(0.0, 1.0, 0.0).validate("g").is_err());
        assert!(LinearGrid::new(0.0, 1.0, -0.1).validate("g").is_err());
        assert!(LinearGrid::new(f64::NAN, 1.0, 0.1).validate("g").is_err());
        assert!(LinearGrid::new(0.0, f64::INFINITY, 0.1).validate("g").is_err());
        assert!(LinearGrid::new(0.0, 1.0, 1e-12).validate("g").is_err());
    }
}
