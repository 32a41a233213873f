//! Optimal profit curve over a quality grid.
//!
//! Each quality sample runs an independent [`OptimalPriceSearch`]. The
//! samples do not interact, so with the `parallel` feature they are spread
//! over rayon's pool; results are always returned in grid order and match
//! the sequential run exactly.

use tracing::debug;

use crate::config::SweepConfig;
use crate::search::OptimalPriceSearch;
use crate::OptimiserError;

/// One point of the optimal profit curve.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SweepPoint {
    /// Responsive-firm quality
    pub quality: f64,
    /// Profit-maximising price at that quality
    pub price: f64,
    /// Maximum attainable profit at that quality
    pub profit: f64,
}

/// Quality sweep driver.
///
/// # Example
///
/// ```
/// use duopoly_optimiser::{LinearGrid, QualitySweep, SweepConfig};
///
/// let config = SweepConfig::default().with_quality_grid(LinearGrid::new(1.0, 3.0, 1.0));
/// let curve = QualitySweep::new(config).run().unwrap();
/// assert_eq!(curve.len(), 3);
/// assert!(curve.windows(2).all(|w| w[0].quality < w[1].quality));
/// ```
#[derive(Debug, Clone, Default)]
pub struct QualitySweep {
    config: SweepConfig,
}

impl QualitySweep {
    /// Create a sweep with the given configuration.
    pub fn new(config: SweepConfig) -> Self {
        Self { config }
    }

    /// Create a sweep over the reference grids.
    pub fn with_defaults() -> Self {
        Self::new(SweepConfig::default())
    }

    /// Get the configuration.
    pub fn config(&self) -> &SweepConfig {
        &self.config
    }

    /// Evaluate the whole curve eagerly.
    ///
    /// # Errors
    ///
    /// - [`OptimiserError::InvalidGrid`] if either grid is malformed
    /// - [`OptimiserError::InvalidQuality`] if the quality grid reaches a
    ///   non-positive sample
    pub fn run(&self) -> Result<Vec<SweepPoint>, OptimiserError> {
        self.config.validate()?;
        let grid = self.config.quality_grid;
        let search = OptimalPriceSearch::new(self.config.search);

        debug!(
            points = grid.len(),
            min = grid.min,
            max = grid.max,
            step = grid.step,
            "running quality sweep"
        );

        let curve = Self::evaluate(&search, &grid)?;

        debug!(points = curve.len(), "quality sweep complete");
        Ok(curve)
    }

    fn point(search: &OptimalPriceSearch, quality: f64) -> Result<SweepPoint, OptimiserError> {
        let best = search.search(quality)?;
        Ok(SweepPoint {
            quality,
            price: best.price,
            profit: best.profit,
        })
    }

    #[cfg(feature = "parallel")]
    fn evaluate(
        search: &OptimalPriceSearch,
        grid: &crate::grid::LinearGrid,
    ) -> Result<Vec<SweepPoint>, OptimiserError> {
        use rayon::prelude::*;

        (0..grid.len())
            .into_par_iter()
            .map(|i| Self::point(search, grid.point(i)))
            .collect()
    }

    /// Sequential fallback when the parallel feature is disabled.
    #[cfg(not(feature = "parallel"))]
    fn evaluate(
        search: &OptimalPriceSearch,
        grid: &crate::grid::LinearGrid,
    ) -> Result<Vec<SweepPoint>, OptimiserError> {
        grid.points().map(|q| Self::point(search, q)).collect()
    }
}

/// Optimal profit curve over the reference grids (qualities 0.5..=5.9 step
/// 0.1, prices 10..=3000 step 10, incumbent quality 6).
pub fn sweep_optimal_profit() -> Result<Vec<SweepPoint>, OptimiserError> {
    QualitySweep::with_defaults().run()
}
