//! Search and sweep configuration types.

use duopoly_core::market::DEFAULT_INCUMBENT_QUALITY;

use crate::grid::LinearGrid;
use crate::OptimiserError;

/// Configuration for the optimal price search.
///
/// # Examples
///
/// ```
/// use duopoly_optimiser::{LinearGrid, SearchConfig};
///
/// let config = SearchConfig::default();
/// assert_eq!(config.price_grid, LinearGrid::reference_prices());
/// assert_eq!(config.incumbent_quality, 6.0);
///
/// let coarse = SearchConfig::default().with_price_grid(LinearGrid::new(50.0, 2000.0, 50.0));
/// assert_eq!(coarse.price_grid.len(), 40);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Candidate prices for the responsive firm, scanned in ascending order.
    ///
    /// Default: 10 to 3000 in steps of 10
    pub price_grid: LinearGrid,

    /// Quality of the best-responding incumbent.
    ///
    /// Default: 6.0
    pub incumbent_quality: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            price_grid: LinearGrid::reference_prices(),
            incumbent_quality: DEFAULT_INCUMBENT_QUALITY,
        }
    }
}

impl SearchConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the price grid.
    pub fn with_price_grid(mut self, price_grid: LinearGrid) -> Self {
        self.price_grid = price_grid;
        self
    }

    /// Set the incumbent quality.
    pub fn with_incumbent_quality(mut self, incumbent_quality: f64) -> Self {
        self.incumbent_quality = incumbent_quality;
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), OptimiserError> {
        self.price_grid.validate("price")?;
        if !self.incumbent_quality.is_finite() {
            return Err(OptimiserError::InvalidIncumbentQuality(self.incumbent_quality));
        }
        Ok(())
    }
}

/// Configuration for a quality sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SweepConfig {
    /// Responsive-firm qualities to evaluate.
    ///
    /// Default: 0.5 to 5.9 in steps of 0.1
    pub quality_grid: LinearGrid,

    /// Search run at every quality.
    pub search: SearchConfig,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            quality_grid: LinearGrid::reference_qualities(),
            search: SearchConfig::default(),
        }
    }
}

impl SweepConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the quality grid.
    pub fn with_quality_grid(mut self, quality_grid: LinearGrid) -> Self {
        self.quality_grid = quality_grid;
        self
    }

    /// Set the per-quality search configuration.
    pub fn with_search(mut self, search: SearchConfig) -> Self {
        self.search = search;
        self
    }

    /// Validate both grids.
    pub fn validate(&self) -> Result<(), OptimiserError> {
        self.quality_grid.validate("quality")?;
        self.search.validate()
    }
}
