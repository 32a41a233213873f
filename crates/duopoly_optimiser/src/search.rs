//! Optimal price search for the responsive firm.
//!
//! For a fixed responsive quality, every candidate price on the grid is
//! answered by the incumbent's best response, the market is split, and the
//! responsive firm's profit is recorded. The scan is a deliberate fixed-step
//! sweep, not a refined optimiser: the grid itself defines the answer.

use duopoly_core::market::{best_response_price, compute_shares, profit};
use duopoly_core::InvalidQualityError;
use tracing::trace;

use crate::config::SearchConfig;
use crate::OptimiserError;

/// Profit-maximising price and the profit it earns.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptimalPrice {
    /// Argmax price on the grid
    pub price: f64,
    /// Responsive firm's profit at that price
    pub profit: f64,
}

/// Responsive firm's profit at `price` when the incumbent best-responds.
#[inline]
pub fn responsive_profit(price: f64, quality: f64, incumbent_quality: f64) -> f64 {
    let incumbent_price = best_response_price(price, quality, incumbent_quality);
    let outcome = compute_shares(price, quality, incumbent_price, incumbent_quality);
    profit(outcome.share1, price)
}

/// Fixed-grid search for the responsive firm's optimal price.
///
/// # Example
///
/// ```
/// use duopoly_optimiser::{OptimalPriceSearch, SearchConfig};
///
/// let search = OptimalPriceSearch::new(SearchConfig::default());
/// let first = search.search(4.0).unwrap();
/// let again = search.search(4.0).unwrap();
/// assert_eq!(first, again);
/// ```
#[derive(Debug, Clone, Default)]
pub struct OptimalPriceSearch {
    config: SearchConfig,
}

impl OptimalPriceSearch {
    /// Create a search with the given configuration.
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Create a search over the reference grid.
    pub fn with_defaults() -> Self {
        Self::new(SearchConfig::default())
    }

    /// Get the configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Find the profit-maximising price for the responsive firm at `quality`.
    ///
    /// Prices are scanned in ascending order and only a strictly larger
    /// profit replaces the incumbent best, so the lowest price among equal
    /// maxima wins.
    ///
    /// # Errors
    ///
    /// - [`OptimiserError::InvalidQuality`] if `quality <= 0`
    /// - [`OptimiserError::InvalidGrid`] if the configured grid is malformed
    /// - [`OptimiserError::InvalidIncumbentQuality`] if the incumbent quality
    ///   is not finite
    pub fn search(&self, quality: f64) -> Result<OptimalPrice, OptimiserError> {
        InvalidQualityError::check(quality)?;
        self.config.validate()?;
        Ok(self.scan(quality))
    }

    /// Scan a validated grid.
    fn scan(&self, quality: f64) -> OptimalPrice {
        let incumbent_quality = self.config.incumbent_quality;
        let mut best = OptimalPrice {
            price: 0.0,
            profit: f64::NEG_INFINITY,
        };

        for price in self.config.price_grid.points() {
            let candidate = responsive_profit(price, quality, incumbent_quality);
            if candidate > best.profit {
                best = OptimalPrice {
                    price,
                    profit: candidate,
                };
            }
        }

        trace!(quality, price = best.price, profit = best.profit, "optimal price found");
        best
    }
}

/// Optimal price at `quality` over the reference grid (10..=3000 step 10,
/// incumbent quality 6).
pub fn search_optimal_price(quality: f64) -> Result<OptimalPrice, OptimiserError> {
    OptimalPriceSearch::with_defaults().search(quality)
}
