//! Profit of a firm.

use super::constants::MARKET_SIZE;

/// Profit of a firm serving `share` of the market at `price`.
///
/// `share × price × MARKET_SIZE`. Shares are taken as produced by
/// [`compute_shares`](super::compute_shares), clamping included.
///
/// # Examples
/// ```
/// use duopoly_core::market::profit;
///
/// assert_eq!(profit(0.5, 400.0), 0.5 * 400.0 * 100.0);
/// ```
#[inline]
pub fn profit(share: f64, price: f64) -> f64 {
    share * price * MARKET_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profit_formula() {
        assert_eq!(profit(0.3, 400.0), 0.3 * 400.0 * 100.0);
        assert_eq!(profit(0.6, 1200.0), 0.6 * 1200.0 * 100.0);
    }

    #[test]
    fn test_zero_share() {
        assert_eq!(profit(0.0, 2500.0), 0.0);
    }
}
