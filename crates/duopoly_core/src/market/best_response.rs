//! Incumbent best-response pricing.

use super::constants::PRICE_SCALE;

/// Price the incumbent charges to maximise its own profit.
///
/// Holds both qualities and the responsive firm's price fixed. The
/// incumbent's profit is quasi-concave in its price, so the maximiser is the
/// larger of the responsive firm's price floor and the interior optimum of
/// the linear-demand profit.
///
/// # Mathematical Definition
/// ```text
/// p2* = 1000 * max(p1/1000, 0.5 * (q2 - q1 + p1/1000))
/// ```
///
/// # Examples
/// ```
/// use duopoly_core::market::best_response_price;
///
/// let price = best_response_price(400.0, 4.0, 6.0);
/// assert!((price - 1200.0).abs() < 1e-9);
/// ```
#[inline]
pub fn best_response_price(price1: f64, quality1: f64, quality2: f64) -> f64 {
    let floor = price1 / PRICE_SCALE;
    let interior = 0.5 * (quality2 - quality1 + floor);
    PRICE_SCALE * floor.max(interior)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_interior_branch() {
        assert_relative_eq!(best_response_price(400.0, 4.0, 6.0), 1200.0, epsilon = 1e-9);
    }

    #[test]
    fn test_floor_branch() {
        // 0.5 * (6 - 5.9 + 2.0) = 1.05 < 2.0, so the incumbent matches the floor.
        assert_relative_eq!(best_response_price(2000.0, 5.9, 6.0), 2000.0, epsilon = 1e-9);
    }

    #[test]
    fn test_branches_meet() {
        // Interior equals floor when q2 - q1 == p1/1000.
        assert_relative_eq!(best_response_price(1000.0, 5.0, 6.0), 1000.0, epsilon = 1e-9);
    }

    #[test]
    fn test_equal_qualities() {
        assert_relative_eq!(best_response_price(800.0, 6.0, 6.0), 800.0, epsilon = 1e-9);
    }

    #[test]
    fn test_deterministic() {
        let a = best_response_price(730.0, 3.3, 6.0);
        let b = best_response_price(730.0, 3.3, 6.0);
        assert_eq!(a.to_bits(), b.to_bits());
    }
}
