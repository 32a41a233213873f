//! Market share model.

use super::constants::PRICE_SCALE;
use crate::types::MarketOutcome;

/// Clamp to [0, 1], mapping NaN to 0 so the model stays total.
#[inline]
fn clamp01(x: f64) -> f64 {
    if x.is_nan() {
        0.0
    } else {
        x.clamp(0.0, 1.0)
    }
}

/// Thresholds that overflow (a tiny quality or quality gap) are reported as 0.
#[inline]
fn finite_or_zero(x: f64) -> f64 {
    if x.is_finite() {
        x
    } else {
        0.0
    }
}

/// Split the market between the responsive firm (1) and the incumbent (2).
///
/// # Mathematical Definition
/// ```text
/// θL = (p1/1000) / q1
/// θH = (p2/1000 - p1/1000) / (q2 - q1)
/// s1 = clamp01(θH - θL)                              if q1 ≠ q2 and q1 > 0, else 0
/// s2 = clamp01(min(1 - (p2/1000)/q2, clamp01(1 - θH))) if q1 ≠ q2 and q2 > 0, else 0
/// s0 = max(0, 1 - s1 - s2)
/// ```
///
/// # Arguments
/// * `price1`, `quality1` - Offer of the responsive firm
/// * `price2`, `quality2` - Offer of the incumbent firm
///
/// # Returns
/// The [`MarketOutcome`]. Never NaN or infinite for finite inputs: equal
/// qualities give [`MarketOutcome::empty`] shares, a zero `quality1` gives a
/// zero `threshold_low`, and a threshold whose division overflows is 0. Qualities are not validated here; see
/// [`InvalidQualityError`](crate::types::InvalidQualityError).
///
/// # Examples
/// ```
/// use duopoly_core::market::compute_shares;
/// use approx::assert_relative_eq;
///
/// let outcome = compute_shares(400.0, 4.0, 1200.0, 6.0);
/// assert_relative_eq!(outcome.threshold_low, 0.1, epsilon = 1e-12);
/// assert_relative_eq!(outcome.threshold_high, 0.4, epsilon = 1e-12);
/// assert_relative_eq!(outcome.share1, 0.3, epsilon = 1e-12);
/// assert_relative_eq!(outcome.share2, 0.6, epsilon = 1e-12);
/// assert_relative_eq!(outcome.share_none, 0.1, epsilon = 1e-12);
/// ```
pub fn compute_shares(price1: f64, quality1: f64, price2: f64, quality2: f64) -> MarketOutcome {
    let scaled1 = price1 / PRICE_SCALE;
    let scaled2 = price2 / PRICE_SCALE;

    let threshold_low = if quality1 != 0.0 {
        scaled1 / quality1
    } else {
        0.0
    };

    if quality1 == quality2 {
        return MarketOutcome {
            threshold_low: finite_or_zero(threshold_low),
            ..MarketOutcome::empty()
        };
    }

    let threshold_high = (scaled2 - scaled1) / (quality2 - quality1);

    let share1 = if quality1 > 0.0 {
        clamp01(threshold_high - threshold_low)
    } else {
        0.0
    };

    let share2 = if quality2 > 0.0 {
        let ceiling = 1.0 - scaled2 / quality2;
        clamp01(ceiling.min(clamp01(1.0 - threshold_high)))
    } else {
        0.0
    };

    let share_none = (1.0 - share1 - share2).max(0.0);

    // Shares use the raw thresholds; only the reported values are sanitised.
    MarketOutcome {
        share1,
        share2,
        share_none,
        threshold_low: finite_or_zero(threshold_low),
        threshold_high: finite_or_zero(threshold_high),
    }
}
