//! Full two-firm scenario evaluation.
//!
//! Bundles the steps a presentation layer performs on every input change:
//! validate the responsive firm's quality, settle the incumbent's price
//! (fixed, or a rounded best response), split the market and compute both
//! profits.
//!
//! # Examples
//!
//! ```
//! use duopoly_core::scenario::{evaluate_scenario, IncumbentPolicy, ScenarioInput};
//!
//! let input = ScenarioInput::default().with_policy(IncumbentPolicy::BestResponse);
//! let outcome = evaluate_scenario(&input).unwrap();
//! assert_eq!(outcome.incumbent.price, 1200.0);
//! ```

use crate::market::{
    best_response_price, compute_shares, profit, DEFAULT_INCUMBENT_PRICE,
    DEFAULT_INCUMBENT_QUALITY, DEFAULT_RESPONSIVE_PRICE, DEFAULT_RESPONSIVE_QUALITY,
};
use crate::types::{FirmState, InvalidQualityError, MarketOutcome};

/// How the incumbent sets its price.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "mode", rename_all = "snake_case"))]
pub enum IncumbentPolicy {
    /// The incumbent keeps a fixed price regardless of the responsive firm.
    Fixed {
        /// The fixed incumbent price
        price: f64,
    },
    /// The incumbent replies with its best-response price, rounded to a
    /// whole currency unit (halves round up, also for negative prices).
    BestResponse,
}

impl Default for IncumbentPolicy {
    fn default() -> Self {
        Self::Fixed {
            price: DEFAULT_INCUMBENT_PRICE,
        }
    }
}

impl IncumbentPolicy {
    /// Resolve the incumbent's price against a responsive offer.
    pub fn price(&self, responsive: FirmState, incumbent_quality: f64) -> f64 {
        match *self {
            Self::Fixed { price } => price,
            Self::BestResponse => round_half_up(best_response_price(
                responsive.price,
                responsive.quality,
                incumbent_quality,
            )),
        }
    }

    /// Whether the incumbent reacts to the responsive firm.
    pub fn responds(&self) -> bool {
        matches!(self, Self::BestResponse)
    }
}

/// Round to the nearest whole unit, halves towards positive infinity.
#[inline]
fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// Inputs to a scenario.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScenarioInput {
    /// Offer chosen for the responsive firm
    pub responsive: FirmState,
    /// Quality of the incumbent's product
    pub incumbent_quality: f64,
    /// Pricing behaviour of the incumbent
    pub policy: IncumbentPolicy,
}

impl Default for ScenarioInput {
    fn default() -> Self {
        Self {
            responsive: FirmState::new(DEFAULT_RESPONSIVE_PRICE, DEFAULT_RESPONSIVE_QUALITY),
            incumbent_quality: DEFAULT_INCUMBENT_QUALITY,
            policy: IncumbentPolicy::default(),
        }
    }
}

impl ScenarioInput {
    /// Create an input with the given responsive offer and default incumbent.
    pub fn new(price: f64, quality: f64) -> Self {
        Self {
            responsive: FirmState::new(price, quality),
            ..Self::default()
        }
    }

    /// Set the incumbent policy.
    pub fn with_policy(mut self, policy: IncumbentPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set the incumbent quality.
    pub fn with_incumbent_quality(mut self, quality: f64) -> Self {
        self.incumbent_quality = quality;
        self
    }
}

/// Result of evaluating a scenario.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScenarioOutcome {
    /// Responsive firm's offer
    pub responsive: FirmState,
    /// Incumbent's offer after applying its policy
    pub incumbent: FirmState,
    /// Market split between the two offers
    pub market: MarketOutcome,
    /// Profit of the responsive firm
    pub responsive_profit: f64,
    /// Profit of the incumbent firm
    pub incumbent_profit: f64,
}

/// Evaluate a scenario from scratch.
///
/// # Errors
///
/// Returns [`InvalidQualityError`] when the responsive firm's quality is not
/// strictly positive; nothing is computed in that case.
pub fn evaluate_scenario(input: &ScenarioInput) -> Result<ScenarioOutcome, InvalidQualityError> {
    InvalidQualityError::check(input.responsive.quality)?;

    let responsive = input.responsive;
    let incumbent = FirmState::new(
        input.policy.price(responsive, input.incumbent_quality),
        input.incumbent_quality,
    );

    let market = compute_shares(
        responsive.price,
        responsive.quality,
        incumbent.price,
        incumbent.quality,
    );

    Ok(ScenarioOutcome {
        responsive,
        incumbent,
        market,
        responsive_profit: profit(market.share1, responsive.price),
        incumbent_profit: profit(market.share2, incumbent.price),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_scenario() {
        let outcome = evaluate_scenario(&ScenarioInput::default()).unwrap();
        assert_eq!(outcome.incumbent, FirmState::new(1200.0, 6.0));
        assert_relative_eq!(outcome.market.share1, 0.3, epsilon = 1e-12);
        assert_relative_eq!(outcome.market.share2, 0.6, epsilon = 1e-12);
        assert_relative_eq!(outcome.responsive_profit, 12_000.0, epsilon = 1e-6);
        assert_relative_eq!(outcome.incumbent_profit, 72_000.0, epsilon = 1e-6);
    }

    #[test]
    fn test_best_response_is_rounded() {
        // 1000 * 0.5 * (6 - 3.3 + 0.333) = 1516.5 -> 1517
        let input = ScenarioInput::new(333.0, 3.3).with_policy(IncumbentPolicy::BestResponse);
        let outcome = evaluate_scenario(&input).unwrap();
        assert_eq!(outcome.incumbent.price, outcome.incumbent.price.round());
        assert!((outcome.incumbent.price - 1516.5).abs() <= 0.5);
    }

    #[test]
    fn test_halves_round_towards_positive_infinity() {
        assert_eq!(round_half_up(1516.5), 1517.0);
        assert_eq!(round_half_up(1516.49), 1516.0);
        assert_eq!(round_half_up(-1000.5), -1000.0);
        assert_eq!(round_half_up(-1000.51), -1001.0);
    }

    #[test]
    fn test_fixed_policy_ignores_responsive_price() {
        let policy = IncumbentPolicy::Fixed { price: 900.0 };
        for price in [100.0, 500.0, 2500.0] {
            let input = ScenarioInput::new(price, 4.0).with_policy(policy);
            assert_eq!(evaluate_scenario(&input).unwrap().incumbent.price, 900.0);
        }
    }

    #[test]
    fn test_invalid_quality_blocks_computation() {
        for quality in [0.0, -1.0, f64::NAN] {
            let input = ScenarioInput::new(400.0, quality);
            assert!(evaluate_scenario(&input).is_err());
        }
    }

    #[test]
    fn test_equal_qualities_give_zero_profits() {
        let input = ScenarioInput::new(400.0, 6.0);
        let outcome = evaluate_scenario(&input).unwrap();
        assert_eq!(outcome.responsive_profit, 0.0);
        assert_eq!(outcome.incumbent_profit, 0.0);
        assert_eq!(outcome.market.share_none, 1.0);
    }

    #[test]
    fn test_policy_responds() {
        assert!(IncumbentPolicy::BestResponse.responds());
        assert!(!IncumbentPolicy::default().responds());
    }
}
