//! Result of splitting the consumer population between the two firms.

/// Market shares and indifference thresholds for one pair of offers.
///
/// Each share is clamped to [0, 1] on its own and `share_none` is derived as
/// `max(0, 1 - share1 - share2)`, so the three shares need not sum to one.
///
/// The thresholds are cut-offs in per-quality price space; they are carried
/// for display only and are 0 whenever their defining division is undefined.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketOutcome {
    /// Share of consumers buying from the responsive firm
    pub share1: f64,
    /// Share of consumers buying from the incumbent firm
    pub share2: f64,
    /// Share of consumers buying from neither firm
    pub share_none: f64,
    /// Per-quality price of the low-quality offer
    pub threshold_low: f64,
    /// Marginal price per unit of quality when upgrading to the incumbent
    pub threshold_high: f64,
}

impl MarketOutcome {
    /// Outcome in which nobody buys from either firm.
    pub fn empty() -> Self {
        Self {
            share1: 0.0,
            share2: 0.0,
            share_none: 1.0,
            threshold_low: 0.0,
            threshold_high: 0.0,
        }
    }
}
