//! Price and quality of a single competitor.

/// State of one firm in a calculation.
///
/// Prices are in currency units; qualities are in an arbitrary unit
/// (displayed as inches of seat pitch). Two instances exist per calculation:
/// the responsive firm, whose values the user chooses, and the incumbent.
///
/// # Examples
/// ```
/// use duopoly_core::types::FirmState;
///
/// let responsive = FirmState::new(400.0, 4.0);
/// assert_eq!(responsive.price, 400.0);
/// assert_eq!(responsive.quality, 4.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FirmState {
    /// Price charged, in currency units
    pub price: f64,
    /// Product quality
    pub quality: f64,
}

impl FirmState {
    /// Create a firm state from a price and a quality.
    pub fn new(price: f64, quality: f64) -> Self {
        Self { price, quality }
    }
}

