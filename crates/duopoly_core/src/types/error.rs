//! Error types for input validation.
//!
//! The model is total over finite inputs: degenerate cases such as equal
//! qualities resolve to zero shares instead of failing. The only input that
//! blocks a calculation is a non-positive quality for the responsive firm.

use thiserror::Error;

/// Rejected responsive-firm quality.
///
/// Raised when the quality chosen for the responsive firm is not strictly
/// positive (NaN is treated as non-positive).
///
/// # Examples
/// ```
/// use duopoly_core::types::InvalidQualityError;
///
/// let err = InvalidQualityError::new(0.0);
/// assert_eq!(format!("{}", err), "Quality must be greater than 0 (got 0)");
///
/// assert!(InvalidQualityError::check(4.0).is_ok());
/// assert!(InvalidQualityError::check(-1.0).is_err());
/// ```
#[derive(Error, Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("Quality must be greater than 0 (got {quality})")]
pub struct InvalidQualityError {
    /// The rejected quality value
    pub quality: f64,
}

impl InvalidQualityError {
    /// Create an error for the given rejected quality.
    pub fn new(quality: f64) -> Self {
        Self { quality }
    }

    /// Validate a responsive-firm quality, returning it unchanged when usable.
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    pub fn check(quality: f64) -> Result<f64, Self> {
        if !(quality > 0.0) {
            return Err(Self::new(quality));
        }
        Ok(quality)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_accepts_positive() {
        assert_eq!(InvalidQualityError::check(0.5), Ok(0.5));
        assert_eq!(InvalidQualityError::check(6.0), Ok(6.0));
    }

    #[test]
    fn test_check_rejects_zero_and_negative() {
        assert_eq!(
            InvalidQualityError::check(0.0),
            Err(InvalidQualityError::new(0.0))
        );
        assert!(InvalidQualityError::check(-0.1).is_err());
    }

    #[test]
    fn test_check_rejects_nan() {
        let err = InvalidQualityError::check(f64::NAN).unwrap_err();
        assert!(err.quality.is_nan());
    }

    #[test]
    fn test_display_message() {
        let err = InvalidQualityError::new(-2.5);
        assert_eq!(
            format!("{}", err),
            "Quality must be greater than 0 (got -2.5)"
        );
    }

    #[test]
    fn test_is_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        assert_error(&InvalidQualityError::new(0.0));
    }
}
