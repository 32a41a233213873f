//! Optimiser error types.

use duopoly_core::InvalidQualityError;
use thiserror::Error;

/// Errors that can occur while searching or sweeping.
///
/// # Variants
///
/// - `InvalidQuality`: Wrapped validation error for the responsive quality
/// - `InvalidGrid`: Malformed grid definition
/// - `InvalidIncumbentQuality`: Non-finite incumbent quality in a search config
///
/// # Examples
///
/// ```
/// use duopoly_optimiser::OptimiserError;
///
/// let err = OptimiserError::invalid_grid("price", "step must be positive");
/// assert_eq!(format!("{}", err), "Invalid price grid: step must be positive");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OptimiserError {
    /// The responsive firm's quality was rejected.
    #[error(transparent)]
    InvalidQuality(#[from] InvalidQualityError),

    /// A grid definition cannot be scanned.
    #[error("Invalid {name} grid: {reason}")]
    InvalidGrid {
        /// Which grid was rejected
        name: &'static str,
        /// Why it was rejected
        reason: String,
    },

    /// The incumbent's quality cannot be priced against.
    #[error("Incumbent quality must be finite (got {0})")]
    InvalidIncumbentQuality(f64),
}

impl OptimiserError {
    /// Create an invalid grid error.
    pub fn invalid_grid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidGrid {
            name,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quality_error_is_transparent() {
        let err: OptimiserError = InvalidQualityError::new(0.0).into();
        assert_eq!(
            format!("{}", err),
            "Quality must be greater than 0 (got 0)"
        );
    }

    #[test]
    fn test_invalid_grid_message() {
        let err = OptimiserError::invalid_grid("quality", "min 2 exceeds max 1");
        assert!(format!("{}", err).contains("quality grid"));
    }

    #[test]
    fn test_incumbent_quality_message_names_the_incumbent() {
        let err = OptimiserError::InvalidIncumbentQuality(f64::INFINITY);
        assert_eq!(format!("{}", err), "Incumbent quality must be finite (got inf)");
    }
}
