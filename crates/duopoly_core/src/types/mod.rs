//! Value types shared by every layer of the model.
//!
//! This module provides:
//! - `firm`: Price and quality of one competitor (`FirmState`)
//! - `outcome`: Shares and indifference thresholds of a market (`MarketOutcome`)
//! - `error`: The input validation error (`InvalidQualityError`)

pub mod error;
pub mod firm;
pub mod outcome;

pub use error::InvalidQualityError;
pub use firm::FirmState;
pub use outcome::MarketOutcome;
