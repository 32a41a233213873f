//! Closed-form duopoly formulas.
//!
//! The consumer population has unit mass and each consumer values quality
//! linearly, so the market splits into three segments (buy nothing, buy from
//! the responsive firm, buy from the incumbent) separated by two thresholds.
//!
//! ## Available Functions
//!
//! - [`compute_shares`]: Shares and thresholds for a pair of offers
//! - [`best_response_price`]: Incumbent's profit-maximising reply price
//! - [`profit`]: Profit of a firm given its share and price
//!
//! ## Examples
//!
//! ```
//! use duopoly_core::market::compute_shares;
//!
//! // Equal qualities are a degenerate market: nobody is served.
//! let outcome = compute_shares(400.0, 6.0, 1200.0, 6.0);
//! assert_eq!(outcome.share1, 0.0);
//! assert_eq!(outcome.share2, 0.0);
//! assert_eq!(outcome.share_none, 1.0);
//! ```

mod best_response;
mod constants;
mod profit;
mod shares;

pub use best_response::best_response_price;
pub use constants::*;
pub use profit::profit;
pub use shares::compute_shares;
