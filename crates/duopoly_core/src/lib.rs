//! # duopoly_core: Closed-Form Duopoly Market Model
//!
//! ## Layer 1 (Foundation) Role
//!
//! duopoly_core is the bottom layer of the workspace, providing:
//! - Firm and market value types: `FirmState`, `MarketOutcome` (`types`)
//! - The validation error: `InvalidQualityError` (`types::error`)
//! - Market share, best-response and profit formulas (`market`)
//! - Evaluation of a complete two-firm scenario (`scenario`)
//!
//! Every function here is pure: no I/O, no shared state, and identical
//! inputs always produce bit-identical outputs.
//!
//! ## Usage Examples
//!
//! ```rust
//! use duopoly_core::market::{best_response_price, compute_shares, profit};
//!
//! // Incumbent best-responds to a 400 / 4" offer with its own 6" product.
//! let incumbent_price = best_response_price(400.0, 4.0, 6.0);
//! assert!((incumbent_price - 1200.0).abs() < 1e-9);
//!
//! let outcome = compute_shares(400.0, 4.0, incumbent_price, 6.0);
//! assert!((outcome.share1 - 0.3).abs() < 1e-9);
//!
//! let responsive_profit = profit(outcome.share1, 400.0);
//! assert!((responsive_profit - 12_000.0).abs() < 1e-6);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for the value types

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod market;
pub mod scenario;
pub mod types;

pub use market::{best_response_price, compute_shares, profit, MARKET_SIZE, PRICE_SCALE};
pub use scenario::{evaluate_scenario, IncumbentPolicy, ScenarioInput, ScenarioOutcome};
pub use types::{FirmState, InvalidQualityError, MarketOutcome};
