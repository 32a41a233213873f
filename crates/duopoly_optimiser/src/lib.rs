//! # duopoly_optimiser
//!
//! Optimal pricing for the responsive firm when the incumbent best-responds.
//!
//! This crate sits on top of the closed-form model in `duopoly_core` and
//! solves the one inverse problem the teaching tool needs: for a given
//! quality, which price maximises the responsive firm's profit?
//!
//! ## Architecture Position
//!
//! Layer 2 of the workspace. Depends on `duopoly_core` (L1) only and is
//! consumed by `service_cli`.
//!
//! ## Modules
//!
//! - `grid`: Inclusive linear grids generated by index, never by accumulation
//! - `config`: Search and sweep configuration with reference defaults
//! - `search`: Fixed-step scan for the profit-maximising price
//! - `sweep`: Optimal profit curve over a quality grid
//!
//! ## Example
//!
//! ```rust
//! use duopoly_optimiser::{search_optimal_price, sweep_optimal_profit};
//!
//! let best = search_optimal_price(4.0).unwrap();
//! assert!(best.profit > 0.0);
//!
//! let curve = sweep_optimal_profit().unwrap();
//! assert_eq!(curve.len(), 55);
//! ```
//!
//! ## Feature Flags
//!
//! - `parallel` (default): Evaluate sweep points with rayon
//! - `serde` (default): Serialisation for configs and results

pub mod config;
pub mod grid;
pub mod search;
pub mod sweep;

mod error;

pub use config::{SearchConfig, SweepConfig};
pub use error::OptimiserError;
pub use grid::LinearGrid;
pub use search::{search_optimal_price, OptimalPrice, OptimalPriceSearch};
pub use sweep::{sweep_optimal_profit, QualitySweep, SweepPoint};
