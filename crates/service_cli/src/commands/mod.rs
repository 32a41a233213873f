//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Commands write to the
//! supplied writer so they can be exercised without a terminal.

pub mod best_response;
pub mod check;
pub mod optimal;
pub mod scenario;
pub mod shares;
pub mod sweep;
