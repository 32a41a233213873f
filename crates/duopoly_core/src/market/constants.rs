//! Model constants and reference defaults.

/// Divisor applied to prices before they enter the share formulas.
pub const PRICE_SCALE: f64 = 1000.0;

/// Multiplier turning `share × price` into a profit figure.
pub const MARKET_SIZE: f64 = 100.0;

/// Default price of the responsive firm.
pub const DEFAULT_RESPONSIVE_PRICE: f64 = 400.0;

/// Default quality of the responsive firm.
pub const DEFAULT_RESPONSIVE_QUALITY: f64 = 4.0;

/// Default price of the incumbent when it does not respond.
pub const DEFAULT_INCUMBENT_PRICE: f64 = 1200.0;

/// Quality of the incumbent firm.
pub const DEFAULT_INCUMBENT_QUALITY: f64 = 6.0;
