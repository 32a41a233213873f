//! Number formatting for terminal output.

/// Format a number, printing decimals only when they are needed.
///
/// Non-finite values print as "0". The value is rounded to `decimals`
/// places; a whole result prints without a fractional part, anything else
/// with exactly `decimals` places.
pub fn format_number(value: f64, decimals: u32) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }

    let factor = 10f64.powi(decimals as i32);
    let mut rounded = (value * factor).round() / factor;
    if rounded == 0.0 {
        // Drop the sign of negative zero.
        rounded = 0.0;
    }

    if rounded == rounded.floor() {
        format!("{:.0}", rounded)
    } else {
        format!("{:.*}", decimals as usize, rounded)
    }
}

/// Format a fraction as a whole percentage, e.g. `0.3` as "30%".
pub fn format_percent(fraction: f64) -> String {
    format!("{}%", format_number(fraction * 100.0, 0))
}

/// Format a price or profit in currency units.
pub fn format_currency(value: f64) -> String {
    format!("${}", format_number(value, 0))
}

/// Format a quality in inches.
pub fn format_quality(quality: f64) -> String {
    format!("{} in", format_number(quality, 1))
}

/// Decimal places needed to label points of a grid with spacing `step`.
///
/// At least one place; at most nine, beyond which grid noise dominates.
pub fn label_decimals(step: f64) -> u32 {
    (1..=9)
        .find(|&d| {
            let scaled = step * 10f64.powi(d as i32);
            (scaled - scaled.round()).abs() < 1e-6
        })
        .unwrap_or(9)
}

/// Round `value` to `decimals` places, dropping accumulated grid noise.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Horizontal bar of `width` cells scaled to `value / peak`.
pub fn bar(value: f64, peak: f64, width: usize) -> String {
    if peak.is_nan() || peak <= 0.0 || !value.is_finite() {
        return String::new();
    }
    let cells = ((value / peak).clamp(0.0, 1.0) * width as f64).round() as usize;
    "#".repeat(cells)
}
