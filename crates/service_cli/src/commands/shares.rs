//! Shares command implementation
//!
//! Prints the raw market split for two explicit offers.

use std::io::Write;

use duopoly_core::compute_shares;
use tracing::info;

use crate::display::{format_number, format_percent};
use crate::output::{write_csv, write_json, OutputFormat};
use crate::Result;

/// Run the shares command
pub fn run<W: Write>(
    out: &mut W,
    format: OutputFormat,
    price1: f64,
    quality1: f64,
    price2: f64,
    quality2: f64,
) -> Result<()> {
    info!(
        "Computing shares for ({}, {}) vs ({}, {})",
        price1, quality1, price2, quality2
    );

    let outcome = compute_shares(price1, quality1, price2, quality2);

    match format {
        OutputFormat::Json => write_json(out, &outcome)?,
        OutputFormat::Csv => write_csv(out, &[outcome])?,
        OutputFormat::Table => {
            writeln!(out, "{:<16} {:>8}", "Responsive", format_percent(outcome.share1))?;
            writeln!(out, "{:<16} {:>8}", "Incumbent", format_percent(outcome.share2))?;
            writeln!(out, "{:<16} {:>8}", "No purchase", format_percent(outcome.share_none))?;
            writeln!(
                out,
                "{:<16} {:>8}",
                "Threshold low",
                format_number(outcome.threshold_low, 3)
            )?;
            writeln!(
                out,
                "{:<16} {:>8}",
                "Threshold high",
                format_number(outcome.threshold_high, 3)
            )?;
        }
    }

    Ok(())
}
