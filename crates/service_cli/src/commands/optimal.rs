//! Optimal price command implementation
//!
//! Runs the grid search for one responsive quality using the configured
//! price grid and incumbent quality.

use std::io::Write;

use duopoly_optimiser::{OptimalPriceSearch, SweepPoint};
use tracing::info;

use crate::config::DuopolyConfig;
use crate::display::{format_currency, format_quality};
use crate::output::{write_csv, write_json, OutputFormat};
use crate::Result;

/// Run the optimal command
pub fn run<W: Write>(
    out: &mut W,
    config: &DuopolyConfig,
    format: OutputFormat,
    quality: f64,
) -> Result<()> {
    let search = OptimalPriceSearch::new(config.search_config());
    info!(
        "Searching {} prices for quality {}...",
        search.config().price_grid.len(),
        quality
    );

    let best = search.search(quality)?;
    let point = SweepPoint {
        quality,
        price: best.price,
        profit: best.profit,
    };

    match format {
        OutputFormat::Json => write_json(out, &point)?,
        OutputFormat::Csv => write_csv(out, &[point])?,
        OutputFormat::Table => {
            writeln!(out, "Quality:        {}", format_quality(point.quality))?;
            writeln!(out, "Optimal price:  {}", format_currency(point.price))?;
            writeln!(out, "Maximum profit: {}", format_currency(point.profit))?;
        }
    }

    info!("Search complete");
    Ok(())
}
