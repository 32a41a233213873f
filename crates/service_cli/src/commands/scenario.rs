//! Scenario command implementation
//!
//! Evaluates one responsive offer against the configured incumbent and
//! reports prices, market shares and profits of both firms.

use std::io::Write;

use duopoly_core::{evaluate_scenario, ScenarioInput, ScenarioOutcome};
use serde::Serialize;
use tracing::info;

use crate::config::DuopolyConfig;
use crate::display::{format_currency, format_number, format_percent, format_quality};
use crate::output::{write_csv, write_json, OutputFormat};
use crate::Result;

#[derive(Debug, Serialize)]
struct FirmRow<'a> {
    firm: &'a str,
    price: f64,
    quality: f64,
    share: f64,
    profit: f64,
}

fn rows(outcome: &ScenarioOutcome) -> [FirmRow<'static>; 2] {
    [
        FirmRow {
            firm: "responsive",
            price: outcome.responsive.price,
            quality: outcome.responsive.quality,
            share: outcome.market.share1,
            profit: outcome.responsive_profit,
        },
        FirmRow {
            firm: "incumbent",
            price: outcome.incumbent.price,
            quality: outcome.incumbent.quality,
            share: outcome.market.share2,
            profit: outcome.incumbent_profit,
        },
    ]
}

/// Run the scenario command
pub fn run<W: Write>(
    out: &mut W,
    config: &DuopolyConfig,
    format: OutputFormat,
    price: f64,
    quality: f64,
    responds: bool,
) -> Result<()> {
    info!("Evaluating scenario...");
    info!("  Responsive offer: price {} / quality {}", price, quality);
    info!("  Incumbent responds: {}", responds);

    let input = ScenarioInput::new(price, quality)
        .with_incumbent_quality(config.incumbent.quality)
        .with_policy(config.incumbent_policy(responds));
    let outcome = evaluate_scenario(&input)?;

    match format {
        OutputFormat::Json => write_json(out, &outcome)?,
        OutputFormat::Csv => write_csv(out, &rows(&outcome))?,
        OutputFormat::Table => {
            writeln!(
                out,
                "{:<12} {:>8} {:>8} {:>7} {:>10}",
                "Firm", "Price", "Quality", "Share", "Profit"
            )?;
            writeln!(out, "{}", "-".repeat(49))?;
            for row in rows(&outcome) {
                writeln!(
                    out,
                    "{:<12} {:>8} {:>8} {:>7} {:>10}",
                    row.firm,
                    format_currency(row.price),
                    format_quality(row.quality),
                    format_percent(row.share),
                    format_currency(row.profit)
                )?;
            }
            writeln!(
                out,
                "{:<12} {:>8} {:>8} {:>7}",
                "no purchase",
                "",
                "",
                format_percent(outcome.market.share_none)
            )?;
            writeln!(out, "{}", "-".repeat(49))?;
            let policy = if input.policy.responds() {
                "responds optimally".to_string()
            } else {
                format!("fixed at {}", format_currency(outcome.incumbent.price))
            };
            writeln!(out, "Incumbent price: {}", policy)?;
            writeln!(
                out,
                "Thresholds: low {}, high {}",
                format_number(outcome.market.threshold_low, 3),
                format_number(outcome.market.threshold_high, 3)
            )?;
        }
    }

    info!("Scenario complete");
    Ok(())
}
