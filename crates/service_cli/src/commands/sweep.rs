//! Sweep command implementation
//!
//! Computes the maximum attainable profit over the configured quality grid
//! and prints it as a table with a bar per point, or as JSON/CSV series.

use std::io::Write;

use duopoly_optimiser::{QualitySweep, SweepPoint};
use tracing::info;

use crate::config::DuopolyConfig;
use crate::display::{bar, format_currency, format_number, label_decimals, round_to};
use crate::output::{write_csv, write_json, OutputFormat};
use crate::Result;

const BAR_WIDTH: usize = 40;

/// Curve with each quality rounded to its grid label.
fn labelled(curve: &[SweepPoint], decimals: u32) -> Vec<SweepPoint> {
    curve
        .iter()
        .map(|point| SweepPoint {
            quality: round_to(point.quality, decimals),
            ..*point
        })
        .collect()
}

/// Run the sweep command
pub fn run<W: Write>(out: &mut W, config: &DuopolyConfig, format: OutputFormat) -> Result<()> {
    let sweep = QualitySweep::new(config.sweep_config());
    info!(
        "Sweeping {} qualities x {} prices...",
        sweep.config().quality_grid.len(),
        sweep.config().search.price_grid.len()
    );

    let decimals = label_decimals(sweep.config().quality_grid.step);
    let curve = labelled(&sweep.run()?, decimals);

    match format {
        OutputFormat::Json => write_json(out, &curve)?,
        OutputFormat::Csv => write_csv(out, &curve)?,
        OutputFormat::Table => {
            let peak = curve
                .iter()
                .map(|p| p.profit)
                .fold(f64::NEG_INFINITY, f64::max);

            writeln!(
                out,
                "{:<8} {:>8} {:>10}  Maximum profit",
                "Quality", "Price", "Profit"
            )?;
            writeln!(out, "{}", "-".repeat(30 + BAR_WIDTH))?;
            for point in &curve {
                writeln!(
                    out,
                    "{:<8} {:>8} {:>10}  {}",
                    format!("{:.*}", decimals as usize, point.quality),
                    format_currency(point.price),
                    format_currency(point.profit),
                    bar(point.profit, peak, BAR_WIDTH)
                )?;
            }
            if let Some(best) = curve.iter().find(|p| p.profit == peak) {
                writeln!(out, "{}", "-".repeat(30 + BAR_WIDTH))?;
                writeln!(
                    out,
                    "Peak: {} at quality {}",
                    format_currency(best.profit),
                    format_number(best.quality, decimals)
                )?;
            }
        }
    }

    info!("Sweep complete ({} points)", curve.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use duopoly_optimiser::LinearGrid;

    #[test]
    fn test_reference_sweep_csv() {
        let mut buf = Vec::new();
        run(&mut buf, &DuopolyConfig::default(), OutputFormat::Csv).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "quality,price,profit");
        assert_eq!(lines.len(), 56);
        assert!(lines[1].starts_with("0.5,"));
        for (i, line) in lines[1..].iter().enumerate() {
            let quality = line.split(',').next().unwrap();
            assert_eq!(quality.len(), 3, "{}", quality);
            assert_eq!(quality.parse::<f64>().unwrap(), (5 + i) as f64 / 10.0);
        }
    }

    #[test]
    fn test_json_qualities_are_labels() {
        let mut buf = Vec::new();
        run(&mut buf, &DuopolyConfig::default(), OutputFormat::Json).unwrap();
        let curve: Vec<SweepPoint> = serde_json::from_slice(&buf).unwrap();
        assert_eq!(curve.len(), 55);
        assert_eq!(curve[7].quality, 1.2);
        assert!(curve.iter().all(|p| p.quality == round_to(p.quality, 1)));
    }

    #[test]
    fn test_quarter_step_keeps_two_decimals() {
        let mut config = DuopolyConfig::default();
        config.quality_grid = LinearGrid::new(2.0, 2.5, 0.25);
        let mut buf = Vec::new();
        run(&mut buf, &config, OutputFormat::Csv).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.lines().any(|l| l.starts_with("2.25,")));
    }

    #[test]
    fn test_table_labels_one_decimal() {
        let mut config = DuopolyConfig::default();
        config.quality_grid = LinearGrid::new(1.0, 2.0, 0.5);
        let mut buf = Vec::new();
        run(&mut buf, &config, OutputFormat::Table).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.lines().any(|l| l.starts_with("1.0 ")));
        assert!(text.lines().any(|l| l.starts_with("1.5 ")));
        assert!(text.lines().any(|l| l.starts_with("2.0 ")));
        assert!(text.contains("Peak: $"));
    }
}
