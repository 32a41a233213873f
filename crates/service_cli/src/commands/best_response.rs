//! Best-response command implementation

use std::io::Write;

use duopoly_core::best_response_price;
use serde::Serialize;
use tracing::info;

use crate::display::format_currency;
use crate::output::{write_csv, write_json, OutputFormat};
use crate::Result;

#[derive(Debug, Serialize)]
struct BestResponseRow {
    price1: f64,
    quality1: f64,
    quality2: f64,
    price2: f64,
}

/// Run the best-response command
pub fn run<W: Write>(
    out: &mut W,
    format: OutputFormat,
    price1: f64,
    quality1: f64,
    quality2: f64,
) -> Result<()> {
    info!(
        "Computing incumbent reply to ({}, {}) with quality {}",
        price1, quality1, quality2
    );

    let row = BestResponseRow {
        price1,
        quality1,
        quality2,
        price2: best_response_price(price1, quality1, quality2),
    };

    match format {
        OutputFormat::Json => write_json(out, &row)?,
        OutputFormat::Csv => write_csv(out, &[row])?,
        OutputFormat::Table => {
            writeln!(out, "Incumbent best response: {}", format_currency(row.price2))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_reply() {
        let mut buf = Vec::new();
        run(&mut buf, OutputFormat::Table, 400.0, 4.0, 6.0).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Incumbent best response: $1200\n"
        );
    }
}
