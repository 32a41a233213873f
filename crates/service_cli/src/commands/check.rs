//! Check command implementation
//!
//! Prints the resolved configuration so the effect of the config file,
//! environment and flags can be inspected, then validates it. A malformed
//! grid is still shown, marked as unusable.

use std::io::Write;

use tracing::info;

use crate::config::DuopolyConfig;
use crate::output::{write_json, OutputFormat};
use crate::Result;

/// Run the check command
pub fn run<W: Write>(out: &mut W, config: &DuopolyConfig, format: OutputFormat) -> Result<()> {
    match format {
        // Nested config has no tabular form; CSV falls back to JSON.
        OutputFormat::Json | OutputFormat::Csv => write_json(out, config)?,
        OutputFormat::Table => {
            let grid = |g: &duopoly_optimiser::LinearGrid| {
                if g.is_empty() {
                    format!("{} to {} step {} (unusable)", g.min, g.max, g.step)
                } else {
                    format!("{} to {} step {} ({} points)", g.min, g.max, g.step, g.len())
                }
            };
            writeln!(out, "Log level:          {}", config.log_level)?;
            writeln!(out, "Incumbent quality:  {}", config.incumbent.quality)?;
            writeln!(out, "Incumbent price:    {}", config.incumbent.price)?;
            writeln!(out, "Price grid:         {}", grid(&config.price_grid))?;
            writeln!(out, "Quality grid:       {}", grid(&config.quality_grid))?;
        }
    }

    config.validate()?;
    info!("Configuration is valid");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_check() {
        let mut buf = Vec::new();
        run(&mut buf, &DuopolyConfig::default(), OutputFormat::Table).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("10 to 3000 step 10 (300 points)"));
        assert!(text.contains("(55 points)"));
    }

    #[test]
    fn test_malformed_grid_is_shown_then_rejected() {
        let mut config = DuopolyConfig::default();
        config.price_grid = duopoly_optimiser::LinearGrid::new(10.0, 3000.0, 0.0);
        let mut buf = Vec::new();
        let result = run(&mut buf, &config, OutputFormat::Table);
        assert!(result.is_err());
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("10 to 3000 step 0 (unusable)"));
    }
}
