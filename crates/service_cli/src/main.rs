//! Duopoly CLI - Command Line Front End for the Price/Quality Model
//!
//! This is the presentation layer of the duopoly teaching model: it collects
//! numeric inputs, calls the model and formats the results.
//!
//! # Commands
//!
//! - `duopoly scenario --price <p> --quality <q> [--responds]` - Evaluate both firms
//! - `duopoly shares ...` - Raw market split for two offers
//! - `duopoly best-response ...` - Incumbent's reply price
//! - `duopoly optimal --quality <q>` - Responsive firm's optimal price
//! - `duopoly sweep` - Maximum profit across the quality grid
//! - `duopoly check` - Show the resolved configuration
//!
//! # Architecture
//!
//! As the service layer, this crate orchestrates `duopoly_core` and
//! `duopoly_optimiser`; it holds no model logic of its own.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod display;
mod error;
mod output;

pub use error::{CliError, Result};

use config::{build_config, CliOverrides, DuopolyConfig, LogLevel};
use output::OutputFormat;

/// Duopoly price/quality competition model
#[derive(Parser)]
#[command(name = "duopoly")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (defaults to ./duopoly.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Override the incumbent's quality
    #[arg(long, global = true)]
    incumbent_quality: Option<f64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a responsive offer against the incumbent
    Scenario {
        /// Responsive firm price
        #[arg(short, long, default_value = "400")]
        price: f64,

        /// Responsive firm quality (must be > 0)
        #[arg(short, long, default_value = "4", allow_negative_numbers = true)]
        quality: f64,

        /// Let the incumbent best-respond instead of keeping its fixed price
        #[arg(short, long)]
        responds: bool,
    },

    /// Compute market shares for two explicit offers
    Shares {
        /// Responsive firm price
        #[arg(long, allow_negative_numbers = true)]
        price1: f64,

        /// Responsive firm quality
        #[arg(long, allow_negative_numbers = true)]
        quality1: f64,

        /// Incumbent price
        #[arg(long, allow_negative_numbers = true)]
        price2: f64,

        /// Incumbent quality
        #[arg(long, allow_negative_numbers = true)]
        quality2: f64,
    },

    /// Compute the incumbent's best-response price
    BestResponse {
        /// Responsive firm price
        #[arg(long, allow_negative_numbers = true)]
        price1: f64,

        /// Responsive firm quality
        #[arg(long, allow_negative_numbers = true)]
        quality1: f64,

        /// Incumbent quality (defaults to the configured value)
        #[arg(long, allow_negative_numbers = true)]
        quality2: Option<f64>,
    },

    /// Find the responsive firm's optimal price for one quality
    Optimal {
        /// Responsive firm quality (must be > 0)
        #[arg(short, long, allow_negative_numbers = true)]
        quality: f64,
    },

    /// Sweep the quality grid and report maximum profits
    Sweep,

    /// Validate and print the resolved configuration
    Check,
}

fn init_tracing(level: LogLevel) {
    let filter = EnvFilter::builder()
        .with_default_directive(level.filter().into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn dispatch<W: Write>(cli: &Cli, config: &DuopolyConfig, out: &mut W) -> Result<()> {
    let format = cli.format;
    match &cli.command {
        Commands::Scenario {
            price,
            quality,
            responds,
        } => commands::scenario::run(out, config, format, *price, *quality, *responds),
        Commands::Shares {
            price1,
            quality1,
            price2,
            quality2,
        } => commands::shares::run(out, format, *price1, *quality1, *price2, *quality2),
        Commands::BestResponse {
            price1,
            quality1,
            quality2,
        } => commands::best_response::run(
            out,
            format,
            *price1,
            *quality1,
            quality2.unwrap_or(config.incumbent.quality),
        ),
        Commands::Optimal { quality } => commands::optimal::run(out, config, format, *quality),
        Commands::Sweep => commands::sweep::run(out, config, format),
        Commands::Check => commands::check::run(out, config, format),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        config_file: cli.config.clone(),
        log_level: cli.verbose.then_some(LogLevel::DEBUG),
        incumbent_quality: cli.incumbent_quality,
    };
    let config = build_config(&overrides);

    init_tracing(
        config
            .as_ref()
            .map(|c| c.log_level)
            .unwrap_or_default(),
    );

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let result = config
        .map_err(CliError::from)
        .and_then(|config| dispatch(&cli, &config, &mut std::io::stdout().lock()));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
