//! Vanopt CLI - Black-Scholes pricing and Greeks verification.
//!
//! # Commands
//!
//! - `vanopt price` - Price a European option and print its Greeks
//! - `vanopt verify` - Cross-check analytical Greeks against finite
//!   differences for both the call and the put on the given market inputs
//!
//! The core engine lives in `vanilla_models`; this crate is plumbing that
//! constructs an `OptionSpec` from arguments and prints returned numbers.

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;

pub use error::{CliError, Result};

/// Black-Scholes pricing and verification CLI
#[derive(Parser)]
#[command(name = "vanopt")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price a European option and print its analytical Greeks
    Price {
        /// Spot price of the underlying
        #[arg(short, long)]
        spot: f64,

        /// Strike price
        #[arg(short = 'k', long)]
        strike: f64,

        /// Time to expiry in years
        #[arg(short = 't', long)]
        expiry: f64,

        /// Annualised volatility (e.g. 0.2 for 20%)
        #[arg(short = 'g', long)]
        volatility: f64,

        /// Continuously compounded risk-free rate (e.g. 0.05 for 5%)
        #[arg(short, long, default_value = "0.0", allow_negative_numbers = true)]
        rate: f64,

        /// Option type (call or put)
        #[arg(short, long, default_value = "call")]
        option_type: String,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Cross-check analytical Greeks against central finite differences
    Verify {
        /// Spot price of the underlying
        #[arg(short, long)]
        spot: f64,

        /// Strike price
        #[arg(short = 'k', long)]
        strike: f64,

        /// Time to expiry in years
        #[arg(short = 't', long)]
        expiry: f64,

        /// Annualised volatility
        #[arg(short = 'g', long)]
        volatility: f64,

        /// Continuously compounded risk-free rate
        #[arg(short, long, default_value = "0.0", allow_negative_numbers = true)]
        rate: f64,

        /// Relative spot bump for Delta/Gamma differences
        #[arg(long, default_value = "1e-4")]
        spot_bump: f64,

        /// Absolute volatility bump for Vega differences
        #[arg(long, default_value = "1e-4")]
        vol_bump: f64,
    },
}

fn main() -> Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Price {
            spot,
            strike,
            expiry,
            volatility,
            rate,
            option_type,
            format,
        } => commands::price::run(spot, strike, expiry, volatility, rate, &option_type, &format),
        Commands::Verify {
            spot,
            strike,
            expiry,
            volatility,
            rate,
            spot_bump,
            vol_bump,
        } => commands::verify::run(spot, strike, expiry, volatility, rate, spot_bump, vol_bump),
    }
}
