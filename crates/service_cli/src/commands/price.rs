//! Price command implementation
//!
//! Builds an `OptionSpec` from the arguments and prints the Black-Scholes
//! price together with the analytical Greeks.

use serde::Serialize;
use tracing::info;
use vanilla_models::analytical::{greeks, price, Greeks};
use vanilla_models::instruments::OptionSpec;

use crate::commands::parse_option_type;
use crate::{CliError, Result};

#[derive(Serialize)]
struct PriceOutput {
    spec: OptionSpec<f64>,
    price: f64,
    greeks: Greeks<f64>,
}

/// Run the price command
pub fn run(
    spot: f64,
    strike: f64,
    expiry: f64,
    volatility: f64,
    rate: f64,
    option_type: &str,
    format: &str,
) -> Result<()> {
    let option_type = parse_option_type(option_type)?;
    let spec = OptionSpec::new(spot, strike, expiry, volatility, rate, option_type)?;

    info!("Pricing {} S={} K={} T={}", option_type, spot, strike, expiry);

    let output = PriceOutput {
        spec,
        price: price(&spec),
        greeks: greeks(&spec),
    };

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        "table" => {
            println!("European {} option", option_type);
            println!("  Price: {:.4}", output.price);
            println!("  Delta: {:.6}", output.greeks.delta);
            println!("  Gamma: {:.6}", output.greeks.gamma);
            println!("  Vega:  {:.6}", output.greeks.vega);
        }
        other => {
            return Err(CliError::InvalidArgument(format!(
                "Unknown format: {other}. Supported: table, json"
            )));
        }
    }

    Ok(())
}
