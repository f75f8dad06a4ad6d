//! Verify command implementation
//!
//! Runs the analytical-vs-numerical Greek comparison for both the call and
//! the put on the supplied market inputs and reports each check.

use tracing::info;
use vanilla_models::instruments::{OptionSpec, OptionType};
use vanilla_verify::{verify_greeks, VerificationConfig, VerificationReport};

use crate::{CliError, Result};

fn print_report(report: &VerificationReport) {
    println!("{}", report.summary());
    for check in [&report.delta, &report.gamma, &report.vega] {
        let status = if check.passed { "ok" } else { "FAIL" };
        println!(
            "  {:<5} analytical={:>12.8} numerical={:>12.8} |diff|={:.2e} tol={:.0e} [{status}]",
            check.name,
            check.analytical,
            check.numerical,
            check.error(),
            check.tolerance,
        );
    }
    println!(
        "  parity gap={:.2e} [{}]  delta bounds [{}]  gamma/vega >= 0 [{}]",
        report.parity_gap,
        if report.parity_ok { "ok" } else { "FAIL" },
        if report.delta_bounds_ok { "ok" } else { "FAIL" },
        if report.convexity_ok { "ok" } else { "FAIL" },
    );
}

/// Run the verify command
pub fn run(
    spot: f64,
    strike: f64,
    expiry: f64,
    volatility: f64,
    rate: f64,
    spot_bump: f64,
    vol_bump: f64,
) -> Result<()> {
    info!("Verifying Greeks S={} K={} T={}", spot, strike, expiry);

    let config = VerificationConfig::new()
        .with_spot_bump_rel(spot_bump)
        .with_vol_bump(vol_bump);

    let mut failed = 0;
    for option_type in [OptionType::Call, OptionType::Put] {
        let spec = OptionSpec::new(spot, strike, expiry, volatility, rate, option_type)?;
        let report = verify_greeks(&spec, &config)?;
        print_report(&report);
        failed += report.failed_count();
    }

    if failed > 0 {
        return Err(CliError::VerificationFailed { failed });
    }

    info!("All checks passed");
    Ok(())
}
