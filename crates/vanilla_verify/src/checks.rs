//! Standing consistency checks over the pricing engine.
//!
//! The checks are deterministic pass/fail assertions over pure
//! computations:
//!
//! | Check | Condition |
//! |-------|-----------|
//! | Put-call parity | C - P = S - K·e^(-rT) |
//! | Delta bounds | call ∈ [0, 1], put ∈ [-1, 0] |
//! | Convexity | Gamma ≥ 0 and Vega ≥ 0 |
//! | Agreement | analytical vs finite-difference Greeks within tolerance |
//!
//! [`verify_greeks`] bundles them into a [`VerificationReport`];
//! [`run_verification_suite`] exercises a fixed scenario grid.

use vanilla_models::analytical::{self, AnalyticalError};
use vanilla_models::instruments::{OptionSpec, OptionType};

use crate::finite_difference::{
    numerical_delta, numerical_gamma, numerical_vega, DEFAULT_SPOT_BUMP_REL, DEFAULT_VOL_BUMP,
};

/// Absolute tolerance on the put-call parity gap.
const PARITY_TOLERANCE: f64 = 1e-6;

/// Put-call parity residual: `C - P - (S - K·e^(-rT))`.
///
/// Exactly zero in theory; the report flags the spec when the residual
/// exceeds 1e-6. The option type carried by `spec` is ignored since both
/// legs are priced.
pub fn parity_gap(spec: &OptionSpec<f64>) -> f64 {
    let call = analytical::price(&spec.with_option_type(OptionType::Call));
    let put = analytical::price(&spec.with_option_type(OptionType::Put));
    let forward = spec.spot() - spec.strike() * (-spec.rate() * spec.expiry()).exp();

    call - put - forward
}

/// Whether the analytical Delta respects its no-arbitrage bounds.
pub fn delta_in_bounds(spec: &OptionSpec<f64>) -> bool {
    let delta = analytical::delta(spec);
    match spec.option_type() {
        OptionType::Call => (0.0..=1.0).contains(&delta),
        OptionType::Put => (-1.0..=0.0).contains(&delta),
    }
}

/// Whether Gamma and Vega are both non-negative.
pub fn convexity_non_negative(spec: &OptionSpec<f64>) -> bool {
    analytical::gamma(spec) >= 0.0 && analytical::vega(spec) >= 0.0
}

/// Configuration for a verification run.
///
/// Default bump sizes follow the finite-difference module; the default
/// tolerances are absolute and sized to the truncation order of each
/// approximation (first-order bumps for Delta/Vega, a second difference
/// for Gamma).
#[derive(Clone, Debug)]
pub struct VerificationConfig {
    /// Relative bump applied to the spot for Delta/Gamma.
    pub spot_bump_rel: f64,

    /// Absolute bump applied to the volatility for Vega.
    pub vol_bump: f64,

    /// Absolute tolerance for Delta agreement.
    pub delta_tolerance: f64,

    /// Absolute tolerance for Gamma agreement.
    pub gamma_tolerance: f64,

    /// Absolute tolerance for Vega agreement.
    pub vega_tolerance: f64,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            spot_bump_rel: DEFAULT_SPOT_BUMP_REL,
            vol_bump: DEFAULT_VOL_BUMP,
            delta_tolerance: 1e-3,
            gamma_tolerance: 5e-4,
            vega_tolerance: 1e-2,
        }
    }
}

impl VerificationConfig {
    /// Creates a configuration with the documented defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the relative spot bump.
    #[inline]
    pub fn with_spot_bump_rel(mut self, bump: f64) -> Self {
        self.spot_bump_rel = bump;
        self
    }

    /// Sets the absolute volatility bump.
    #[inline]
    pub fn with_vol_bump(mut self, bump: f64) -> Self {
        self.vol_bump = bump;
        self
    }

    /// Sets the Delta agreement tolerance.
    #[inline]
    pub fn with_delta_tolerance(mut self, tolerance: f64) -> Self {
        self.delta_tolerance = tolerance;
        self
    }

    /// Sets the Gamma agreement tolerance.
    #[inline]
    pub fn with_gamma_tolerance(mut self, tolerance: f64) -> Self {
        self.gamma_tolerance = tolerance;
        self
    }

    /// Sets the Vega agreement tolerance.
    #[inline]
    pub fn with_vega_tolerance(mut self, tolerance: f64) -> Self {
        self.vega_tolerance = tolerance;
        self
    }
}

/// Agreement record for a single Greek.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GreekCheck {
    /// Name of the Greek being verified.
    pub name: &'static str,

    /// Value from the closed-form formula.
    pub analytical: f64,

    /// Value from central finite differences.
    pub numerical: f64,

    /// Absolute tolerance applied.
    pub tolerance: f64,

    /// Whether `|analytical - numerical| <= tolerance`.
    pub passed: bool,
}

impl GreekCheck {
    fn new(name: &'static str, analytical: f64, numerical: f64, tolerance: f64) -> Self {
        let passed = (analytical - numerical).abs() <= tolerance;
        Self {
            name,
            analytical,
            numerical,
            tolerance,
            passed,
        }
    }

    /// Absolute difference between the two values.
    #[inline]
    pub fn error(&self) -> f64 {
        (self.analytical - self.numerical).abs()
    }
}

/// Result of verifying a single option specification.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct VerificationReport {
    /// The specification under test.
    pub spec: OptionSpec<f64>,

    /// Black-Scholes price of `spec`.
    pub price: f64,

    /// Put-call parity residual for the market inputs of `spec`.
    pub parity_gap: f64,

    /// Whether the parity residual is within tolerance.
    pub parity_ok: bool,

    /// Whether Delta respects its bounds.
    pub delta_bounds_ok: bool,

    /// Whether Gamma and Vega are non-negative.
    pub convexity_ok: bool,

    /// Delta agreement check.
    pub delta: GreekCheck,
    /// Gamma agreement check.
    pub gamma: GreekCheck,
    /// Vega agreement check.
    pub vega: GreekCheck,
}

impl VerificationReport {
    /// Returns whether every check passed.
    pub fn all_passed(&self) -> bool {
        self.parity_ok
            && self.delta_bounds_ok
            && self.convexity_ok
            && self.delta.passed
            && self.gamma.passed
            && self.vega.passed
    }

    /// Returns the number of failed checks.
    pub fn failed_count(&self) -> usize {
        [
            self.parity_ok,
            self.delta_bounds_ok,
            self.convexity_ok,
            self.delta.passed,
            self.gamma.passed,
            self.vega.passed,
        ]
        .iter()
        .filter(|passed| !**passed)
        .count()
    }

    /// One-line summary for logs and CLI output.
    pub fn summary(&self) -> String {
        let status = if self.all_passed() { "PASS" } else { "FAIL" };
        format!(
            "{} {} S={:.2} K={:.2} T={:.2} σ={:.2} r={:.3} | price={:.4} Δ={:.4}/{:.4} Γ={:.4}/{:.4} ν={:.2}/{:.2}",
            status,
            self.spec.option_type(),
            self.spec.spot(),
            self.spec.strike(),
            self.spec.expiry(),
            self.spec.volatility(),
            self.spec.rate(),
            self.price,
            self.delta.analytical,
            self.delta.numerical,
            self.gamma.analytical,
            self.gamma.numerical,
            self.vega.analytical,
            self.vega.numerical,
        )
    }
}

/// Runs every consistency check against one option specification.
///
/// # Errors
/// Propagates bump-validation failures from the finite-difference module
/// (non-positive step, or a bump that leaves the admissible region).
///
/// # Examples
/// ```
/// use vanilla_models::instruments::{OptionSpec, OptionType};
/// use vanilla_verify::{verify_greeks, VerificationConfig};
///
/// let spec = OptionSpec::new(100.0, 100.0, 1.0, 0.2, 0.05, OptionType::Call).unwrap();
/// let report = verify_greeks(&spec, &VerificationConfig::default()).unwrap();
/// assert!(report.all_passed());
/// ```
pub fn verify_greeks(
    spec: &OptionSpec<f64>,
    config: &VerificationConfig,
) -> Result<VerificationReport, AnalyticalError> {
    let spot_bump = spec.spot() * config.spot_bump_rel;
    if spot_bump <= 0.0 {
        return Err(AnalyticalError::InvalidStepSize { step: spot_bump });
    }

    let analytical = analytical::greeks(spec);
    let fd_delta = numerical_delta(spec, spot_bump)?;
    let fd_gamma = numerical_gamma(spec, spot_bump)?;
    let fd_vega = numerical_vega(spec, config.vol_bump)?;

    let gap = parity_gap(spec);

    Ok(VerificationReport {
        spec: *spec,
        price: analytical::price(spec),
        parity_gap: gap,
        parity_ok: gap.abs() <= PARITY_TOLERANCE,
        delta_bounds_ok: delta_in_bounds(spec),
        convexity_ok: convexity_non_negative(spec),
        delta: GreekCheck::new("Delta", analytical.delta, fd_delta, config.delta_tolerance),
        gamma: GreekCheck::new("Gamma", analytical.gamma, fd_gamma, config.gamma_tolerance),
        vega: GreekCheck::new("Vega", analytical.vega, fd_vega, config.vega_tolerance),
    })
}

/// Runs the verification over a fixed scenario grid.
///
/// Scenarios: ATM/ITM/OTM calls, an ATM put, high volatility, and short
/// and long maturities.
///
/// # Errors
/// Propagates the first verification failure caused by inadmissible bumps.
pub fn run_verification_suite(
    config: &VerificationConfig,
) -> Result<Vec<VerificationReport>, AnalyticalError> {
    let scenarios: [(f64, f64, f64, f64, f64, OptionType); 7] = [
        // ATM call
        (100.0, 100.0, 1.0, 0.2, 0.05, OptionType::Call),
        // ITM call
        (120.0, 100.0, 1.0, 0.2, 0.05, OptionType::Call),
        // OTM call
        (80.0, 100.0, 1.0, 0.2, 0.05, OptionType::Call),
        // ATM put
        (100.0, 100.0, 1.0, 0.2, 0.05, OptionType::Put),
        // High volatility
        (100.0, 100.0, 1.0, 0.4, 0.05, OptionType::Call),
        // Short maturity
        (100.0, 100.0, 0.25, 0.2, 0.05, OptionType::Call),
        // Long maturity
        (100.0, 100.0, 2.0, 0.2, 0.05, OptionType::Put),
    ];

    let mut reports = Vec::with_capacity(scenarios.len());
    for (spot, strike, expiry, volatility, rate, option_type) in scenarios {
        let spec = OptionSpec::new(spot, strike, expiry, volatility, rate, option_type)?;
        reports.push(verify_greeks(&spec, config)?);
    }

    Ok(reports)
}
