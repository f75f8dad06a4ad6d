//! Central finite-difference Greeks.
//!
//! Each approximation re-prices the option on bumped copies of the
//! specification, moving only the targeted variable:
//!
//! ```text
//! Delta ≈ (V(S+h) - V(S-h)) / (2h)
//! Gamma ≈ (V(S+h) - 2·V(S) + V(S-h)) / h²
//! Vega  ≈ (V(σ+h) - V(σ-h)) / (2h)
//! ```
//!
//! The default spot bump is relative (`1e-4 · S`) and the default
//! volatility bump absolute (`1e-4`): small enough for the truncation
//! error to be negligible, large enough to avoid catastrophic
//! cancellation in double precision.

use vanilla_models::analytical::{price, AnalyticalError, Greeks};
use vanilla_models::instruments::OptionSpec;

/// Default relative bump applied to the spot price.
pub const DEFAULT_SPOT_BUMP_REL: f64 = 1e-4;

/// Default absolute bump applied to the volatility.
pub const DEFAULT_VOL_BUMP: f64 = 1e-4;

fn validate_step(h: f64) -> Result<(), AnalyticalError> {
    if h <= 0.0 {
        return Err(AnalyticalError::InvalidStepSize { step: h });
    }
    Ok(())
}

/// Approximates Delta by a central difference in the spot.
///
/// # Errors
/// - `AnalyticalError::InvalidStepSize` if `h <= 0`
/// - `AnalyticalError::InvalidSpot` if the down-bump drives `S - h <= 0`
///
/// # Examples
/// ```
/// use vanilla_models::analytical::delta;
/// use vanilla_models::instruments::{OptionSpec, OptionType};
/// use vanilla_verify::numerical_delta;
///
/// let spec = OptionSpec::new(100.0, 100.0, 1.0, 0.2, 0.05, OptionType::Call).unwrap();
/// let fd = numerical_delta(&spec, 0.01).unwrap();
/// assert!((fd - delta(&spec)).abs() < 1e-3);
/// ```
pub fn numerical_delta(spec: &OptionSpec<f64>, h: f64) -> Result<f64, AnalyticalError> {
    validate_step(h)?;

    let up = spec.with_spot(spec.spot() + h)?;
    let down = spec.with_spot(spec.spot() - h)?;

    Ok((price(&up) - price(&down)) / (2.0 * h))
}

/// Approximates Gamma by a central second difference in the spot.
///
/// # Errors
/// Same conditions as [`numerical_delta`].
pub fn numerical_gamma(spec: &OptionSpec<f64>, h: f64) -> Result<f64, AnalyticalError> {
    validate_step(h)?;

    let up = spec.with_spot(spec.spot() + h)?;
    let down = spec.with_spot(spec.spot() - h)?;

    Ok((price(&up) - 2.0 * price(spec) + price(&down)) / (h * h))
}

/// Approximates Vega by a central difference in the volatility.
///
/// # Errors
/// - `AnalyticalError::InvalidStepSize` if `h <= 0`
/// - `AnalyticalError::InvalidVolatility` if the down-bump drives
///   `σ - h <= 0`
pub fn numerical_vega(spec: &OptionSpec<f64>, h: f64) -> Result<f64, AnalyticalError> {
    validate_step(h)?;

    let up = spec.with_volatility(spec.volatility() + h)?;
    let down = spec.with_volatility(spec.volatility() - h)?;

    Ok((price(&up) - price(&down)) / (2.0 * h))
}

/// Computes all three numerical Greeks with the default bump sizes.
///
/// The spot bump scales with the spot (`1e-4 · S`); the volatility bump is
/// the absolute [`DEFAULT_VOL_BUMP`].
///
/// # Errors
/// Propagates any bump-validation failure from the individual
/// approximations.
pub fn numerical_greeks(spec: &OptionSpec<f64>) -> Result<Greeks<f64>, AnalyticalError> {
    let spot_bump = spec.spot() * DEFAULT_SPOT_BUMP_REL;

    Ok(Greeks {
        delta: numerical_delta(spec, spot_bump)?,
        gamma: numerical_gamma(spec, spot_bump)?,
        vega: numerical_vega(spec, DEFAULT_VOL_BUMP)?,
    })
}
