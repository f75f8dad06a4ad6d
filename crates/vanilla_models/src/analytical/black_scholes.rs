//! Black-Scholes pricing and Greeks for European options.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·Φ(d₁) - K·e^(-rT)·Φ(d₂)
//! **Put Price**: P = K·e^(-rT)·Φ(-d₂) - S·Φ(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! All operations are pure functions of a validated [`OptionSpec`]: the
//! constructor guarantees S, K, T, σ > 0, so nothing here can divide by
//! zero or take the log of a non-positive number.

use num_traits::Float;

use super::distributions::{norm_cdf, norm_pdf};
use crate::instruments::{OptionSpec, OptionType};

/// Analytical sensitivities of an option price.
///
/// Delta and Gamma are derivatives with respect to spot, Vega with respect
/// to volatility. Vega is the raw derivative per unit volatility; callers
/// wanting a "per 1% move" convention scale by 0.01 themselves.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Greeks<T: Float> {
    /// Delta: ∂V/∂S.
    pub delta: T,
    /// Gamma: ∂²V/∂S².
    pub gamma: T,
    /// Vega: ∂V/∂σ.
    pub vega: T,
}

/// Computes the d₁ term of the Black-Scholes formula.
///
/// d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
#[inline]
pub fn d1<T: Float>(spec: &OptionSpec<T>) -> T {
    let half = T::from(0.5).unwrap();

    let vol_sqrt_t = spec.volatility() * spec.expiry().sqrt();
    let log_moneyness = (spec.spot() / spec.strike()).ln();
    let drift = (spec.rate() + half * spec.volatility() * spec.volatility()) * spec.expiry();

    (log_moneyness + drift) / vol_sqrt_t
}

/// Computes the d₂ term of the Black-Scholes formula.
///
/// d₂ = d₁ - σ√T
#[inline]
pub fn d2<T: Float>(spec: &OptionSpec<T>) -> T {
    d1(spec) - spec.volatility() * spec.expiry().sqrt()
}

/// Computes the Black-Scholes price of a European option.
///
/// Dispatches on the option type:
/// - Call: S·Φ(d₁) - K·e^(-rT)·Φ(d₂)
/// - Put:  K·e^(-rT)·Φ(-d₂) - S·Φ(-d₁)
///
/// The result is non-negative and, for T → 0⁺, converges to the intrinsic
/// value because the CDF saturates on the large |d₁|, |d₂| produced by a
/// vanishing σ√T.
///
/// # Examples
/// ```
/// use vanilla_models::analytical::price;
/// use vanilla_models::instruments::{OptionSpec, OptionType};
///
/// let call = OptionSpec::new(100.0_f64, 100.0, 1.0, 0.2, 0.05, OptionType::Call).unwrap();
/// let put = call.with_option_type(OptionType::Put);
///
/// // Put-call parity: C - P = S - K·e^(-rT)
/// let gap = price(&call) - price(&put) - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(gap.abs() < 1e-10);
/// ```
#[inline]
pub fn price<T: Float>(spec: &OptionSpec<T>) -> T {
    let d1 = d1(spec);
    let d2 = d2(spec);
    let discounted_strike = spec.strike() * (-spec.rate() * spec.expiry()).exp();

    match spec.option_type() {
        OptionType::Call => spec.spot() * norm_cdf(d1) - discounted_strike * norm_cdf(d2),
        OptionType::Put => discounted_strike * norm_cdf(-d2) - spec.spot() * norm_cdf(-d1),
    }
}

/// Computes Delta (∂V/∂S).
///
/// Φ(d₁) for a call, Φ(d₁) - 1 for a put; lies in [0, 1] and [-1, 0]
/// respectively.
#[inline]
pub fn delta<T: Float>(spec: &OptionSpec<T>) -> T {
    let n_d1 = norm_cdf(d1(spec));

    match spec.option_type() {
        OptionType::Call => n_d1,
        OptionType::Put => n_d1 - T::one(),
    }
}

/// Computes Gamma (∂²V/∂S²).
///
/// Gamma = φ(d₁) / (S·σ·√T), identical for calls and puts and always
/// non-negative.
#[inline]
pub fn gamma<T: Float>(spec: &OptionSpec<T>) -> T {
    let vol_sqrt_t = spec.volatility() * spec.expiry().sqrt();
    norm_pdf(d1(spec)) / (spec.spot() * vol_sqrt_t)
}

/// Computes Vega (∂V/∂σ).
///
/// Vega = S·φ(d₁)·√T, identical for calls and puts and always
/// non-negative.
#[inline]
pub fn vega<T: Float>(spec: &OptionSpec<T>) -> T {
    spec.spot() * norm_pdf(d1(spec)) * spec.expiry().sqrt()
}

/// Computes all analytical Greeks in one call.
///
/// # Examples
/// ```
/// use vanilla_models::analytical::greeks;
/// use vanilla_models::instruments::{OptionSpec, OptionType};
///
/// let spec = OptionSpec::new(100.0_f64, 100.0, 1.0, 0.2, 0.05, OptionType::Call).unwrap();
/// let g = greeks(&spec);
/// assert!(g.delta > 0.0 && g.delta < 1.0);
/// assert!(g.gamma >= 0.0);
/// assert!(g.vega >= 0.0);
/// ```
#[inline]
pub fn greeks<T: Float>(spec: &OptionSpec<T>) -> Greeks<T> {
    Greeks {
        delta: delta(spec),
        gamma: gamma(spec),
        vega: vega(spec),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn spec(
        spot: f64,
        strike: f64,
        expiry: f64,
        volatility: f64,
        rate: f64,
        option_type: OptionType,
    ) -> OptionSpec<f64> {
        OptionSpec::new(spot, strike, expiry, volatility, rate, option_type).unwrap()
    }

    fn atm_call() -> OptionSpec<f64> {
        spec(100.0, 100.0, 1.0, 0.2, 0.05, OptionType::Call)
    }

    // ==========================================================
    // d1/d2 Tests
    // ==========================================================

    #[test]
    fn test_d1_atm_zero_rate() {
        // ATM with r=0: d1 = σ√T / 2
        let s = spec(100.0, 100.0, 1.0, 0.2, 0.0, OptionType::Call);
        assert_relative_eq!(d1(&s), 0.1, epsilon = 1e-12);
    }

    #[test]
    fn test_d1_d2_relationship() {
        let s = spec(100.0, 105.0, 0.5, 0.2, 0.05, OptionType::Call);
        let expected_d2 = d1(&s) - 0.2 * 0.5_f64.sqrt();
        assert_relative_eq!(d2(&s), expected_d2, epsilon = 1e-12);
    }

    #[test]
    fn test_d1_sign_by_moneyness() {
        let itm = spec(150.0, 100.0, 1.0, 0.2, 0.05, OptionType::Call);
        assert!(d1(&itm) > 1.0);

        let otm = spec(50.0, 100.0, 1.0, 0.2, 0.05, OptionType::Call);
        assert!(d1(&otm) < -1.0);
    }

    // ==========================================================
    // Price Tests
    // ==========================================================

    #[test]
    fn test_call_price_reference_value() {
        // S=100, K=100, T=1, σ=0.2, r=0.05 → C ≈ 10.4506
        assert_relative_eq!(price(&atm_call()), 10.4506, epsilon = 1e-3);
    }

    #[test]
    fn test_put_price_reference_value() {
        // Same inputs → P ≈ 5.5735
        let put = atm_call().with_option_type(OptionType::Put);
        assert_relative_eq!(price(&put), 5.5735, epsilon = 1e-3);
    }

    #[test]
    fn test_prices_non_negative() {
        for strike in [50.0, 80.0, 100.0, 120.0, 200.0] {
            for option_type in [OptionType::Call, OptionType::Put] {
                let s = spec(100.0, strike, 1.0, 0.2, 0.05, option_type);
                assert!(price(&s) >= 0.0, "negative price at K = {strike}");
            }
        }
    }

    #[test]
    fn test_deep_itm_call_approaches_forward_intrinsic() {
        // Deep ITM call ≈ S - K·e^(-rT)
        let s = spec(200.0, 100.0, 1.0, 0.2, 0.05, OptionType::Call);
        let lower_bound = 200.0 - 100.0 * (-0.05_f64).exp();
        assert!(price(&s) >= lower_bound - 0.01);
    }

    #[test]
    fn test_deep_otm_call_near_zero() {
        let s = spec(50.0, 100.0, 1.0, 0.2, 0.05, OptionType::Call);
        assert!(price(&s) < 0.01);
    }

    #[test]
    fn test_tiny_expiry_converges_to_intrinsic() {
        // T = 1e-9: prices collapse to max(S-K, 0) / max(K-S, 0)
        for (spot, strike) in [(100.0, 100.0), (110.0, 100.0), (90.0, 100.0)] {
            for option_type in [OptionType::Call, OptionType::Put] {
                let s = spec(spot, strike, 1e-9, 0.2, 0.05, option_type);
                assert_relative_eq!(price(&s), s.intrinsic(), epsilon = 1e-3);
            }
        }
    }

    // ==========================================================
    // Put-Call Parity Tests
    // ==========================================================

    #[test]
    fn test_put_call_parity_various_strikes() {
        for strike in [80.0, 90.0, 100.0, 110.0, 120.0] {
            let call = spec(100.0, strike, 1.0, 0.2, 0.05, OptionType::Call);
            let put = call.with_option_type(OptionType::Put);
            let forward = 100.0 - strike * (-0.05_f64).exp();
            assert_relative_eq!(price(&call) - price(&put), forward, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_put_call_parity_negative_rate() {
        let call = spec(100.0, 100.0, 1.0, 0.2, -0.02, OptionType::Call);
        let put = call.with_option_type(OptionType::Put);
        let forward = 100.0 - 100.0 * (0.02_f64).exp();
        assert_relative_eq!(price(&call) - price(&put), forward, epsilon = 1e-10);
    }

    // ==========================================================
    // Greeks Tests
    // ==========================================================

    #[test]
    fn test_delta_reference_value() {
        // ATM call delta ≈ 0.6368
        assert_relative_eq!(delta(&atm_call()), 0.6368, epsilon = 1e-3);
    }

    #[test]
    fn test_gamma_reference_value() {
        // ATM gamma ≈ 0.0188
        assert_relative_eq!(gamma(&atm_call()), 0.0188, epsilon = 1e-3);
    }

    #[test]
    fn test_vega_reference_value() {
        // ATM vega ≈ 37.52 (per unit volatility)
        assert_relative_eq!(vega(&atm_call()), 37.52, epsilon = 1e-2);
    }

    #[test]
    fn test_delta_bounds() {
        for strike in [60.0, 80.0, 100.0, 120.0, 160.0] {
            let call = spec(100.0, strike, 1.0, 0.2, 0.05, OptionType::Call);
            let call_delta = delta(&call);
            assert!((0.0..=1.0).contains(&call_delta));

            let put_delta = delta(&call.with_option_type(OptionType::Put));
            assert!((-1.0..=0.0).contains(&put_delta));
        }
    }

    #[test]
    fn test_delta_call_put_relationship() {
        // Put delta = call delta - 1
        let call = atm_call();
        let put = call.with_option_type(OptionType::Put);
        assert_relative_eq!(delta(&put), delta(&call) - 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_gamma_vega_identical_for_call_and_put() {
        let call = atm_call();
        let put = call.with_option_type(OptionType::Put);
        assert_eq!(gamma(&call), gamma(&put));
        assert_eq!(vega(&call), vega(&put));
    }

    #[test]
    fn test_gamma_vega_non_negative() {
        for strike in [60.0, 80.0, 100.0, 120.0, 160.0] {
            let s = spec(100.0, strike, 1.0, 0.2, 0.05, OptionType::Call);
            assert!(gamma(&s) >= 0.0);
            assert!(vega(&s) >= 0.0);
        }
    }

    #[test]
    fn test_gamma_peaks_near_atm() {
        let atm = gamma(&spec(100.0, 100.0, 1.0, 0.2, 0.05, OptionType::Call));
        let itm = gamma(&spec(100.0, 80.0, 1.0, 0.2, 0.05, OptionType::Call));
        let otm = gamma(&spec(100.0, 120.0, 1.0, 0.2, 0.05, OptionType::Call));
        assert!(atm >= itm);
        assert!(atm >= otm);
    }

    #[test]
    fn test_greeks_bundle_matches_individual_functions() {
        let s = atm_call();
        let g = greeks(&s);
        assert_eq!(g.delta, delta(&s));
        assert_eq!(g.gamma, gamma(&s));
        assert_eq!(g.vega, vega(&s));
    }

    #[test]
    fn test_f32_compatibility() {
        let s = OptionSpec::new(100.0_f32, 100.0, 1.0, 0.2, 0.05, OptionType::Call).unwrap();
        assert!(price(&s) > 0.0_f32);
    }
}
