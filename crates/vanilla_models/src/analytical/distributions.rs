//! Standard normal distribution functions.
//!
//! Provides `norm_cdf` and `norm_pdf`, generic over `T: Float`. The CDF is
//! evaluated through the complementary error function rather than a naive
//! series, so it stays accurate for moderate arguments and saturates cleanly
//! to 0/1 for extreme ones (large |d1|/|d2| from tiny `σ·√T`).

use num_traits::Float;

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Complementary error function, Abramowitz & Stegun formula 7.1.26.
///
/// Maximum absolute error 1.5e-7 over the whole real line. The polynomial
/// is evaluated with Horner's method; negative arguments use the reflection
/// erfc(-x) = 2 - erfc(x), which keeps Φ(x) + Φ(-x) = 1 exact.
#[inline]
fn erfc<T: Float>(x: T) -> T {
    let a1 = T::from(0.254829592).unwrap();
    let a2 = T::from(-0.284496736).unwrap();
    let a3 = T::from(1.421413741).unwrap();
    let a4 = T::from(-1.453152027).unwrap();
    let a5 = T::from(1.061405429).unwrap();
    let p = T::from(0.3275911).unwrap();

    let abs_x = x.abs();
    let t = T::one() / (T::one() + p * abs_x);
    let poly = a1 + t * (a2 + t * (a3 + t * (a4 + t * a5)));

    // exp(-x²) underflows to zero for large |x|, giving clean saturation
    let erfc_abs = t * poly * (-abs_x * abs_x).exp();

    if x < T::zero() {
        T::from(2.0).unwrap() - erfc_abs
    } else {
        erfc_abs
    }
}

/// Standard normal cumulative distribution function.
///
/// Φ(x) = (1/2)·erfc(-x/√2), accurate to better than 1e-7 for all finite x
/// and clamped to [0, 1] by construction.
///
/// # Examples
/// ```
/// use vanilla_models::analytical::distributions::norm_cdf;
///
/// assert!((norm_cdf(0.0_f64) - 0.5).abs() < 1e-7);
/// assert!(norm_cdf(-6.0_f64) < 1e-8);
/// assert!(norm_cdf(6.0_f64) > 1.0 - 1e-8);
/// ```
#[inline]
pub fn norm_cdf<T: Float>(x: T) -> T {
    let half = T::from(0.5).unwrap();
    let sqrt_2 = T::from(std::f64::consts::SQRT_2).unwrap();
    half * erfc(-x / sqrt_2)
}

/// Standard normal probability density function.
///
/// φ(x) = (1/√(2π))·exp(-x²/2).
///
/// # Examples
/// ```
/// use vanilla_models::analytical::distributions::norm_pdf;
///
/// assert!((norm_pdf(0.0_f64) - 0.3989422804014327).abs() < 1e-12);
/// ```
#[inline]
pub fn norm_pdf<T: Float>(x: T) -> T {
    let half = T::from(0.5).unwrap();
    let scale = T::from(FRAC_1_SQRT_2PI).unwrap();
    scale * (-half * x * x).exp()
}
