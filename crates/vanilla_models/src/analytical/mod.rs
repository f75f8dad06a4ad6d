//! Analytical pricing formulas for European options.
//!
//! This module provides the Black-Scholes closed form together with the
//! analytical Greeks (Delta, Gamma, Vega) and the normal distribution
//! functions they rest on.
//!
//! ## Design Principles
//!
//! - **Generic over `T: Float`** so the same formulas serve `f64` and `f32`
//! - **Numerical stability**: erfc-based CDF that saturates to 0/1 for
//!   extreme arguments instead of overflowing

pub mod black_scholes;
pub mod distributions;
pub mod error;

// Re-export main items at module level
pub use black_scholes::{d1, d2, delta, gamma, greeks, price, vega, Greeks};
pub use distributions::{norm_cdf, norm_pdf};
pub use error::AnalyticalError;
