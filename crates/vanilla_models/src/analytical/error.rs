//! Error types for analytical pricing operations.
//!
//! Every variant is an invalid-input failure raised synchronously before
//! any arithmetic runs; there are no partial results and no recovery layer
//! inside the engine.

use thiserror::Error;

/// Analytical pricing errors.
///
/// Structured precondition failures for the pricing engine and the
/// finite-difference verification routines.
///
/// # Examples
/// ```
/// use vanilla_models::analytical::AnalyticalError;
///
/// let err = AnalyticalError::InvalidVolatility { volatility: -0.2 };
/// assert!(format!("{}", err).contains("volatility"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyticalError {
    /// Invalid spot price (non-positive).
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The invalid spot price value
        spot: f64,
    },

    /// Invalid strike price (non-positive).
    #[error("Invalid strike price: K = {strike}")]
    InvalidStrike {
        /// The invalid strike price value
        strike: f64,
    },

    /// Invalid time to expiry (non-positive).
    #[error("Invalid time to expiry: T = {expiry}")]
    InvalidExpiry {
        /// The invalid expiry value
        expiry: f64,
    },

    /// Invalid volatility (non-positive).
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },

    /// Invalid finite-difference step size (non-positive).
    #[error("Invalid finite-difference step: h = {step}")]
    InvalidStepSize {
        /// The invalid step value
        step: f64,
    },
}
