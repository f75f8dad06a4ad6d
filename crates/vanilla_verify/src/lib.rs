//! # Vanilla Verify
//!
//! Independent numerical verification of the analytical Black-Scholes
//! Greeks in `vanilla_models`.
//!
//! This crate provides:
//! - Central finite-difference Greeks ([`finite_difference`])
//! - Standing consistency checks and a verification report
//!   ([`checks`]): put-call parity, delta bounds, Gamma/Vega positivity,
//!   and analytical-vs-numerical agreement within tolerance
//!
//! The verification routines hold no state: each call re-evaluates the
//! pricing engine on bumped copies of the input specification.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod checks;
pub mod finite_difference;

pub use checks::{
    run_verification_suite, verify_greeks, GreekCheck, VerificationConfig, VerificationReport,
};
pub use finite_difference::{
    numerical_delta, numerical_gamma, numerical_greeks, numerical_vega, DEFAULT_SPOT_BUMP_REL,
    DEFAULT_VOL_BUMP,
};
