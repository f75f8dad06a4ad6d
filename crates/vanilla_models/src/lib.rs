//! # Vanilla Models
//!
//! Closed-form pricing and analytical Greeks for European vanilla options
//! under Black-Scholes assumptions.
//!
//! This crate provides:
//! - Immutable option definitions ([`instruments::OptionSpec`])
//! - Black-Scholes prices and Greeks ([`analytical::black_scholes`])
//! - Numerically stable normal distribution functions
//!
//! ## Design Principles
//!
//! - **Validated construction**: an `OptionSpec` can only be built from
//!   admissible inputs, so every pricing function is infallible and pure
//! - **Enum-based option type** for exhaustive formula dispatch
//! - **Generic over `T: Float`** so the formulas work with `f64` and `f32`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod analytical;
pub mod instruments;
