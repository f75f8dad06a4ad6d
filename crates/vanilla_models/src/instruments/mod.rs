//! Instrument definitions for European vanilla options.
//!
//! The data model is deliberately small: a closed [`OptionType`] enum and a
//! validated, immutable [`OptionSpec`] value that every pricing operation
//! consumes by reference.

pub mod option;

pub use option::{OptionSpec, OptionType};
