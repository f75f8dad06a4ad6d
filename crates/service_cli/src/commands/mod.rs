//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod price;
pub mod verify;

use vanilla_models::instruments::OptionType;

use crate::{CliError, Result};

/// Parses a user-supplied option type string.
pub fn parse_option_type(value: &str) -> Result<OptionType> {
    match value.trim().to_ascii_lowercase().as_str() {
        "call" => Ok(OptionType::Call),
        "put" => Ok(OptionType::Put),
        other => Err(CliError::InvalidArgument(format!(
            "Unknown option type: {other}. Supported: call, put"
        ))),
    }
}
