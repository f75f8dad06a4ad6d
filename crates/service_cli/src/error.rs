//! CLI error types.

use thiserror::Error;
use vanilla_models::analytical::AnalyticalError;

/// Errors surfaced by the CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// An argument failed parsing or validation before reaching the engine.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The engine rejected the constructed inputs.
    #[error(transparent)]
    Model(#[from] AnalyticalError),

    /// One or more verification checks failed.
    #[error("Verification failed: {failed} check(s) out of tolerance")]
    VerificationFailed {
        /// Number of failed checks across all reports.
        failed: usize,
    },

    /// Output serialisation failed.
    #[error("Failed to serialise output: {0}")]
    Serialise(#[from] serde_json::Error),
}

/// Convenience result alias for CLI commands.
pub type Result<T> = std::result::Result<T, CliError>;
