//! Top-level error types.
//!
//! [`BundlerError`] is what the CLI reports. It wraps argument problems and
//! errors from the build pipeline and knows which process exit code each one
//! maps to.

use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, BundlerError>;

/// Main error type for all CLI operations
#[derive(Error, Debug)]
pub enum BundlerError {
    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// Build pipeline errors
    #[error("{0}")]
    Bundler(#[from] crate::bundler::Error),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },
}

impl BundlerError {
    /// Exit code to terminate the process with.
    ///
    /// Argument errors use 2 like clap's own usage errors. Pipeline errors
    /// forward the failing tool's exit code where there is one.
    pub fn exit_code(&self) -> i32 {
        match self {
            BundlerError::Cli(_) => 2,
            BundlerError::Bundler(e) => e.exit_code(),
        }
    }
}
