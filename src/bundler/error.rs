//! Error types and context helpers for bundling operations.

use std::{
    fmt::Display,
    io,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Result type alias for bundler operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building a resource bundle.
#[derive(Error, Debug)]
pub enum Error {
    /// Free-form error with a message
    #[error("{0}")]
    GenericError(String),

    /// Bare IO error
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    /// Filesystem error with the operation and path that caused it
    #[error("{context} `{}`: {error}", .path.display())]
    Fs {
        /// What was being done
        context: String,
        /// Path the operation targeted
        path: PathBuf,
        /// Underlying error
        #[source]
        error: io::Error,
    },

    /// An external tool could not be spawned at all
    #[error("failed to run `{command}`: {error}")]
    CommandFailed {
        /// Tool name or command line
        command: String,
        /// Spawn error
        #[source]
        error: io::Error,
    },

    /// An external tool ran and exited unsuccessfully
    #[error("command failed with {}: {command}", describe_code(.code))]
    ToolFailed {
        /// Full command line
        command: String,
        /// Exit code, `None` if terminated by a signal
        code: Option<i32>,
    },

    /// Byte swapping was requested for a packaging mode that cannot be swapped
    #[error("don't know how to do swapping for mode={mode}")]
    UnsupportedSwapMode {
        /// Requested packaging mode
        mode: String,
    },
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

impl Error {
    /// Process exit code to report for this error.
    ///
    /// Tool failures forward the tool's own exit code. A tool that could not be
    /// found maps to 127, like a shell would.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::ToolFailed {
                code: Some(code), ..
            } if *code != 0 => *code,
            Error::CommandFailed { error, .. } if error.kind() == io::ErrorKind::NotFound => 127,
            _ => 1,
        }
    }
}

/// Adds a message to errors and empty options.
pub trait Context<T> {
    /// Convert into a [`Result`], using `msg` as the error message.
    fn context<C: Display>(self, msg: C) -> Result<T>;
}

impl<T> Context<T> for Option<T> {
    fn context<C: Display>(self, msg: C) -> Result<T> {
        self.ok_or_else(|| Error::GenericError(msg.to_string()))
    }
}

impl<T, E: Display> Context<T> for std::result::Result<T, E> {
    fn context<C: Display>(self, msg: C) -> Result<T> {
        self.map_err(|e| Error::GenericError(format!("{msg}: {e}")))
    }
}

/// Attaches filesystem context to IO results.
pub trait ErrorExt<T> {
    /// Wrap an IO error with the operation description and path.
    fn fs_context(self, context: &str, path: impl AsRef<Path>) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, io::Error> {
    fn fs_context(self, context: &str, path: impl AsRef<Path>) -> Result<T> {
        self.map_err(|error| Error::Fs {
            context: context.to_string(),
            path: path.as_ref().to_path_buf(),
            error,
        })
    }
}

/// Return early with a [`Error::GenericError`] built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::bundler::Error::GenericError(format!($($arg)*)))
    };
}
