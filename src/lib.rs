//! ICU resource bundle builder library
//!
//! This library collects locale resource sources, generates the locale index
//! and package manifest, and drives the ICU tools (`genrb`, `pkgdata`,
//! `icupkg`) to produce a single resource bundle:
//! - `archive` mode `.dat` files, optionally byte-swapped
//! - `files` mode trees of individual `.res` files
//! - `dll`, `static` and `common` modes as supported by `pkgdata`
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod bundler;
pub mod cli;
pub mod error;

// Re-export commonly used types
pub use error::{BundlerError, CliError, Result};
