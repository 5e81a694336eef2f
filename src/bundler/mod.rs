//! ICU resource bundle builder.
//!
//! Collects locale `.txt` sources, generates the locale index and the
//! `pkgdata` manifest, and drives the ICU command-line tools to produce a
//! packaged bundle in the requested byte order.
//!
//! # Example
//!
//! ```no_run
//! use resbundler::bundler::{Bundler, Endian, SettingsBuilder};
//!
//! # async fn example() -> resbundler::bundler::Result<()> {
//! let settings = SettingsBuilder::new()
//!     .name("myapp")
//!     .source_dir("loc")
//!     .dest_dir("out")
//!     .endian(Endian::Big)
//!     .build()?;
//!
//! let report = Bundler::new(settings).bundle().await?;
//! for locale in report.failed_locales() {
//!     eprintln!("genrb failed for {locale}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod error;
pub mod locale;
pub mod settings;
pub mod tools;

pub use builder::{BundleReport, Bundler, Workspace};
pub use error::{Error, Result};
pub use settings::{Endian, PackageMode, Settings, SettingsBuilder, ToolPaths};
