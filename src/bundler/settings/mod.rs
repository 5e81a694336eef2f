//! Configuration structures for bundle builds.
//!
//! [`Settings`] is the validated configuration shared by every pipeline step.
//! It is built from command-line arguments through [`SettingsBuilder`].

mod builder;
mod core;
mod endian;
mod mode;
mod tools;

pub use builder::SettingsBuilder;
pub use self::core::{SCRATCH_DIR_NAME, Settings};
pub use endian::Endian;
pub use mode::PackageMode;
pub use tools::ToolPaths;
