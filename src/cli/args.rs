//! Command line argument parsing and validation.
//!
//! This module provides CLI argument parsing using clap and the conversion
//! into validated bundler [`Settings`].

use crate::bundler::{Endian, PackageMode, Settings, SettingsBuilder, ToolPaths};
use crate::error::CliError;
use clap::Parser;
use std::path::PathBuf;

/// ICU resource bundle builder
#[derive(Parser, Debug)]
#[command(
    name = "resbundler",
    version,
    about = "Builds an ICU resource bundle from locale .txt sources",
    long_about = "Collects locale .txt sources, generates res_index and the pkgdata file list,
compiles every locale with genrb and packages the result with pkgdata.
If the requested byte order differs from the host, the bundle is rewritten with icupkg.

Usage:
  resbundler --name myapp --from ./loc -d ./out
  resbundler -n myapp -f ./loc -f ./overrides -m files -e big -d ./out

The ICU tools are looked up on PATH unless given explicitly."
)]
pub struct Args {
    /// Read .txt files from this directory (repeatable)
    #[arg(short = 'f', long = "from", value_name = "DIR", required = true)]
    pub from: Vec<PathBuf>,

    /// Bundle name, such as "myapp"
    #[arg(short, long, value_name = "NAME")]
    pub name: String,

    /// pkgdata packaging mode
    #[arg(short, long, value_enum, default_value_t = PackageMode::Archive)]
    pub mode: PackageMode,

    /// Destination directory
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub dest: PathBuf,

    /// Byte order of the bundle
    #[arg(short, long, value_enum, default_value_t = Endian::Host)]
    pub endian: Endian,

    /// Increase diagnostic output (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Fail when genrb reports an error instead of packaging what was compiled
    #[arg(long)]
    pub strict: bool,

    /// Path to genrb
    #[arg(long, env = "RESBUNDLER_GENRB", value_name = "PATH")]
    pub genrb: Option<PathBuf>,

    /// Path to pkgdata
    #[arg(long, env = "RESBUNDLER_PKGDATA", value_name = "PATH")]
    pub pkgdata: Option<PathBuf>,

    /// Path to icupkg
    #[arg(long, env = "RESBUNDLER_ICUPKG", value_name = "PATH")]
    pub icupkg: Option<PathBuf>,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Builds validated settings, recording `invocation` in the manifest.
    pub fn to_settings(&self, invocation: &str) -> Result<Settings, CliError> {
        SettingsBuilder::new()
            .name(&self.name)
            .source_dirs(&self.from)
            .mode(self.mode)
            .dest_dir(&self.dest)
            .endian(self.endian)
            .verbosity(self.verbose)
            .strict(self.strict)
            .invocation(invocation)
            .tools(ToolPaths {
                genrb: self.genrb.clone(),
                pkgdata: self.pkgdata.clone(),
                icupkg: self.icupkg.clone(),
            })
            .build()
            .map_err(|e| CliError::InvalidArguments {
                reason: e.to_string(),
            })
    }
}
