//! Command line interface for resbundler.
//!
//! Parses arguments, sets up logging from the verbosity level and runs the
//! bundler.

mod args;

pub use args::Args;

use crate::bundler::Bundler;
use crate::error::Result;

/// Main CLI entry point
///
/// Returns the process exit code on success.
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();
    init_logging(args.verbose);

    log::info!("Options: {:?}", args);

    let invocation = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    let settings = args.to_settings(&invocation)?;

    let report = Bundler::new(settings).bundle().await?;

    let failed: Vec<_> = report.failed_locales().collect();
    if !failed.is_empty() {
        log::warn!(
            "genrb failed for {} of {} entries: {}",
            failed.len(),
            report.entries,
            failed.join(", ")
        );
    }
    log::info!("Created {}", report.artifact.display());

    Ok(0)
}

/// Installs `env_logger` with a default level derived from `-v`.
///
/// `RUST_LOG` takes precedence when set.
pub fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .try_init();
}
