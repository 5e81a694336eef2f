//! resbundler - ICU resource bundle builder.
//!
//! This binary turns directories of locale .txt sources into a packaged ICU
//! resource bundle using genrb, pkgdata and icupkg.

use resbundler::cli;
use std::process;

#[tokio::main]
async fn main() {
    // Run CLI and get exit code
    let exit_code = match cli::run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    };

    process::exit(exit_code);
}
