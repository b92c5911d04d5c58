//! rdm - Entry Point
//!
//! Binary entry point for the `rdm` command line. Lives in the `rdm`
//! facade crate next to the library re-exports.

use clap::Parser;
use rdm::{Cli, run};

/// Main entry point for rdm
///
/// Every error aborts the run and is reported by the returned error.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    run(&cli)?;
    Ok(())
}
