//! SPI - Entry Point
//!
//! Binary entry point for the `spi` command line.

// Force-link spi-providers so its linkme registrations are included
extern crate spi_providers;

use clap::Parser;
use spi::cli::{Cli, run};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run(&cli)
}
