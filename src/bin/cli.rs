// src/bin/cli.rs
use clap::Parser;
use volby_scrape::cli::{self, Args};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    volby_scrape::logging::init();

    let args = Args::parse();
    cli::run(&args)?;
    Ok(())
}
