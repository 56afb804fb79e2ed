// src/cli.rs
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::config::consts::BASE_URL;
use crate::config::options::{ExportFormat, RunOptions};
use crate::core::net::HttpClient;
use crate::error::Result;
use crate::progress::ConsoleProgress;
use crate::runner::{self, RunSummary};

/// Scrape a volby.cz district page into one CSV row per municipality.
#[derive(Parser, Debug)]
#[command(name = "volby_scrape", version, about)]
pub struct Args {
    /// District listing page, e.g. https://www.volby.cz/pls/ps2017nss/ps32?xjazyk=CZ&xkraj=2&xnumnuts=2101
    pub district_url: String,

    /// Output file
    pub out: PathBuf,

    /// Prefix for the relative detail links found on the listing page
    #[arg(long, default_value = BASE_URL)]
    pub base_url: String,

    /// Per-request timeout in seconds (default: wait indefinitely)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Output format (delimiter only; OUT is used as given)
    #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
    pub format: ExportFormat,
}

impl Args {
    pub fn to_options(&self) -> RunOptions {
        RunOptions {
            base_url: self.base_url.clone(),
            timeout: self.timeout.map(Duration::from_secs),
            format: self.format,
            ..RunOptions::new(self.district_url.clone(), self.out.clone())
        }
    }
}

pub fn run(args: &Args) -> Result<RunSummary> {
    let opts = args.to_options();
    let client = HttpClient::new(opts.timeout)?;
    runner::run(&opts, &client, Some(&mut ConsoleProgress))
}
