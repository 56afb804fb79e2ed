// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use super::consts::BASE_URL;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    #[default]
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn delim(&self) -> u8 {
        match self { ExportFormat::Csv => b',', ExportFormat::Tsv => b'\t' }
    }
}

/// Everything one run needs: where to start, where to write.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    /// District listing page.
    pub district_url: String,
    /// Written exactly as given.
    pub out_path: PathBuf,
    /// Prefix joined with each relative detail link found on the listing page.
    pub base_url: String,
    /// None = block until the server answers.
    pub timeout: Option<Duration>,
    pub format: ExportFormat,
}

impl RunOptions {
    pub fn new(district_url: impl Into<String>, out_path: impl Into<PathBuf>) -> Self {
        Self {
            district_url: district_url.into(),
            out_path: out_path.into(),
            base_url: s!(BASE_URL),
            timeout: None,
            format: ExportFormat::default(),
        }
    }
}
