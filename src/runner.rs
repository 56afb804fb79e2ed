// src/runner.rs
use std::path::PathBuf;

use log::info;

use crate::{
    config::options::RunOptions,
    core::net::{fetch_document, Fetch},
    error::Result,
    file::write_table,
    progress::Progress,
    scrape::collect_results,
    specs::district::list_municipalities,
    table::Table,
};

/// Summary of what was produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub municipalities: usize,
    pub party_columns: usize,
    pub out_path: PathBuf,
}

/// Top-level pipeline: listing -> details -> table -> file.
///
/// Nothing is written until every detail page has been fetched, so a failed
/// run leaves no output file behind.
pub fn run(
    opts: &RunOptions,
    fetch: &dyn Fetch,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<RunSummary> {
    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Downloading data from: {}", opts.district_url));
    }
    let listing = fetch_document(fetch, &opts.district_url)?;
    let munis = list_municipalities(&listing, &opts.base_url);
    info!("{} municipalities listed on {}", munis.len(), opts.district_url);

    if let Some(p) = progress.as_deref_mut() {
        p.begin(munis.len());
    }

    let results = collect_results(
        fetch,
        &munis,
        progress.as_mut().map(|p| &mut **p as &mut dyn Progress),
    )?;
    let table = Table::from_results(&results);

    let out_path = opts.out_path.clone();
    write_table(&out_path, &table, opts.format)?;
    info!("Wrote {} rows x {} party columns to {}", table.rows.len(), table.party_count(), out_path.display());

    if let Some(p) = progress.as_deref_mut() {
        p.finish(&out_path);
    }

    Ok(RunSummary {
        municipalities: results.len(),
        party_columns: table.party_count(),
        out_path,
    })
}
