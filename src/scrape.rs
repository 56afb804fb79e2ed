// src/scrape.rs
use log::{debug, warn};

use crate::{
    core::net::{fetch_document, Fetch},
    error::Result,
    model::{MunicipalityRef, MunicipalityResult},
    progress::Progress,
    specs::municipality::{extract_party_votes, extract_summary},
};

/// Fetch one municipality's detail page and merge it with its listing entry.
pub fn collect_one(fetch: &dyn Fetch, muni: &MunicipalityRef) -> Result<MunicipalityResult> {
    let doc = fetch_document(fetch, &muni.detail_url)?;
    let summary = extract_summary(&doc);
    let parties = extract_party_votes(&doc);

    debug!("{} {}: {} party rows", muni.code, muni.name, parties.len());
    if parties.is_empty() {
        warn!("{} {}: no party rows on {}", muni.code, muni.name, muni.detail_url);
    }
    Ok(MunicipalityResult::new(muni, summary, parties))
}

/// Collect every municipality in listing order, one request at a time.
/// The first failure aborts the whole collection.
pub fn collect_results(
    fetch: &dyn Fetch,
    munis: &[MunicipalityRef],
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<Vec<MunicipalityResult>> {
    let mut out = Vec::with_capacity(munis.len());

    for (i, muni) in munis.iter().enumerate() {
        if let Some(p) = progress.as_deref_mut() {
            p.item_started(i, &muni.name);
        }
        out.push(collect_one(fetch, muni)?);
    }
    Ok(out)
}
