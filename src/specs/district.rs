// src/specs/district.rs
use log::debug;
use scraper::Html;

use crate::core::html::{cells, first_href, stripped_text, TABLE, TR};
use crate::core::sanitize::is_digits;
use crate::model::MunicipalityRef;

/// Municipalities listed on a district page, in page order.
///
/// A row counts when it has at least 3 cells and its first cell is a numeric
/// code. The detail link comes from the first cell, else the third; rows with
/// neither are skipped. Only anchors carrying an `href` count: an `<a>` without
/// one in the first cell does not stop the lookup from falling back to the
/// third cell. `base_url` is prepended verbatim to the relative href.
pub fn list_municipalities(doc: &Html, base_url: &str) -> Vec<MunicipalityRef> {
    let mut out = Vec::new();

    for table in doc.select(&TABLE) {
        for row in table.select(&TR) {
            let tds = cells(row);
            if tds.len() < 3 {
                continue;
            }

            let code = stripped_text(tds[0]);
            if !is_digits(&code) {
                continue;
            }

            let Some(href) = first_href(tds[0]).or_else(|| first_href(tds[2])) else {
                debug!("Listing row {code}: no detail link, skipped");
                continue;
            };

            out.push(MunicipalityRef {
                code,
                name: stripped_text(tds[1]),
                detail_url: format!("{base_url}{href}"),
            });
        }
    }
    out
}
