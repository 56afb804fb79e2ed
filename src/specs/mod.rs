// src/specs/mod.rs
//! # Page specs
//!
//! One module per page type on volby.cz. Each spec knows *where the data lives
//! in the HTML* and turns a parsed `scraper::Html` into plain records. Specs do
//! no I/O: fetching lives in `core::net`, sequencing in `scrape`, output in
//! `table`/`file`.
//!
//! ## Pages
//! - `district` – the district listing (`ps32?...`): one row per municipality
//!   with its code, name and a link to the detail page.
//! - `municipality` – the municipality detail (`ps311?...`): a summary table
//!   keyed by `headers` markers and one or more party tables.
//!
//! ## Known fragility
//! Data rows are recognised by shape, not by semantic markup: a `<tr>` with at
//! least three `<td>` whose first cell is all digits. The pages are fixed
//! external documents, so this is kept as is. Unrelated tables with a numeric
//! first column will produce extra rows (e.g. the summary table on a detail
//! page yields a purely numeric "party" name, which the exporter drops).
//!
//! ## Testing
//! Specs are tested offline against inline HTML snippets.
pub mod district;
pub mod municipality;
