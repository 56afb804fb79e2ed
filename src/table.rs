// src/table.rs
//
// Column union over sparse per-municipality records.
//
// Pass 1 collects every party name seen in any result; pass 2 emits one row per
// result with the fixed columns first and "0" for parties the municipality did
// not report. The column set is only known once every page has been read.

use std::collections::BTreeSet;
use std::io::{self, Write};

use csv::{Terminator, WriterBuilder};

use crate::config::consts::{FIXED_COLUMNS, MISSING_VOTES};
use crate::config::options::ExportFormat;
use crate::core::sanitize::has_alpha;
use crate::error::Result;
use crate::model::MunicipalityResult;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn from_results(results: &[MunicipalityResult]) -> Self {
        let parties = party_columns(results);

        let mut headers: Vec<String> = FIXED_COLUMNS.iter().map(|c| s!(*c)).collect();
        headers.extend(parties.iter().cloned());

        let rows = results
            .iter()
            .map(|r| {
                let mut row: Vec<String> = r.fixed_values().iter().map(|v| s!(*v)).collect();
                row.extend(
                    parties
                        .iter()
                        .map(|p| s!(r.votes(p).unwrap_or(MISSING_VOTES))),
                );
                row
            })
            .collect();

        Self { headers, rows }
    }

    /// Number of dynamic (party) columns.
    pub fn party_count(&self) -> usize {
        self.headers.len().saturating_sub(FIXED_COLUMNS.len())
    }

    /// Header row then data rows, CRLF-terminated, quoting only where needed.
    pub fn write<W: Write>(&self, w: W, format: ExportFormat) -> Result<()> {
        let mut out = WriterBuilder::new()
            .delimiter(format.delim())
            .terminator(Terminator::CRLF)
            .from_writer(w);

        out.write_record(&self.headers)?;
        for row in &self.rows {
            out.write_record(row)?;
        }
        out.flush()?;
        Ok(())
    }

    pub fn to_export_string(&self, format: ExportFormat) -> Result<String> {
        let mut buf: Vec<u8> = Vec::new();
        self.write(&mut buf, format)?;

        String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e).into())
    }
}

/// Sorted, deduplicated party names across all results.
///
/// A key qualifies when it is not a fixed column and contains at least one
/// letter; purely numeric names picked up from summary rows are dropped here.
pub fn party_columns(results: &[MunicipalityResult]) -> Vec<String> {
    let set: BTreeSet<&str> = results
        .iter()
        .flat_map(|r| r.parties.names())
        .filter(|name| !FIXED_COLUMNS.contains(name))
        .filter(|name| has_alpha(name))
        .collect();

    set.into_iter().map(String::from).collect()
}
