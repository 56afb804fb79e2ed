// src/specs/municipality.rs
use log::warn;
use scraper::Html;

use crate::config::consts::{MARKER_ENVELOPES, MARKER_VALID, MARKER_VOTERS};
use crate::core::html::{cells, clean_text, find_cell_by_header, stripped_text, TR};
use crate::core::sanitize::{is_digits, normalize_nbsp};
use crate::model::{PartyVotes, SummaryStats};

/// Voters, issued envelopes and valid votes from the summary table.
/// A missing marker gives an empty field, never an error.
pub fn extract_summary(doc: &Html) -> SummaryStats {
    let field = |marker: &str| {
        find_cell_by_header(doc, marker)
            .map(clean_text)
            .unwrap_or_default()
    };

    SummaryStats {
        eligible_voters: field(MARKER_VOTERS),
        envelopes_issued: field(MARKER_ENVELOPES),
        valid_votes: field(MARKER_VALID),
    }
}

/// Party name -> votes for every row that starts with a ballot number.
///
/// Rows from every table on the page are considered. Counts keep their
/// page formatting apart from NBSP -> space.
pub fn extract_party_votes(doc: &Html) -> PartyVotes {
    let mut out = PartyVotes::new();

    for row in doc.select(&TR) {
        let tds = cells(row);
        if tds.len() < 3 || !is_digits(&stripped_text(tds[0])) {
            continue;
        }

        let party = stripped_text(tds[1]);
        let votes = normalize_nbsp(&stripped_text(tds[2]));
        if let Some(prev) = out.insert(party.clone(), votes) {
            warn!("Party {party:?} listed twice on one page; replacing {prev:?}");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trimmed-down copy of a ps311 detail page.
    const DETAIL: &str = r#"
        <html><body>
        <table id="ps311_t1">
          <tr><th id="sa1">Okrsky</th><th id="sa2">Voliči v seznamu</th></tr>
          <tr>
            <td class="cislo" headers="sa1 sa1a">1</td>
            <td class="cislo" headers="sa1 sa1b">1</td>
            <td class="cislo" headers="sa1 sa1c">100,00</td>
            <td class="cislo" headers="sa2">1&nbsp;205</td>
            <td class="cislo" headers="sa3">  812 </td>
            <td class="cislo" headers="sa4">67,39</td>
            <td class="cislo" headers="sa5">812</td>
            <td class="cislo" headers="sa6">809</td>
          </tr>
        </table>
        <table class="table">
          <tr><th>Strana číslo</th><th>název</th><th>celkem</th><th>v %</th></tr>
          <tr>
            <td class="cislo" headers="t1sa1 t1sb1">1</td>
            <td class="overflow_name" headers="t1sa1 t1sb2">Občanská demokratická strana</td>
            <td class="cislo" headers="t1sa2 t1sb3">1&nbsp;052</td>
            <td class="cislo" headers="t1sa2 t1sb4">13,00</td>
          </tr>
          <tr>
            <td class="cislo">4</td>
            <td class="overflow_name">Česká str.sociálně demokrat.</td>
            <td class="cislo">63</td>
            <td class="cislo">7,78</td>
          </tr>
        </table>
        </body></html>
    "#;

    #[test]
    fn summary_reads_marker_cells() {
        let s = extract_summary(&Html::parse_document(DETAIL));
        assert_eq!(s.eligible_voters, "1 205");
        assert_eq!(s.envelopes_issued, "812");
        assert_eq!(s.valid_votes, "809");
    }

    #[test]
    fn summary_missing_markers_are_empty() {
        let doc = Html::parse_document(r#"
            <table><tr><td headers="sa2">1000</td><td headers="sa9">x</td></tr></table>
        "#);
        let s = extract_summary(&doc);
        assert_eq!(s.eligible_voters, "1000");
        assert_eq!(s.envelopes_issued, "");
        assert_eq!(s.valid_votes, "");
    }

    #[test]
    fn summary_takes_first_matching_cell() {
        let doc = Html::parse_document(r#"
            <table><tr><td headers="sa6">780</td></tr><tr><td headers="sa6">1</td></tr></table>
        "#);
        assert_eq!(extract_summary(&doc).valid_votes, "780");
    }

    #[test]
    fn party_rows_in_page_order() {
        let pv = extract_party_votes(&Html::parse_document(DETAIL));
        let got: Vec<_> = pv.iter().collect();
        assert_eq!(got, [
            // summary row matches the row shape too; the exporter filters it out
            ("1", "100,00"),
            ("Občanská demokratická strana", "1 052"),
            ("Česká str.sociálně demokrat.", "63"),
        ]);
    }

    #[test]
    fn duplicate_party_last_wins() {
        let doc = Html::parse_document(r#"
            <table>
              <tr><td>1</td><td>Strana A</td><td>10</td></tr>
              <tr><td>2</td><td>Strana A</td><td>20</td></tr>
            </table>
        "#);
        let pv = extract_party_votes(&doc);
        assert_eq!(pv.len(), 1);
        assert_eq!(pv.get("Strana A"), Some("20"));
    }

    #[test]
    fn no_party_rows_gives_empty_map() {
        let doc = Html::parse_document("<table><tr><td>x</td><td>y</td><td>z</td></tr></table>");
        assert!(extract_party_votes(&doc).is_empty());
    }
}
