// tests/common/mod.rs
//
// Offline fixtures: an in-memory `Fetch` and small page builders.
#![allow(dead_code)]

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use reqwest::StatusCode;
use volby_scrape::core::net::Fetch;
use volby_scrape::Error;

pub const BASE: &str = "http://volby.test/ps/";
pub const DISTRICT: &str = "http://volby.test/ps/ps32?xkraj=2&xnumnuts=2101";

#[derive(Default)]
pub struct FixtureFetch {
    pages: HashMap<String, String>,
}

impl FixtureFetch {
    pub fn page(mut self, url: &str, body: String) -> Self {
        self.pages.insert(url.to_string(), body);
        self
    }
}

impl Fetch for FixtureFetch {
    fn get_text(&self, url: &str) -> Result<String, Error> {
        self.pages.get(url).cloned().ok_or_else(|| Error::Status {
            url: url.to_string(),
            status: StatusCode::NOT_FOUND,
        })
    }
}

pub fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("volby_it_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

/// Listing page with one row per (code, name, href).
pub fn district_page(rows: &[(&str, &str, &str)]) -> String {
    let mut body = String::from(
        "<html><body><table><tr><th>Číslo</th><th>Název</th><th>Výběr okrsku</th></tr>",
    );
    for (code, name, href) in rows {
        body.push_str(&format!(
            r#"<tr><td class="cislo"><a href="{href}">{code}</a></td><td class="overflow_name">{name}</td><td class="center">X</td></tr>"#
        ));
    }
    body.push_str("</table></body></html>");
    body
}

/// Detail page. `None` leaves the marker cell out entirely.
pub fn detail_page(
    voters: Option<&str>,
    envelopes: Option<&str>,
    valid: Option<&str>,
    parties: &[(&str, &str, &str)],
) -> String {
    let mut body = String::from("<html><body><table><tr>");
    for (marker, value) in [("sa2", voters), ("sa3", envelopes), ("sa6", valid)] {
        if let Some(v) = value {
            body.push_str(&format!(r#"<td class="cislo" headers="{marker}">{v}</td>"#));
        }
    }
    body.push_str("</tr></table><table>");
    for (num, name, votes) in parties {
        body.push_str(&format!(
            r#"<tr><td class="cislo">{num}</td><td class="overflow_name">{name}</td><td class="cislo">{votes}</td><td>1,00</td></tr>"#
        ));
    }
    body.push_str("</table></body></html>");
    body
}
