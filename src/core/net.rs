// src/core/net.rs

// Blocking HTTP GET. One request at a time, no retries, no caching.

use std::time::Duration;

use log::debug;
use reqwest::blocking::Client;
use scraper::Html;

use crate::config::consts::USER_AGENT;
use crate::error::{Error, Result};

/// Source of page bodies. `HttpClient` is the real one; tests plug in fixtures.
pub trait Fetch {
    fn get_text(&self, url: &str) -> Result<String>;
}

pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// `timeout: None` disables the request deadline entirely.
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(Error::Client)?;
        Ok(Self { client })
    }
}

impl Fetch for HttpClient {
    fn get_text(&self, url: &str) -> Result<String> {
        debug!("GET {url}");
        let http_err = |source: reqwest::Error| Error::Http { url: s!(url), source };

        let resp = self.client.get(url).send().map_err(http_err)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Status { url: s!(url), status });
        }
        resp.text().map_err(http_err)
    }
}

/// Fetch `url` and parse it into a queryable document.
pub fn fetch_document(fetch: &dyn Fetch, url: &str) -> Result<Html> {
    let body = fetch.get_text(url)?;
    Ok(Html::parse_document(&body))
}
