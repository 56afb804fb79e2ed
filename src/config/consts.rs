// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://www.volby.cz/pls/ps2017nss/";
pub const USER_AGENT: &str = concat!("volby_scrape/", env!("CARGO_PKG_VERSION"));

// Summary table markers (`headers` attribute of the detail page cells)
pub const MARKER_VOTERS: &str = "sa2";
pub const MARKER_ENVELOPES: &str = "sa3";
pub const MARKER_VALID: &str = "sa6";

// Export
pub const COL_CODE: &str = "kod_obce";
pub const COL_NAME: &str = "nazev_obce";
pub const COL_VOTERS: &str = "volici";
pub const COL_ENVELOPES: &str = "vydane_obalky";
pub const COL_VALID: &str = "platne_hlasy";

pub const FIXED_COLUMNS: [&str; 5] = [COL_CODE, COL_NAME, COL_VOTERS, COL_ENVELOPES, COL_VALID];

/// Written for a party that did not appear on a municipality's page.
pub const MISSING_VOTES: &str = "0";
