// src/core/html.rs
// Small helpers over `scraper` shared by the page specs.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use super::sanitize::normalize_nbsp;

fn selector(css: &'static str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("bad selector literal {css:?}: {e}"))
}

pub static TABLE: LazyLock<Selector> = LazyLock::new(|| selector("table"));
pub static TR: LazyLock<Selector> = LazyLock::new(|| selector("tr"));
pub static TD: LazyLock<Selector> = LazyLock::new(|| selector("td"));
pub static TD_WITH_HEADERS: LazyLock<Selector> = LazyLock::new(|| selector("td[headers]"));
pub static A_WITH_HREF: LazyLock<Selector> = LazyLock::new(|| selector("a[href]"));

/// Every `<td>` below `row`, nested ones included, in document order.
pub fn cells<'a>(row: ElementRef<'a>) -> Vec<ElementRef<'a>> {
    row.select(&TD).collect()
}

/// Each descendant text node trimmed on its own, empty pieces dropped, then joined.
pub fn stripped_text(el: ElementRef<'_>) -> String {
    el.text().map(str::trim).filter(|t| !t.is_empty()).collect()
}

/// Raw descendant text with NBSP folded to a space, trimmed at the ends only.
pub fn clean_text(el: ElementRef<'_>) -> String {
    let raw: String = el.text().collect();
    normalize_nbsp(&raw).trim().to_string()
}

/// `href` of the first link inside `el`.
pub fn first_href<'a>(el: ElementRef<'a>) -> Option<&'a str> {
    el.select(&A_WITH_HREF).next()?.value().attr("href")
}

/// First `<td>` whose `headers` attribute contains `marker` as a substring.
pub fn find_cell_by_header<'a>(doc: &'a Html, marker: &str) -> Option<ElementRef<'a>> {
    doc.select(&TD_WITH_HEADERS)
        .find(|td| td.value().attr("headers").is_some_and(|h| h.contains(marker)))
}
