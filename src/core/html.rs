// src/core/html.rs
// Thin helpers over `scraper`: compile selectors, pull cell text and hrefs in document order.

use scraper::{ElementRef, Html, Selector};

use crate::error::ScrapeError;

pub fn parse_document(markup: &str) -> Html {
    Html::parse_document(markup)
}

pub fn selector(css: &str) -> Result<Selector, ScrapeError> {
    Selector::parse(css).map_err(|_| ScrapeError::Selector(s!(css)))
}

/// Concatenated descendant text of an element, untouched.
pub fn inner_text(el: ElementRef<'_>) -> String {
    el.text().collect()
}

/// Text of every element matching `sel`, in document order.
pub fn select_texts(doc: &Html, sel: &Selector) -> Vec<String> {
    doc.select(sel).map(inner_text).collect()
}

/// `href` of every element matching `sel`, in document order. Elements without one are skipped.
pub fn select_hrefs(doc: &Html, sel: &Selector) -> Vec<String> {
    doc.select(sel)
        .filter_map(|el| el.value().attr("href"))
        .map(String::from)
        .collect()
}
