// src/core/sanitize.rs
//! Text cleanup for scraped cells: sentinel rules, names, heights, prices, profile links.

use unicode_normalization::char::canonical_combining_class;
use unicode_normalization::UnicodeNormalization;

use crate::config::consts::HEIGHT_UNIT;
use crate::config::options::PriceRules;
use crate::error::PriceError;

/// Result of the generic cell rule applied to every tracked centered cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellText {
    Value(String),
    /// Nothing left after line breaks and surrounding whitespace are removed.
    Empty,
    /// Contains `-` or a character outside ASCII printable.
    Invalid,
}

/// ASCII graphic characters plus the six ASCII whitespace chars.
pub fn is_printable(c: char) -> bool {
    c.is_ascii_graphic() || matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c')
}

/// Every char that ends a line: `\n`, `\r`, VT, FF, the file/group/record separators,
/// NEL and the Unicode line/paragraph separators.
pub fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Drop line breaks, then trim ASCII whitespace only (a lone `&nbsp;` must stay visible).
pub fn join_lines(s: &str) -> String {
    let joined: String = s.chars().filter(|c| !is_line_break(*c)).collect();
    s!(joined.trim_matches(|c: char| c.is_ascii_whitespace()))
}

pub fn clean_cell(raw: &str) -> CellText {
    let text = join_lines(raw);
    if text.contains('-') || !text.chars().all(is_printable) {
        CellText::Invalid
    } else if text.is_empty() {
        CellText::Empty
    } else {
        CellText::Value(text)
    }
}

/// "1,85m" → "185". Anything that isn't a height passes through trimmed.
pub fn clean_height(s: &str) -> String {
    s!(s.replace(',', "").replace(HEIGHT_UNIT, "").trim())
}

/// Decompose and drop combining marks: "Mateo Kovačić" → "Mateo Kovacic".
pub fn strip_accents(s: &str) -> String {
    s.nfkd().filter(|c| canonical_combining_class(*c) == 0).collect()
}

/// Name cell → display name. Idempotent.
pub fn clean_name(raw: &str) -> String {
    let unaccented = strip_accents(raw);
    let cleaned: String = unaccented.chars().filter(|c| !matches!(c, '-' | '\n')).collect();
    s!(cleaned.trim())
}

/// Price cell → millions as f64.
///
/// Currency glyphs and the million unit are removed. A thousands marker is removed and
/// the remaining digits are read as a fraction of a million (`800k` → `0.800`).
/// The bare no-price sentinel is `0.0`.
pub fn parse_price(raw: &str, rules: &PriceRules) -> Result<f64, PriceError> {
    let mut text = s!(raw);
    for glyph in rules.currency_glyphs.iter().filter(|g| !g.is_empty()) {
        text = text.replace(glyph.as_str(), "");
    }
    if !rules.million_unit.is_empty() {
        text = text.replace(rules.million_unit.as_str(), "");
    }
    let marker = rules
        .thousands_markers
        .iter()
        .find(|m| !m.is_empty() && text.contains(m.as_str()));
    if let Some(marker) = marker {
        let digits = text.replace(marker.as_str(), "");
        text = join!("0.", digits.trim());
    }

    let cleaned = text.trim();
    if cleaned == rules.no_price {
        return Ok(0.0);
    }
    match cleaned.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(PriceError { raw: s!(raw), cleaned: s!(cleaned) }),
    }
}

/// Relative profile href → absolute URL. Already-absolute hrefs are left alone.
pub fn profile_link(href: &str, origin: &str) -> String {
    if href.starts_with("http://") || href.starts_with("https://") {
        return s!(href);
    }
    let origin = origin.trim_end_matches('/');
    if href.starts_with('/') {
        join!(origin, href)
    } else {
        join!(origin, "/", href)
    }
}

/// Keep hrefs that contain `marker`, in document order, made absolute.
pub fn profile_links<S: AsRef<str>>(hrefs: &[S], marker: &str, origin: &str) -> Vec<String> {
    hrefs
        .iter()
        .map(|h| AsRef::<str>::as_ref(h))
        .filter(|h| h.contains(marker))
        .map(|h| profile_link(h, origin))
        .collect()
}
