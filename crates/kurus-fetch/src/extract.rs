//! Inline series extraction from product page HTML.

use regex::Regex;
use std::sync::OnceLock;

static PRGJ_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Pattern for the chart bootstrap assignment, either quote style.
fn prgj_pattern() -> &'static Regex {
    PRGJ_PATTERN.get_or_init(|| {
        Regex::new(r#"_PRGJ\s*=\s*(?:'([^']*)'|"([^"]*)")"#).expect("valid series pattern")
    })
}

/// Recovers the inline compact series from a product page's HTML.
///
/// Product pages embed the full series in a script tag as a `_PRGJ`
/// variable assignment, which saves a round trip to the chart CDN when
/// present. Returns the first non-empty assignment found.
#[must_use]
pub fn extract_inline_series(html: &str) -> Option<String> {
    prgj_pattern()
        .captures_iter(html)
        .filter_map(|caps| {
            caps.get(1)
                .or_else(|| caps.get(2))
                .map(|m| m.as_str().to_string())
        })
        .find(|series| !series.is_empty())
}
