//! CSS selector parsing utilities.

use scraper::Selector;

/// Parses a CSS selector that is a compile-time constant.
///
/// # Panics
///
/// Panics if the selector cannot be parsed. Only call this with literal
/// selectors, where a failure is a programming error caught by the tests.
pub fn parse_static_selector(selector_str: &str, context: &str) -> Selector {
    Selector::parse(selector_str).unwrap_or_else(|e| {
        panic!(
            "Failed to parse CSS selector '{}' for {}: {}. This is a programming error.",
            selector_str, context, e
        )
    })
}
