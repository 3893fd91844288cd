//! Visible text extraction.

use scraper::ElementRef;

/// Elements whose text content is never rendered.
const HIDDEN_TEXT_TAGS: &[&str] = &["script", "style", "template"];

/// Joins every visible text node under `element` with single spaces.
///
/// Each text node is trimmed and empty nodes are skipped, so adjacent inline
/// elements (`<b>foo</b>bar`) come out as separate words.
pub fn visible_text(element: ElementRef<'_>) -> String {
    let mut pieces: Vec<&str> = Vec::new();
    for node in element.descendants() {
        let Some(text) = node.value().as_text() else {
            continue;
        };
        let hidden = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .is_some_and(|el| HIDDEN_TEXT_TAGS.contains(&el.name()))
        });
        if hidden {
            continue;
        }
        let trimmed = text.trim();
        if !trimmed.is_empty() {
            pieces.push(trimmed);
        }
    }
    pieces.join(" ")
}

/// Collapses every whitespace run (newlines and tabs included) into one ASCII
/// space and trims both ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
