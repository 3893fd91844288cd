//! Content significance classification.
//!
//! Decides whether a page carries a substantive amount of visible text:
//! 1. Pick a region: first `<main>`, else first `<article>`, else first
//!    `<div>` with class `content`, else `<body>`, else the whole document.
//! 2. Extract its visible text, collapse whitespace, count code points.
//! 3. Significant iff the count reaches `MIN_CONTENT_CHARS`.

mod text;

use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

use crate::config::MIN_CONTENT_CHARS;
use crate::utils::parse_static_selector;

pub use text::{collapse_whitespace, visible_text};

static MAIN_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_static_selector("main", "main content region"));
static ARTICLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_static_selector("article", "article content region"));
static CONTENT_DIV_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_static_selector("div.content", "content div region"));
static BODY_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_static_selector("body", "body fallback region"));

/// Which part of the document the text was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentRegion {
    Main,
    Article,
    ContentDiv,
    Body,
    Document,
}

impl ContentRegion {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentRegion::Main => "main",
            ContentRegion::Article => "article",
            ContentRegion::ContentDiv => "div.content",
            ContentRegion::Body => "body",
            ContentRegion::Document => "document",
        }
    }
}

/// Result of classifying one document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentAnalysis {
    pub region: ContentRegion,
    /// Visible characters in the region after whitespace collapsing (code points)
    pub char_count: usize,
}

impl ContentAnalysis {
    pub fn is_significant(&self) -> bool {
        self.char_count >= MIN_CONTENT_CHARS
    }
}

/// Classifies an already parsed document.
///
/// The parser synthesizes `<body>` when the markup has none, so a parsed tree
/// alone cannot tell the two apart; this treats `<body>` as authored. Use
/// `analyze_html` when the source markup is available.
pub fn analyze_content(document: &Html) -> ContentAnalysis {
    classify(document, true)
}

fn classify(document: &Html, body_authored: bool) -> ContentAnalysis {
    let (region, element) = locate_region(document, body_authored);
    let text = collapse_whitespace(&visible_text(element));
    ContentAnalysis {
        region,
        char_count: text.chars().count(),
    }
}

/// Parses `html` and classifies it.
///
/// Parsing never fails; malformed markup is recovered the way browsers do.
/// Markup without a `<body>` start tag falls back to the whole document,
/// `<head>` text included.
pub fn analyze_html(html: &str) -> ContentAnalysis {
    let document = Html::parse_document(html);
    classify(&document, has_body_tag(html))
}

/// `true` if the document's primary region holds significant content.
pub fn has_significant_content(document: &Html) -> bool {
    analyze_content(document).is_significant()
}

fn locate_region(document: &Html, body_authored: bool) -> (ContentRegion, ElementRef<'_>) {
    let candidates: [(ContentRegion, &Selector); 3] = [
        (ContentRegion::Main, &*MAIN_SELECTOR),
        (ContentRegion::Article, &*ARTICLE_SELECTOR),
        (ContentRegion::ContentDiv, &*CONTENT_DIV_SELECTOR),
    ];
    for (region, selector) in candidates {
        if let Some(element) = document.select(selector).next() {
            return (region, element);
        }
    }
    if body_authored {
        if let Some(body) = document.select(&BODY_SELECTOR).next() {
            return (ContentRegion::Body, body);
        }
    }
    (ContentRegion::Document, document.root_element())
}

/// `true` if `html` contains a `<body` start tag (ASCII case-insensitive).
fn has_body_tag(html: &str) -> bool {
    const TAG: &[u8] = b"<body";
    let bytes = html.as_bytes();
    bytes.windows(TAG.len()).enumerate().any(|(start, window)| {
        window.eq_ignore_ascii_case(TAG)
            && bytes
                .get(start + TAG.len())
                .map_or(true, |next| next.is_ascii_whitespace() || matches!(next, b'>' | b'/'))
    })
}
