//! Response body decoding.
//!
//! Encoding is picked in browser order: byte order mark, then the
//! `Content-Type` charset, then a `<meta>` charset declaration near the top of
//! the document, then UTF-8. Undecodable bytes become U+FFFD.

use encoding_rs::{Encoding, UTF_8};

/// How far into the body a `<meta>` charset declaration is looked for.
const META_SNIFF_LIMIT: usize = 1024;

/// Decodes `body` to text.
pub fn decode_body(body: &[u8], content_type: Option<&str>) -> String {
    let encoding = Encoding::for_bom(body)
        .map(|(encoding, _)| encoding)
        .or_else(|| content_type.and_then(charset_from_content_type))
        .or_else(|| sniff_meta_charset(body))
        .unwrap_or(UTF_8);
    // decode() strips a matching BOM itself
    let (text, _, _) = encoding.decode(body);
    text.into_owned()
}

fn charset_from_content_type(content_type: &str) -> Option<&'static Encoding> {
    let label = charset_label(content_type.as_bytes())?;
    Encoding::for_label(label)
}

/// Looks for `charset=` in the first `META_SNIFF_LIMIT` bytes. This covers both
/// `<meta charset="...">` and `<meta http-equiv="Content-Type" content="...; charset=...">`.
fn sniff_meta_charset(body: &[u8]) -> Option<&'static Encoding> {
    let head = &body[..body.len().min(META_SNIFF_LIMIT)];
    let meta_start = find_ascii_ci(head, b"<meta")?;
    let label = charset_label(&head[meta_start..])?;
    // A page that could be read far enough to find the declaration is ASCII
    // compatible, so a UTF-16 declaration is taken to mean UTF-8
    Encoding::for_label(label).map(Encoding::output_encoding)
}

/// The value following the first `charset=`, without quotes.
fn charset_label(text: &[u8]) -> Option<&[u8]> {
    let start = find_ascii_ci(text, b"charset=")? + b"charset=".len();
    let rest = &text[start..];
    let rest = rest
        .strip_prefix(b"\"")
        .or_else(|| rest.strip_prefix(b"'"))
        .unwrap_or(rest);
    let end = rest
        .iter()
        .position(|b| matches!(b, b'"' | b'\'' | b';' | b'>' | b'/') || b.is_ascii_whitespace())
        .unwrap_or(rest.len());
    let label = &rest[..end];
    (!label.is_empty()).then_some(label)
}

fn find_ascii_ci(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window.eq_ignore_ascii_case(needle))
}
