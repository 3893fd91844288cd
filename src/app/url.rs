//! URL normalization.

const HTTP_PREFIX: &str = "http://";
const HTTPS_PREFIX: &str = "https://";

/// Ensures a URL token carries an `http://` or `https://` scheme.
///
/// Tokens that already start with either prefix pass through unchanged;
/// anything else gets `https://` prepended. The host is not validated here:
/// a malformed URL surfaces later as a fetch error for that item.
pub fn normalize_url(token: &str) -> String {
    if token.starts_with(HTTP_PREFIX) || token.starts_with(HTTPS_PREFIX) {
        token.to_string()
    } else {
        format!("{HTTPS_PREFIX}{token}")
    }
}

#[cfg(test)]
mod tests {
    use super::normalize_url;

    #[test]
    fn test_normalize_url_adds_https() {
        assert_eq!(normalize_url("example.com"), "https://example.com");
    }

    #[test]
    fn test_normalize_url_preserves_http() {
        assert_eq!(normalize_url("http://x.com"), "http://x.com");
    }

    #[test]
    fn test_normalize_url_preserves_https() {
        assert_eq!(normalize_url("https://example.com"), "https://example.com");
    }

    #[test]
    fn test_normalize_url_with_path_and_port() {
        assert_eq!(
            normalize_url("example.com:8080/path?query=value"),
            "https://example.com:8080/path?query=value"
        );
    }

    #[test]
    fn test_normalize_url_prefix_match_is_case_sensitive() {
        // Only the exact lowercase prefixes count as a scheme
        assert_eq!(normalize_url("HTTP://example.com"), "https://HTTP://example.com");
    }

    #[test]
    fn test_normalize_url_other_schemes_are_prefixed() {
        // Not validated; the fetch of this URL fails later and is reported as an error item
        assert_eq!(normalize_url("ftp://example.com"), "https://ftp://example.com");
    }

    #[test]
    fn test_normalize_url_bare_scheme_words() {
        // "https" without "://" is a host name, not a scheme
        assert_eq!(normalize_url("https"), "https://https");
        assert_eq!(normalize_url("http:/x.com"), "https://http:/x.com");
    }

    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_normalize_url_idempotent(token in "[a-zA-Z0-9:/._-]{1,60}") {
            let once = normalize_url(&token);
            let twice = normalize_url(&once);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn test_normalize_url_always_has_scheme(token in "\\PC{1,60}") {
            let normalized = normalize_url(&token);
            prop_assert!(normalized.starts_with("http://") || normalized.starts_with("https://"));
            prop_assert!(normalized.ends_with(token.as_str()));
        }
    }
}
