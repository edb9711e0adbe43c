// src/fetch/origin.rs
// =============================================================================
// Same-origin filtering and link normalization.
//
// A page's links come back from the extractor as raw href strings. Before the
// crawler can use them they are:
// 1. Normalized: "/path" becomes "<origin>/path", "http..." is kept as-is,
//    everything else (relative paths, mailto:, javascript:, #anchors) is dropped
// 2. Filtered: only links that start with the origin string survive
//
// The origin test is a plain string prefix check, not a URL comparison.
// "https://example.com" and "https://example.com:443" are different origins
// here, and that strictness is intended.
// =============================================================================

use std::collections::HashSet;
use url::Url;

// Computes the origin of a page from its effective (post-redirect) URL
//
// Parameters:
//   url: the URL the response actually came from
//
// Returns: Some("scheme://host[:port]") or None for URLs without a network
//          origin (file:, data:, ...)
//
// Example:
//   "https://x.test:443/docs?page=2" -> Some("https://x.test")
//   "http://127.0.0.1:8080/"         -> Some("http://127.0.0.1:8080")
pub fn origin_of(url: &Url) -> Option<String> {
    // Default ports are dropped by the serialization, explicit ones are kept
    match url.origin() {
        origin @ url::Origin::Tuple(..) => Some(origin.ascii_serialization()),
        url::Origin::Opaque(_) => None,
    }
}

// Turns one raw href into an absolute link, or None if the form is unsupported
fn normalize(raw: &str, origin: &str) -> Option<String> {
    if raw.starts_with('/') {
        Some(format!("{}{}", origin, raw))
    } else if raw.starts_with("http") {
        Some(raw.to_string())
    } else {
        None
    }
}

// Normalizes raw hrefs against an origin and keeps the same-origin ones
//
// Parameters:
//   raw_links: href values exactly as the link extractor found them
//   origin: the page's origin, as returned by origin_of()
//
// Returns: Vec of absolute URLs that start with `origin`. Order of first
//          appearance is preserved; repeated links are reported once.
//
// Example:
//   raw = ["/a", "https://other.test/c", "mailto:x@y"]
//   origin = "https://x.test"
//   result = ["https://x.test/a"]
pub fn normalize_and_filter<I, S>(raw_links: I, origin: &str) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut links = Vec::new();

    for raw in raw_links {
        // Unsupported forms (relative paths, mailto:, #anchors) vanish here
        let Some(link) = normalize(raw.as_ref(), origin) else {
            continue;
        };

        // Plain string prefix, so "https://x.test.evil" passes for "https://x.test"
        // while "http://x.test" does not
        if link.starts_with(origin) && seen.insert(link.clone()) {
            links.push(link);
        }
    }

    links
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("https://x.test/", Some("https://x.test"))]
    #[case("https://x.test/deep/page?q=1#top", Some("https://x.test"))]
    #[case("http://127.0.0.1:8080/index.html", Some("http://127.0.0.1:8080"))]
    #[case("https://x.test:443/", Some("https://x.test"))]
    #[case("file:///etc/hosts", None)]
    fn test_origin_of(#[case] url: &str, #[case] expected: Option<&str>) {
        let url = Url::parse(url).unwrap();
        assert_eq!(origin_of(&url).as_deref(), expected);
    }

    #[test]
    fn test_root_relative_link_gets_origin() {
        let links = normalize_and_filter(["/path"], "https://x.test");
        assert_eq!(links, vec!["https://x.test/path"]);
    }

    #[test]
    fn test_absolute_link_passes_through_unchanged() {
        let links = normalize_and_filter(["https://x.test/y"], "https://x.test");
        assert_eq!(links, vec!["https://x.test/y"]);
    }

    #[test]
    fn test_cross_origin_link_is_dropped() {
        let links = normalize_and_filter(
            ["/a", "https://other.test/c", "http://x.test/insecure"],
            "https://x.test",
        );
        assert_eq!(links, vec!["https://x.test/a"]);
    }

    #[rstest]
    #[case("relative/page")]
    #[case("../up")]
    #[case("#section")]
    #[case("mailto:someone@x.test")]
    #[case("javascript:void(0)")]
    #[case("tel:+15555550100")]
    #[case("")]
    fn test_unsupported_forms_are_dropped(#[case] raw: &str) {
        assert!(normalize_and_filter([raw], "https://x.test").is_empty());
    }

    #[test]
    fn test_prefix_match_is_strict() {
        // A trailing slash on the origin makes the bare host a non-match
        let links = normalize_and_filter(["https://x.test"], "https://x.test/");
        assert!(links.is_empty());

        // A longer host sharing the prefix still passes the string test
        let links = normalize_and_filter(["https://x.test.evil/"], "https://x.test");
        assert_eq!(links, vec!["https://x.test.evil/"]);
    }

    #[test]
    fn test_duplicates_reported_once_in_first_seen_order() {
        let links = normalize_and_filter(
            ["/b", "/a", "https://x.test/b", "/a"],
            "https://x.test",
        );
        assert_eq!(links, vec!["https://x.test/b", "https://x.test/a"]);
    }
}
