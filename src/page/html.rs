// src/page/html.rs
// =============================================================================
// This module extracts links from HTML pages.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever (Mozilla's HTML parser)
//
// The hrefs come back raw and in document order. Resolving them against the
// current page is the crawler's job, because the crawler also needs the raw
// form for its skip patterns (a "tel:" link must be recorded as "tel:...",
// not as some joined-up path).
// =============================================================================

use scraper::{Html, Selector};

// Extracts the href attribute of every anchor element, in document order
//
// Parameters:
//   html: the HTML content to parse (borrowed as &str)
//
// Returns: Vec<String> of raw, unresolved href values
//
// html5ever never fails to parse: broken markup just yields whatever tree
// it could recover, which may contain no anchors at all. That is the
// behavior we want, since many real pages are not well-formed.
pub fn extract_hrefs(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    // Selector::parse returns Result, so we use .unwrap() which panics on error
    // This is OK here because our selector is a constant and known to be valid
    let selector = Selector::parse("a[href]").unwrap();

    document
        .select(&selector)
        .filter_map(|element| element.value().attr("href"))
        .map(|href| href.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_hrefs_in_document_order() {
        let html = r#"
            <a href="/first">1</a>
            <p><a href="/second">2</a></p>
            <a href="/third">3</a>
        "#;
        let hrefs = extract_hrefs(html);
        assert_eq!(hrefs, vec!["/first", "/second", "/third"]);
    }

    #[test]
    fn test_hrefs_are_returned_raw() {
        let html = r#"<a href="about">A</a><a href="tel:+15551234">Call</a>"#;
        let hrefs = extract_hrefs(html);
        assert_eq!(hrefs, vec!["about", "tel:+15551234"]);
    }

    #[test]
    fn test_anchors_without_href_are_ignored() {
        let html = r#"<a name="top">Top</a><a href="/real">Real</a>"#;
        let hrefs = extract_hrefs(html);
        assert_eq!(hrefs, vec!["/real"]);
    }

    #[test]
    fn test_malformed_html_does_not_panic() {
        let html = "<html><body><a href='/ok'>ok<div></a></p></body>";
        let hrefs = extract_hrefs(html);
        assert_eq!(hrefs, vec!["/ok"]);
    }

    #[test]
    fn test_non_html_yields_nothing() {
        assert!(extract_hrefs("just some plain text").is_empty());
        assert!(extract_hrefs("").is_empty());
    }
}
