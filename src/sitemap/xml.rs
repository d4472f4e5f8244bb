// src/sitemap/xml.rs
// =============================================================================
// This module renders the crawled URL list as an XML sitemap.
//
// Output follows the sitemaps.org schema: a <urlset> element containing one
// <url><loc>...</loc></url> entry per page, in discovery order. URLs are
// XML-escaped before being embedded in the document.
// =============================================================================

// Renders the sitemap document
//
// Parameters:
//   urls: the deduplicated page URLs, in the order they should appear
//
// Returns: the complete XML document as a String
pub fn render_sitemap(urls: &[String]) -> String {
    let mut xml = String::new();
    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n");

    for url in urls {
        xml.push_str("    <url>\n");
        xml.push_str("        <loc>");
        xml.push_str(&escape_xml(url));
        xml.push_str("</loc>\n");
        xml.push_str("    </url>\n");
    }

    xml.push_str("</urlset>\n");
    xml
}

// The five characters XML 1.0 requires escaping in text content
fn escape_xml(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_one_loc_per_url() {
        let urls = vec![
            "https://example.com".to_string(),
            "https://example.com/about".to_string(),
        ];
        let xml = render_sitemap(&urls);

        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">"));
        assert!(xml.contains("<loc>https://example.com</loc>"));
        assert!(xml.contains("<loc>https://example.com/about</loc>"));
        assert!(xml.ends_with("</urlset>\n"));
    }

    #[test]
    fn test_urls_keep_their_order() {
        let urls = vec![
            "https://example.com/b".to_string(),
            "https://example.com/a".to_string(),
        ];
        let xml = render_sitemap(&urls);
        let b_pos = xml.find("/b</loc>").unwrap();
        let a_pos = xml.find("/a</loc>").unwrap();
        assert!(b_pos < a_pos);
    }

    #[test]
    fn test_query_strings_are_escaped() {
        let urls = vec!["https://example.com/search?a=1&b=2".to_string()];
        let xml = render_sitemap(&urls);
        assert!(xml.contains("<loc>https://example.com/search?a=1&amp;b=2</loc>"));
    }

    #[test]
    fn test_empty_crawl_renders_empty_urlset() {
        let xml = render_sitemap(&[]);
        assert!(xml.contains("<urlset"));
        assert!(!xml.contains("<url>"));
    }
}
