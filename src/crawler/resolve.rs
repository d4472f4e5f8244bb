// src/crawler/resolve.rs
// =============================================================================
// This module turns raw href values into the canonical absolute URLs the
// rest of the crawler works with.
//
// Resolution rules:
// 1. An href that is already absolute passes through untouched
// 2. A relative href is joined onto the current page URL with a single '/'
// 3. If the joined result is still relative (the current URL itself was
//    relative), it is anchored at the site root
//
// Note: this is a plain string join, NOT full RFC 3986 resolution. There is
// no dot-segment handling, so a link "about" on page ".../docs" resolves to
// ".../docs/about". The shape of the generated sitemap depends on this.
// Fragments are kept too: "/about" and "/about#team" are different URLs.
//
// Rust concepts:
// - Url::parse: fails for relative references, which is exactly the
//   absolute-vs-relative test we need
// - trim_end_matches / trim_start_matches: strip repeated characters
// =============================================================================

use url::Url;

// Strips trailing slashes so "/page/" and "/page" compare equal
//
// The canonical form of every URL the crawler stores has no trailing slash.
// This is applied once per traversal step, not inside resolve_href.
pub fn strip_trailing_slash(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

// Joins a configured seed path onto the site base URL
//
// Examples:
//   resolve_root("https://example.com", "/")     -> "https://example.com/"
//   resolve_root("https://example.com/", "docs") -> "https://example.com/docs"
pub fn resolve_root(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

// Resolves a raw href against the page it was found on
//
// Parameters:
//   href: the href attribute value, exactly as it appeared in the document
//   current_url: the URL of the page containing the link
//   root_url: the site root, used when current_url is itself relative
//
// Returns: an absolute URL string (or the href unchanged if it already was one)
pub fn resolve_href(href: &str, current_url: &str, root_url: &str) -> String {
    if is_absolute(href) {
        return href.to_string();
    }

    let joined = format!(
        "{}/{}",
        current_url.trim_end_matches('/'),
        href.trim_start_matches('/')
    );

    if is_absolute(&joined) {
        joined
    } else {
        resolve_root(root_url, &joined)
    }
}

// An href is absolute when it parses as a full URL, i.e. it carries a scheme.
// That includes host-less pseudo-links like "tel:" and "javascript:void(0)",
// which must reach the skip patterns in their raw form rather than being
// mangled into a joined path. Protocol-relative hrefs ("//host/path") carry
// a host and pass through unchanged as well.
fn is_absolute(href: &str) -> bool {
    href.starts_with("//") || Url::parse(href).is_ok()
}
