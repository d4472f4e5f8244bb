// src/crawler/scope.rs
// =============================================================================
// This module decides whether a discovered URL is in-bounds for the crawl.
//
// Two independent checks, and a URL must pass both to be visited:
// 1. Internal-link check: the URL's host matches the site's own host
//    (skipped entirely when the crawler is allowed to visit external links)
// 2. Context check: the URL starts with the base context prefix established
//    by the seed that discovered it
//
// URLs failing either check are dropped silently, without any record. Only
// the skip patterns (filters.rs) produce an audit trail.
// =============================================================================

use url::Url;

// Compares the URL's host against the site's root host
//
// A URL with no parseable host is treated as internal: at this point it is
// still relative, and relative links can only point at our own site.
pub fn is_internal_link(url: &str, root_host: &str) -> bool {
    match Url::parse(url) {
        Ok(parsed) => match parsed.host_str() {
            Some(host) => host == root_host,
            None => true,
        },
        Err(_) => true,
    }
}

// Literal prefix test against the base context established by a seed
//
// This confines each seed's traversal to its own subtree even though all
// seeds share one visited set.
pub fn is_within_context(url: &str, base_context: &str) -> bool {
    url.starts_with(base_context)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_host_is_internal() {
        assert!(is_internal_link("https://example.com/about", "example.com"));
    }

    #[test]
    fn test_different_host_is_external() {
        assert!(!is_internal_link("https://other.com/about", "example.com"));
    }

    #[test]
    fn test_subdomain_is_external() {
        assert!(!is_internal_link("https://blog.example.com/post", "example.com"));
    }

    #[test]
    fn test_hostless_url_is_internal() {
        assert!(is_internal_link("/about", "example.com"));
        assert!(is_internal_link("about", "example.com"));
        assert!(is_internal_link("mailto:team@example.com", "example.com"));
    }

    #[test]
    fn test_context_prefix() {
        assert!(is_within_context("https://example.com/docs/intro", "https://example.com/docs"));
        assert!(!is_within_context("https://example.com/blog", "https://example.com/docs"));
        assert!(!is_within_context("https://other.com/docs", "https://example.com/docs"));
    }
}
