// src/crawler/filters.rs
// =============================================================================
// This module decides which URLs the crawler refuses to visit.
//
// The skip patterns are configuration, not logic: an ordered list of
// compiled regexes tested against each candidate URL. The first match wins
// and the rest are never evaluated, so new rules are additive and
// independently testable without touching the traversal code.
//
// Default patterns:
// - non-breaking space (U+00A0) anywhere in the URL
// - "javascript:void(0)" anywhere, case-insensitive
// - "tel:" anywhere, case-insensitive
// =============================================================================

use anyhow::Result;
use regex::Regex;

// One exclusion rule: a URL matching it is skipped, never fetched
#[derive(Debug, Clone)]
pub struct SkipPattern(Regex);

impl SkipPattern {
    pub fn new(pattern: &str) -> Result<Self> {
        Ok(Self(Regex::new(pattern)?))
    }

    pub fn matches(&self, url: &str) -> bool {
        self.0.is_match(url)
    }
}

// The stock exclusion rules, in matching order
//
// .unwrap() is fine here: these patterns are constants and known to compile,
// so a failure is a programmer error
pub fn default_skip_patterns() -> Vec<SkipPattern> {
    vec![
        // Non-breaking spaces turn up in hand-edited CMS links
        SkipPattern::new("\u{00A0}").unwrap(),
        // Placeholder links that never lead anywhere
        SkipPattern::new(r"(?i)javascript:void\(0\)").unwrap(),
        // Phone links
        SkipPattern::new("(?i)tel:").unwrap(),
    ]
}

// Tests a URL against the ordered pattern list
//
// .any() short-circuits: the first matching pattern excludes the URL and
// the remaining patterns are not evaluated
pub fn is_excluded(patterns: &[SkipPattern], url: &str) -> bool {
    patterns.iter().any(|pattern| pattern.matches(url))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_breaking_space_is_excluded() {
        let patterns = default_skip_patterns();
        assert!(is_excluded(&patterns, "https://example.com/bad\u{00A0}link"));
    }

    #[test]
    fn test_javascript_void_is_excluded_case_insensitive() {
        let patterns = default_skip_patterns();
        assert!(is_excluded(&patterns, "javascript:void(0)"));
        assert!(is_excluded(&patterns, "JavaScript:Void(0)"));
    }

    #[test]
    fn test_tel_is_excluded_anywhere_in_the_url() {
        let patterns = default_skip_patterns();
        assert!(is_excluded(&patterns, "tel:+15551234"));
        assert!(is_excluded(&patterns, "TEL:+15551234"));
        assert!(is_excluded(&patterns, "https://example.com/redirect?to=tel:+15551234"));
    }

    #[test]
    fn test_ordinary_urls_pass() {
        let patterns = default_skip_patterns();
        assert!(!is_excluded(&patterns, "https://example.com/about"));
        assert!(!is_excluded(&patterns, "https://example.com/hotel"));
    }

    #[test]
    fn test_patterns_are_additive() {
        let mut patterns = default_skip_patterns();
        patterns.push(SkipPattern::new("(?i)mailto:").unwrap());
        assert!(is_excluded(&patterns, "mailto:team@example.com"));
        assert!(!is_excluded(&patterns, "https://example.com/contact"));
    }

    #[test]
    fn test_empty_pattern_list_excludes_nothing() {
        assert!(!is_excluded(&[], "tel:+15551234"));
    }

    #[test]
    fn test_invalid_pattern_is_an_error() {
        assert!(SkipPattern::new("(unclosed").is_err());
    }
}
