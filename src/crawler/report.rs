// src/crawler/report.rs
// =============================================================================
// This module turns the final crawl state into the run's two outputs.
//
// The sitemap list is already duplicate-free by construction, so it passes
// through untouched. The skipped list may contain the same URL once per
// page that linked to it, so it is deduplicated here, keeping the first
// occurrence's position.
// =============================================================================

use serde::Serialize;
use std::collections::HashSet;

use super::engine::CrawlState;

// The read-once result of a crawl run
#[derive(Debug, Serialize)]
pub struct CrawlReport {
    /// Every successfully fetched page, in discovery order
    pub sitemap_urls: Vec<String>,
    /// Every URL rejected by a skip pattern, deduplicated
    pub skipped_urls: Vec<String>,
}

impl CrawlReport {
    pub(crate) fn from_state(state: CrawlState) -> Self {
        Self {
            sitemap_urls: state.sitemap,
            skipped_urls: dedup_preserving_order(state.skipped),
        }
    }
}

// Keeps the first occurrence of each URL, drops the rest
fn dedup_preserving_order(urls: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    urls.into_iter().filter(|url| seen.insert(url.clone())).collect()
}
