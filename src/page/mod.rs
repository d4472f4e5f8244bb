// src/page/mod.rs
// =============================================================================
// This module contains the page-level collaborators of the crawler.
//
// Submodules:
// - http: fetches a page over HTTP (behind the PageFetcher trait)
// - html: extracts raw href values from a page body
//
// The crawl engine only ever sees (status_ok, body) pairs and raw href
// lists; everything HTTP- or HTML-specific stays in here.
// =============================================================================

mod html;
mod http;

// Re-export public items from submodules
// This lets users write `page::extract_hrefs()` instead of
// `page::html::extract_hrefs()`
pub use html::extract_hrefs;
pub use http::{FetchedPage, HttpFetcher, PageFetcher};
