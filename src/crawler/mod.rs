// src/crawler/mod.rs
// =============================================================================
// This module contains the crawl engine.
//
// Submodules:
// - resolve: turns raw hrefs into canonical absolute URLs
// - filters: the ordered skip-pattern list
// - scope: internal-link and base-context containment checks
// - engine: the traversal itself (worklist, visited set, decision sequence)
// - report: dedups and exposes the final sitemap and skipped lists
//
// This file (mod.rs) is the module root - it ties everything together and
// exports the public API that other parts of our application can use.
// =============================================================================

// Declare submodules (tells Rust to include these files)
mod engine;
mod filters;
mod report;
mod resolve;
mod scope;

// Re-export public items from submodules
// This lets users write `crawler::crawl_site()` instead of
// `crawler::engine::crawl_site()`
pub use engine::{crawl_site, CrawlConfig};
pub use filters::{default_skip_patterns, SkipPattern};
pub use report::CrawlReport;
