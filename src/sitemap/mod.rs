// src/sitemap/mod.rs
// =============================================================================
// This module renders the final sitemap document.
//
// The crawl engine hands us an ordered list of URLs; everything about the
// output format lives in here.
// =============================================================================

mod xml;

// Re-export the rendering function
pub use xml::render_sitemap;
