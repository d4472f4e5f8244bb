// src/crawler/engine.rs
// =============================================================================
// This module implements the crawl traversal itself.
//
// How it works:
// 1. Each seed path becomes one top-level traversal with its own base
//    context (the resolved seed URL as a required prefix)
// 2. A worklist holds the URLs pending a visit; each pop runs the full
//    decision sequence: normalize, skip-pattern check, visited check,
//    internal check, context check
// 3. Survivors are marked visited, fetched, recorded in the sitemap, and
//    their outbound links are resolved and pushed back onto the worklist
//
// All seeds share one CrawlState, so a page visited under one seed is never
// fetched again under another.
//
// Rust concepts:
// - HashSet: To track visited URLs (O(1) lookup)
// - Vec as a LIFO stack: pop from the end for depth-first order
// - Generics with trait bounds: the engine works with any PageFetcher
// =============================================================================

use anyhow::{anyhow, Result};
use std::collections::HashSet;
use url::Url;

use crate::page::{extract_hrefs, PageFetcher};

use super::filters::{default_skip_patterns, is_excluded, SkipPattern};
use super::report::CrawlReport;
use super::resolve::{resolve_href, resolve_root, strip_trailing_slash};
use super::scope::{is_internal_link, is_within_context};

// Immutable per-run input, created once at crawl start
pub struct CrawlConfig {
    /// Seed paths crawled in order, each as its own top-level traversal
    pub seeds: Vec<String>,
    /// When false, links whose host differs from the site's own are dropped
    pub visit_external: bool,
    /// Ordered skip patterns; the first match excludes a URL
    pub skip_patterns: Vec<SkipPattern>,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            seeds: vec!["/".to_string()],
            visit_external: false,
            skip_patterns: default_skip_patterns(),
        }
    }
}

// Mutable crawl state, threaded through every seed traversal of a run
pub(crate) struct CrawlState {
    /// Every canonical URL we committed to visiting; grows monotonically
    pub(crate) visited: HashSet<String>,
    /// Every successfully fetched URL, in discovery order, no duplicates
    pub(crate) sitemap: Vec<String>,
    /// Every URL a skip pattern rejected; may hold duplicates until reporting
    pub(crate) skipped: Vec<String>,
}

impl CrawlState {
    pub(crate) fn new() -> Self {
        Self {
            visited: HashSet::new(),
            sitemap: Vec::new(),
            skipped: Vec::new(),
        }
    }
}

// Crawls a whole site and returns the finished report
//
// Parameters:
//   fetcher: the transport collaborator
//   site_url: the site base URL (e.g., "https://example.com")
//   config: seeds, external-link policy and skip patterns
//
// The only fatal error is a site_url we cannot derive a host from; nothing
// that happens mid-crawl aborts the run.
pub async fn crawl_site<F: PageFetcher>(
    fetcher: &F,
    site_url: &str,
    config: &CrawlConfig,
) -> Result<CrawlReport> {
    // The site's own root and host, derived once per run by resolving the
    // base path "/". The host is what the internal-link check compares to.
    let root_url = strip_trailing_slash(&resolve_root(site_url, "/"));
    let root_host = Url::parse(&root_url)
        .map_err(|e| anyhow!("Invalid URL '{}': {}", site_url, e))?
        .host_str()
        .ok_or_else(|| anyhow!("URL has no host: {}", site_url))?
        .to_string();

    let mut state = CrawlState::new();

    for seed in &config.seeds {
        let seed_url = strip_trailing_slash(&resolve_root(&root_url, seed));
        println!("🌱 Crawling base URL: {}", seed_url);
        crawl_from(
            fetcher,
            &mut state,
            config,
            &root_url,
            &root_host,
            seed_url.clone(),
            Some(&seed_url),
        )
        .await;
    }

    Ok(CrawlReport::from_state(state))
}

// One top-level traversal
//
// base_context, when set, confines every URL discovered in this subtree to
// that literal prefix. Passing None disables the containment check, which
// is the only configuration in which visit_external can actually lead the
// crawler off-host.
async fn crawl_from<F: PageFetcher>(
    fetcher: &F,
    state: &mut CrawlState,
    config: &CrawlConfig,
    root_url: &str,
    root_host: &str,
    start_url: String,
    base_context: Option<&str>,
) {
    // LIFO worklist: depth-first, and because each page's links are pushed
    // in reverse, the first link in a document is crawled next
    let mut pending = vec![start_url];

    while let Some(raw_url) = pending.pop() {
        // Canonical form has no trailing slash, so "/page/" and "/page"
        // count as one visit
        let url = strip_trailing_slash(&raw_url);

        if is_excluded(&config.skip_patterns, &url) {
            println!("  Skipping URL with unwanted pattern: {}", url);
            state.skipped.push(url);
            continue;
        }

        if state.visited.contains(&url) {
            continue;
        }

        if !config.visit_external && !is_internal_link(&url, root_host) {
            continue;
        }

        if let Some(context) = base_context {
            if !is_within_context(&url, context) {
                continue;
            }
        }

        println!("  Crawling: {}", url);

        // Marked visited before the fetch: a page that links to itself
        // cannot loop, and a failed fetch is never retried
        state.visited.insert(url.clone());

        let page = match fetcher.fetch(&url).await {
            Ok(page) => page,
            Err(e) => {
                // A transport failure abandons this page only; the rest of
                // the worklist is unaffected
                eprintln!("  Warning: Error crawling {}: {}", url, e);
                continue;
            }
        };

        // Non-2xx responses are dead ends: no sitemap entry, no link
        // extraction, and also no error
        if !page.status_ok {
            continue;
        }

        if !state.sitemap.contains(&url) {
            state.sitemap.push(url.clone());
        }

        let hrefs = extract_hrefs(&page.body);
        for href in hrefs.iter().rev() {
            pending.push(resolve_href(href, &url, root_url));
        }
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why a worklist instead of recursion?
//    - The traversal is conceptually recursive (visit a page, then visit
//      everything it links to), but deep sites would grow the call stack
//      without bound
//    - An explicit Vec of pending URLs gives the same depth-first order
//      with flat memory use
//
// 2. Why mark visited BEFORE fetching?
//    - If page A links to B and B links back to A, whichever is fetched
//      first is already in the set when its own URL is rediscovered
//    - The visited set is the only thing standing between us and an
//      infinite crawl, so the mark has to happen before any new work is
//      produced for that URL
//
// 3. Why does the sitemap use a Vec and not a HashSet?
//    - The output document should list pages in the order they were
//      discovered; a HashSet would lose that
//    - The visited check already guarantees each URL is processed once
// -----------------------------------------------------------------------------
