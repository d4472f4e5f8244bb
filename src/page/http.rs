// src/page/http.rs
// =============================================================================
// This module fetches pages over HTTP.
//
// The traversal engine never talks to reqwest directly: it goes through the
// PageFetcher trait, so tests can swap in an in-memory fake site and the
// whole engine runs without a network.
//
// Error model:
// - Ordinary HTTP error statuses (404, 500, ...) are NOT errors here; they
//   come back as Ok with status_ok = false
// - Err is reserved for transport-level failures: DNS, connection refused,
//   timeout
//
// Rust concepts:
// - async_trait: lets us write async fn inside a trait
// - Send + Sync bounds: the trait object must be shareable across awaits
// =============================================================================

use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

// What the crawler needs to know about a fetched page
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Whether the response status was in the success (2xx) range
    pub status_ok: bool,
    /// The response body; only inspected when status_ok is true
    pub body: String,
}

// The transport boundary of the crawler
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<FetchedPage>;
}

// Production fetcher backed by a shared reqwest client
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        // One client for the whole crawl (connection pooling), with a
        // timeout so a hung server cannot stall the traversal forever
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedPage> {
        let response = self.client.get(url).send().await?;
        let status_ok = response.status().is_success();
        let body = response.text().await?;
        Ok(FetchedPage { status_ok, body })
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why a trait instead of calling reqwest directly?
//    - The engine's behavior (dedup, scoping, cycle handling) is what we
//      want to test, and network tests are slow and flaky
//    - With a trait, tests hand the engine a HashMap pretending to be a
//      website and every test runs instantly and deterministically
//
// 2. Why async_trait?
//    - Traits with async fn need a little help on our edition; the
//      #[async_trait] macro rewrites them into ordinary trait methods
//      returning boxed futures
//
// 3. Why is a 404 not an Err?
//    - A dead link is an expected crawl outcome, not a program failure
//    - Keeping statuses in the Ok path means ? only bails on real
//      transport problems
// -----------------------------------------------------------------------------
