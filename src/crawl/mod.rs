// src/crawl/mod.rs
// =============================================================================
// This module handles website crawling.
//
// Features:
// - Breadth-first crawling starting from a seed URL
// - Same-host restriction (never leaves the seed's website)
// - A page budget and a fixed delay between requests
// - Raw pages and a metadata index written to an output directory
//
// Submodules:
// - engine: The crawl loop (Crawler, crawl_site)
// - frontier: Queue of pending URLs and the set of visited ones
// - fetch: The Fetcher trait and its reqwest implementation
// =============================================================================

mod engine;
mod fetch;
mod frontier;

pub use engine::{crawl_site, CrawlSummary, Crawler, PageError, PageOutcome};
pub use fetch::{FetchError, Fetcher, HttpFetcher};
pub use frontier::Frontier;
