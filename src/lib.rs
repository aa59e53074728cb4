// src/lib.rs
// =============================================================================
// Library root. The binary in main.rs is a thin CLI over these modules.
//
// - crawl: The breadth-first crawler (engine, frontier, fetching)
// - links: Link extraction and same-site checks
// - storage: Page files, file naming, metadata index
// - config: Crawl settings and their defaults
// - catalog: The app's content model and mock content API
// =============================================================================

pub mod catalog;
pub mod config;
pub mod crawl;
pub mod links;
pub mod storage;

pub use config::CrawlConfig;
pub use crawl::{crawl_site, CrawlSummary, Crawler, HttpFetcher};
