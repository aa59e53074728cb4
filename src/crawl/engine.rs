// src/crawl/engine.rs
// =============================================================================
// The crawl loop.
//
// How it works:
// 1. Create the output directory and load any existing metadata index
// 2. Take the next URL off the frontier (this marks it visited)
// 3. Download it; on success save the body, record it in the index and
//    queue every new same-site link found on the page
// 4. Wait `request_delay` no matter how the download went
// 5. Repeat until the frontier is empty or `max_pages` URLs were visited
//
// A page that cannot be downloaded or saved is logged and counted, never
// retried, and never stops the crawl. Errors on the output directory or the
// metadata index do stop it: without those there is nowhere to record
// anything else.
//
// All crawl state lives inside one `Crawler` value, so several crawls (or
// several tests) can run in the same process without sharing anything.
// =============================================================================

use anyhow::Result;
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;
use url::Url;

use super::fetch::{FetchError, Fetcher};
use super::frontier::Frontier;
use crate::config::CrawlConfig;
use crate::links::extract_links;
use crate::storage::{derive_filename, MetadataIndex, PageMetadata, PageStore};

/// What happened to one URL.
#[derive(Debug)]
pub enum PageOutcome {
    Saved { filename: String, links_found: usize },
    Failed(PageError),
}

/// Why a single page was skipped.
#[derive(Debug, Error)]
pub enum PageError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("could not save {filename}: {error:#}")]
    Write {
        filename: String,
        error: anyhow::Error,
    },
}

/// Returned by `Crawler::run` and printed at the end of a crawl.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CrawlSummary {
    pub visited: usize,
    pub saved: usize,
    pub failed: usize,
    /// URLs still queued when the budget ran out
    pub abandoned: usize,
    pub budget_exhausted: bool,
    pub output_dir: PathBuf,
    pub metadata_path: PathBuf,
}

pub struct Crawler<F> {
    config: CrawlConfig,
    root: Url,
    fetcher: F,
    frontier: Frontier,
    store: PageStore,
    index: MetadataIndex,
    saved: usize,
    failed: usize,
    unflushed: usize,
}

impl<F: Fetcher> Crawler<F> {
    /// Validates the config, creates the output directory and loads the
    /// metadata index left by earlier runs.
    pub async fn open(config: CrawlConfig, fetcher: F) -> Result<Self> {
        let root = config.validate()?;

        let store = PageStore::new(&config.output_dir);
        store.ensure_dir().await?;
        let index = MetadataIndex::load(config.metadata_path()).await?;

        if index.is_empty() {
            tracing::debug!(path = %index.path().display(), "Starting a new metadata index");
        } else {
            tracing::info!(
                existing_entries = index.len(),
                path = %index.path().display(),
                "Resuming metadata index from an earlier run"
            );
        }

        Ok(Self {
            frontier: Frontier::new(root.clone()),
            root,
            fetcher,
            store,
            index,
            config,
            saved: 0,
            failed: 0,
            unflushed: 0,
        })
    }

    /// Drives the crawl until the frontier is empty or the budget is spent.
    pub async fn run(mut self) -> Result<CrawlSummary> {
        let max_pages = self.config.max_pages;
        let delay = self.config.request_delay();

        tracing::info!(
            seed = %self.root,
            max_pages,
            delay_ms = self.config.request_delay_ms,
            "Starting crawl"
        );

        while !self.frontier.is_empty() && self.frontier.visited_count() < max_pages {
            let Some(url) = self.frontier.pop() else {
                break;
            };

            match self.fetch_and_process(url).await? {
                PageOutcome::Saved {
                    filename,
                    links_found,
                } => {
                    self.saved += 1;
                    tracing::debug!(%filename, links_found, "Saved page");
                }
                PageOutcome::Failed(e) => {
                    self.failed += 1;
                    tracing::debug!(error = %e, "Page skipped");
                }
            }

            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
        }

        self.index.flush().await?;

        let summary = CrawlSummary {
            visited: self.frontier.visited_count(),
            saved: self.saved,
            failed: self.failed,
            abandoned: self.frontier.pending_count(),
            budget_exhausted: self.frontier.visited_count() >= max_pages,
            output_dir: self.store.root().to_path_buf(),
            metadata_path: self.index.path().to_path_buf(),
        };

        tracing::info!(
            visited = summary.visited,
            saved = summary.saved,
            failed = summary.failed,
            budget_exhausted = summary.budget_exhausted,
            "Crawl finished"
        );

        Ok(summary)
    }

    /// Downloads and handles a URL that was just taken off the frontier.
    ///
    /// Download and page-write failures come back as
    /// `Ok(PageOutcome::Failed)`; only metadata index errors are returned
    /// as `Err`.
    pub async fn fetch_and_process(&mut self, url: Url) -> Result<PageOutcome> {
        println!(
            "Scraping [{}/{}]: {}",
            self.frontier.visited_count(),
            self.config.max_pages,
            url
        );

        let body = match self.fetcher.fetch(&url).await {
            Ok(body) => body,
            Err(e) => {
                eprintln!("  ✗ Error scraping {}: {}", url, e);
                tracing::warn!(url = %url, error = %e, "Fetch failed, skipping");
                return Ok(PageOutcome::Failed(e.into()));
            }
        };

        let filename = derive_filename(&url);
        if let Err(error) = self.store.write_page(&filename, &body).await {
            eprintln!("  ✗ Error saving {}: {:#}", url, error);
            tracing::warn!(url = %url, %filename, error = %error, "Write failed, skipping");
            return Ok(PageOutcome::Failed(PageError::Write { filename, error }));
        }
        println!("  ✓ Saved: {}", filename);

        let links = extract_links(&body, &url, &self.root);
        println!("  Found {} links on this page", links.len());

        let links_found = links.len();
        let newly_queued = self.enqueue(links);

        if let Some(previous) = self.index.get(&filename) {
            if previous.url != url.as_str() {
                tracing::warn!(
                    %filename,
                    previous = %previous.url,
                    url = %url,
                    "Two URLs map to the same file, keeping the newer one"
                );
            }
        }
        self.index
            .record(filename.clone(), PageMetadata::now(url.as_str(), links_found));
        self.unflushed += 1;
        if self.unflushed >= self.config.flush_every {
            self.index.flush().await?;
            self.unflushed = 0;
        }

        tracing::debug!(url = %url, links_found, newly_queued, "Queued links");

        Ok(PageOutcome::Saved {
            filename,
            links_found,
        })
    }

    // Once the budget is met nothing else will be fetched, so discovered
    // links are dropped instead of queued
    fn enqueue(&mut self, links: impl IntoIterator<Item = Url>) -> usize {
        if self.frontier.visited_count() >= self.config.max_pages {
            return 0;
        }

        links
            .into_iter()
            .filter(|link| self.frontier.push(link.clone()))
            .count()
    }
}

/// Opens a crawler with `config` and runs it to completion.
pub async fn crawl_site<F: Fetcher>(config: CrawlConfig, fetcher: F) -> Result<CrawlSummary> {
    Crawler::open(config, fetcher).await?.run().await
}
