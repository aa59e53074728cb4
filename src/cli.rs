// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Two subcommands:
// - crawl: Download a website into a folder, breadth-first
// - catalog: Query the app's (mock) content catalog
//
// Every crawl flag is optional; leaving one out keeps the default from
// CrawlConfig (see config.rs).
// =============================================================================

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use site_scraper::catalog::{ContentType, SearchParams};
use site_scraper::CrawlConfig;

#[derive(Parser, Debug)]
#[command(
    name = "site-scraper",
    version,
    about = "Politely download a website, page by page, into a folder",
    long_about = "site-scraper crawls a single website breadth-first, saves every page it can \
                  download and keeps a _url_mapping.json index of what was saved, when, and \
                  from where."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Crawl a website and save its pages
    ///
    /// Example: site-scraper crawl https://example.org --max-pages 20
    Crawl(CrawlArgs),

    /// Query the content catalog
    #[command(subcommand)]
    Catalog(CatalogCommand),
}

#[derive(clap::Args, Debug)]
pub struct CrawlArgs {
    /// Where to start; only pages on this URL's host are crawled
    /// (default: https://torahweb.org)
    pub seed_url: Option<String>,

    /// Folder for saved pages and the metadata index (default: ScrapedHTML)
    #[arg(long, short)]
    pub output_dir: Option<PathBuf>,

    /// Maximum number of URLs to visit (default: 100)
    #[arg(long)]
    pub max_pages: Option<usize>,

    /// Pause after every request, in milliseconds (default: 1000)
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Per-request timeout in seconds (default: 10)
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// User-Agent header sent with every request
    #[arg(long)]
    pub user_agent: Option<String>,

    /// Rewrite the metadata index after this many saved pages (default: 1)
    #[arg(long)]
    pub flush_every: Option<usize>,

    /// Print the final summary as JSON
    #[arg(long)]
    pub json: bool,
}

impl CrawlArgs {
    /// Layers the flags that were given over the defaults
    pub fn to_config(&self) -> CrawlConfig {
        let defaults = CrawlConfig::default();
        CrawlConfig {
            seed_url: self.seed_url.clone().unwrap_or(defaults.seed_url),
            output_dir: self.output_dir.clone().unwrap_or(defaults.output_dir),
            max_pages: self.max_pages.unwrap_or(defaults.max_pages),
            request_delay_ms: self.delay_ms.unwrap_or(defaults.request_delay_ms),
            timeout_secs: self.timeout_secs.unwrap_or(defaults.timeout_secs),
            user_agent: self.user_agent.clone().unwrap_or(defaults.user_agent),
            flush_every: self.flush_every.unwrap_or(defaults.flush_every),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum CatalogCommand {
    /// List all authors
    Authors {
        #[arg(long)]
        json: bool,
    },

    /// List all topics
    Topics {
        #[arg(long)]
        json: bool,
    },

    /// Search articles, videos and audio
    ///
    /// Example: site-scraper catalog search pesach --type audio
    Search {
        /// Text to look for in titles and summaries
        query: Option<String>,

        /// Only this kind of content
        #[arg(long = "type", value_enum)]
        content_type: Option<ContentType>,

        /// Only content by this author id
        #[arg(long = "author")]
        author_id: Option<String>,

        /// Only content tagged with this topic id
        #[arg(long = "topic")]
        topic_id: Option<String>,

        #[arg(long)]
        json: bool,
    },
}

impl CatalogCommand {
    pub fn search_params(&self) -> Option<SearchParams> {
        match self {
            CatalogCommand::Search {
                query,
                content_type,
                author_id,
                topic_id,
                ..
            } => Some(SearchParams {
                query: query.clone(),
                author_id: author_id.clone(),
                topic_id: topic_id.clone(),
                content_type: *content_type,
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_crawl_defaults() {
        let cli = Cli::parse_from(["site-scraper", "crawl"]);
        let Commands::Crawl(args) = cli.command else {
            panic!("expected crawl");
        };
        let config = args.to_config();
        assert_eq!(config.seed_url, "https://torahweb.org");
        assert_eq!(config.max_pages, 100);
        assert!(!args.json);
    }

    #[test]
    fn test_crawl_flags_override_defaults() {
        let cli = Cli::parse_from([
            "site-scraper",
            "crawl",
            "https://example.org",
            "--max-pages",
            "5",
            "--delay-ms",
            "0",
            "-o",
            "out",
        ]);
        let Commands::Crawl(args) = cli.command else {
            panic!("expected crawl");
        };
        let config = args.to_config();
        assert_eq!(config.seed_url, "https://example.org");
        assert_eq!(config.max_pages, 5);
        assert_eq!(config.request_delay_ms, 0);
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn test_catalog_search_params() {
        let cli = Cli::parse_from([
            "site-scraper",
            "catalog",
            "search",
            "pesach",
            "--type",
            "audio",
            "--author",
            "1",
        ]);
        let Commands::Catalog(cmd) = cli.command else {
            panic!("expected catalog");
        };
        let params = cmd.search_params().unwrap();
        assert_eq!(params.query.as_deref(), Some("pesach"));
        assert_eq!(params.content_type, Some(ContentType::Audio));
        assert_eq!(params.author_id.as_deref(), Some("1"));
        assert_eq!(params.topic_id, None);
    }
}
