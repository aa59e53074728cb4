// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Set up logging (tracing, filtered by RUST_LOG, written to stderr)
// 2. Parse command-line arguments using clap
// 3. Dispatch to the appropriate subcommand handler
// 4. Exit with proper code (0 = success, 1 = fatal error)
//
// A crawl where some pages failed to download is still a success: those
// failures are reported in the summary. Only problems that stop the crawl
// itself (bad seed URL, output folder cannot be written) exit with 1.
// =============================================================================

mod cli;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::{CatalogCommand, Cli, Commands, CrawlArgs};
use site_scraper::catalog::{ContentApi, MockCatalog};
use site_scraper::{crawl_site, CrawlSummary, HttpFetcher};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,site_scraper=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let exit_code = match run().await {
        Ok(()) => 0,
        Err(e) => {
            tracing::error!(error = ?e, "Fatal error");
            eprintln!("Fatal error: {:#}", e);
            1
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Crawl(args) => handle_crawl(&args).await,
        Commands::Catalog(cmd) => handle_catalog(&cmd).await,
    }
}

async fn handle_crawl(args: &CrawlArgs) -> Result<()> {
    let config = args.to_config();
    config.validate()?;

    if !args.json {
        print_banner(&config);
    }

    let fetcher = HttpFetcher::new(config.timeout(), &config.user_agent)?;
    let summary = crawl_site(config, fetcher).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(&summary);
    }
    Ok(())
}

fn print_banner(config: &site_scraper::CrawlConfig) {
    println!("{}", "=".repeat(60));
    println!("Website Scraper");
    println!("{}", "=".repeat(60));
    println!("Base URL: {}", config.seed_url);
    println!("Output Directory: {}", config.output_dir.display());
    println!("Max Pages: {}", config.max_pages);
    println!("{}", "=".repeat(60));
    println!();
}

fn print_summary(summary: &CrawlSummary) {
    println!();
    println!("{}", "=".repeat(60));
    println!("Scraping Complete!");
    println!("Total pages scraped: {}", summary.visited);
    println!("   ✓ Saved: {}", summary.saved);
    println!("   ✗ Failed: {}", summary.failed);
    if summary.budget_exhausted {
        println!("Page budget reached");
    }
    println!("Files saved to: {}", summary.output_dir.display());
    println!("Metadata index: {}", summary.metadata_path.display());
    println!("{}", "=".repeat(60));
}

async fn handle_catalog(cmd: &CatalogCommand) -> Result<()> {
    let catalog = MockCatalog::default();

    match cmd {
        CatalogCommand::Authors { json } => {
            let authors = catalog.get_authors().await;
            if *json {
                println!("{}", serde_json::to_string_pretty(&authors)?);
            } else {
                println!("{:<6} {}", "ID", "NAME");
                for author in &authors {
                    println!("{:<6} {}", author.id, author.name);
                }
            }
        }
        CatalogCommand::Topics { json } => {
            let topics = catalog.get_topics().await;
            if *json {
                println!("{}", serde_json::to_string_pretty(&topics)?);
            } else {
                println!("{:<6} {}", "ID", "NAME");
                for topic in &topics {
                    println!("{:<6} {}", topic.id, topic.name);
                }
            }
        }
        CatalogCommand::Search { json, .. } => {
            let params = cmd.search_params().unwrap_or_default();
            let results = catalog.search_content(&params).await;
            if *json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else if results.is_empty() {
                println!("No content found");
            } else {
                println!("{:<8} {:<10} {}", "ID", "TYPE", "TITLE");
                for item in &results {
                    let info = item.info();
                    let kind = format!("{:?}", item.content_type());
                    println!("{:<8} {:<10} {}", info.id, kind, info.title);
                }
            }
        }
    }

    Ok(())
}
