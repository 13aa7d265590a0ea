//! Plongeur main entry point
//!
//! Command-line interface for running one bounded deep-navigation crawl.

use clap::Parser;
use plongeur::config::{load_config_with_hash, Config};
use plongeur::crawler::{NavigationStrategy, Navigator};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Plongeur: a bounded deep-navigation web crawler
///
/// Crawls same-site links from a seed URL under page and depth budgets,
/// extracts a structured record from every accepted page and writes the
/// results as JSON files.
#[derive(Parser, Debug)]
#[command(name = "plongeur")]
#[command(version)]
#[command(about = "A bounded deep-navigation web crawler", long_about = None)]
struct Cli {
    /// Seed URL to start crawling from
    #[arg(value_name = "SEED_URL")]
    seed_url: String,

    /// Path to TOML configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Maximum crawl depth (overrides the config file)
    #[arg(long)]
    depth: Option<u32>,

    /// Maximum pages to accept (overrides the config file)
    #[arg(long)]
    pages: Option<usize>,

    /// Frontier traversal strategy (overrides the config file)
    #[arg(long, value_enum)]
    strategy: Option<NavigationStrategy>,

    /// Output directory for JSON files (overrides the config file)
    #[arg(long, value_name = "DIR")]
    output: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)?;
            tracing::info!("Configuration loaded (hash: {})", hash);
            config
        }
        None => Config::default(),
    };

    // CLI flags win over the config file
    if let Some(depth) = cli.depth {
        config.crawler.max_depth = depth;
    }
    if let Some(pages) = cli.pages {
        config.crawler.max_pages = pages;
    }
    if let Some(strategy) = cli.strategy {
        config.crawler.strategy = strategy;
    }
    if let Some(output) = &cli.output {
        config.output.pages_dir = output.display().to_string();
    }

    let max_depth = config.crawler.max_depth;
    let max_pages = config.crawler.max_pages;
    let strategy = config.crawler.strategy;
    let pages_dir = config.output.pages_dir.clone();

    let mut navigator = Navigator::new(config)?;
    let path = navigator
        .navigate_deep(&cli.seed_url, max_depth, max_pages, strategy, None)
        .await;

    println!("=== Crawl {} ===", path.session_id);
    println!("Seed:               {}", path.start_url);
    println!("Strategy:           {}", path.navigation_strategy);
    println!("Pages accepted:     {}", path.visited_pages.len());
    println!("Max depth reached:  {}", path.navigation_depth);
    println!("Content extracted:  {} chars", path.total_content_extracted);
    println!("Fetches performed:  {}", navigator.fetches_performed());
    println!("Output directory:   {}", pages_dir);

    Ok(())
}

/// Sets up the tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("plongeur=info,warn"),
            1 => EnvFilter::new("plongeur=debug,info"),
            2 => EnvFilter::new("plongeur=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
