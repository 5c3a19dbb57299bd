//! Keyword-Ripple main entry point
//!
//! This is the command-line interface for the Keyword-Ripple suggestion explorer.

use anyhow::{bail, Context};
use clap::Parser;
use keyword_ripple::config::{load_config_with_hash, Config};
use keyword_ripple::crawler::{http_sources, run_to_completion, CrawlEngine};
use keyword_ripple::output::{print_statistics, write_csv, CrawlStatistics};
use keyword_ripple::server::{serve, AppState};
use keyword_ripple::SuffixLength;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Keyword-Ripple: explores autocomplete suggestions around a seed phrase
///
/// Keyword-Ripple appends every one- or two-letter Persian suffix to a seed
/// phrase, collects the autocomplete suggestions for each combination, and
/// clusters the top search results of every suggestion by domain.
#[derive(Parser, Debug)]
#[command(name = "keyword-ripple")]
#[command(version = "1.0.0")]
#[command(about = "Autocomplete suggestion explorer", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Seed phrase for a headless crawl
    #[arg(long, conflicts_with = "serve")]
    seed: Option<String>,

    /// Number of suffix letters appended to the seed (1 or 2)
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(i64).range(1..=2))]
    suffix_length: i64,

    /// Serve the HTTP API instead of crawling
    #[arg(long, conflicts_with = "dry_run")]
    serve: bool,

    /// Validate config and show what would be crawled without crawling
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    tracing::info!("Loading configuration from: {}", cli.config.display());
    let (config, config_hash) = load_config_with_hash(&cli.config)
        .with_context(|| format!("failed to load {}", cli.config.display()))?;
    tracing::info!("Configuration loaded successfully (hash: {})", config_hash);

    if cli.dry_run {
        handle_dry_run(&config, cli.seed.as_deref(), cli.suffix_length)
    } else if cli.serve {
        handle_serve(config).await
    } else {
        let Some(seed) = cli.seed else {
            bail!("--seed is required unless --serve or --dry-run is given");
        };
        handle_crawl(config, &seed, cli.suffix_length).await
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("keyword_ripple=info,warn"),
            1 => EnvFilter::new("keyword_ripple=debug,info"),
            2 => EnvFilter::new("keyword_ripple=trace,debug"),
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

/// Handles the --dry-run mode: shows the resolved configuration
fn handle_dry_run(config: &Config, seed: Option<&str>, suffix_length: i64) -> anyhow::Result<()> {
    println!("=== Keyword-Ripple Dry Run ===\n");

    println!("Sources:");
    println!("  Suggestions: {}", config.sources.suggest_url);
    println!(
        "  Search: {} (hl={})",
        config.sources.search_url, config.sources.language
    );
    println!("  User agent: {}", config.sources.user_agent);
    println!("  Request timeout: {}s", config.sources.request_timeout);
    println!("  Popularity label: {}", config.popularity.label);

    println!("\nServer:");
    println!("  Bind address: {}", config.server.bind_address);

    println!("\nExport:");
    println!("  Directory: {}", config.export.directory);
    println!("  File prefix: {}", config.export.file_prefix);

    let total = SuffixLength::try_from(suffix_length)?.total_combinations();
    println!("\n✓ Configuration is valid");
    match seed {
        Some(seed) => println!(
            "✓ Would crawl {} combinations of {:?} with {}-letter suffixes",
            total, seed, suffix_length
        ),
        None => println!(
            "✓ {}-letter suffixes give {} combinations per seed",
            suffix_length, total
        ),
    }

    Ok(())
}

/// Handles the --serve mode: runs the HTTP API until interrupted
async fn handle_serve(config: Config) -> anyhow::Result<()> {
    let engine = Arc::new(CrawlEngine::new(http_sources(&config)?));
    let state = AppState::new(engine, config.export.clone());

    let listener = tokio::net::TcpListener::bind(&config.server.bind_address)
        .await
        .with_context(|| format!("failed to bind {}", config.server.bind_address))?;

    tokio::select! {
        result = serve(listener, state) => result?,
        _ = tokio::signal::ctrl_c() => tracing::info!("Shutting down"),
    }

    Ok(())
}

/// Handles the headless crawl: runs a session to completion and exports it
///
/// Ctrl-C pauses the session after the in-flight combination; whatever was
/// gathered up to that point is still exported.
async fn handle_crawl(config: Config, seed: &str, suffix_length: i64) -> anyhow::Result<()> {
    let engine = CrawlEngine::new(http_sources(&config)?);
    let total = engine.start(seed, suffix_length).await?;
    tracing::info!("Crawling {} combinations of {:?}", total, seed);

    let interrupted = Arc::new(AtomicBool::new(false));
    {
        let interrupted = interrupted.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::warn!("Interrupt received, stopping after the current combination");
                interrupted.store(true, Ordering::SeqCst);
            }
        });
    }

    let last = run_to_completion(&engine, seed, suffix_length, || {
        !interrupted.load(Ordering::SeqCst)
    })
    .await?;

    match last {
        Some(outcome) if outcome.complete => tracing::info!("Crawl completed successfully"),
        Some(outcome) => {
            engine.pause().await?;
            tracing::info!(
                "Crawl stopped at {}/{} combinations",
                outcome.progress,
                outcome.total
            );
        }
        None => tracing::info!("Crawl stopped before the first combination"),
    }

    let results = engine.results().await;
    print_statistics(&CrawlStatistics::from_results(&results));

    let Some(rows) = engine.export_rows().await else {
        println!("Nothing to export");
        return Ok(());
    };

    let path = write_csv(
        &rows,
        Path::new(&config.export.directory),
        &config.export.file_prefix,
        chrono::Local::now(),
    )?;
    println!("✓ Results exported to: {}", path.display());

    Ok(())
}
