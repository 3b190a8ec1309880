//! Award-Harvest main entry point
//!
//! This is the command-line interface for the Award-Harvest collector.

use anyhow::Context;
use award_harvest::config::{load_config_with_hash, CategoryCatalog, Config};
use award_harvest::harvest::{build_partitions, HarvestMode, Orchestrator};
use award_harvest::output::print_summary;
use clap::Parser;
use std::path::PathBuf;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

/// Award-Harvest: a polite federal award collector
///
/// Award-Harvest sweeps the spending search API partition by partition,
/// respecting a global request interval, enriches each award with its
/// detail payload, and files the results as a JSON directory tree.
#[derive(Parser, Debug)]
#[command(name = "award-harvest")]
#[command(version = "1.0.0")]
#[command(about = "A polite federal award collector", long_about = None)]
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

    /// Single-pass mode: one unenriched batch file per category over the
    /// configured static window
    #[arg(long)]
    batch: bool,

    /// Validate config and show the harvest plan without issuing requests
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load and validate configuration
    tracing::info!("Loading configuration from: {}", cli.config.display());
    let config = match load_config_with_hash(&cli.config) {
        Ok((cfg, hash)) => {
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            cfg
        }
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e).context(format!("config file {}", cli.config.display()));
        }
    };

    if cli.dry_run {
        return handle_dry_run(&config, cli.batch);
    }

    let mode = if cli.batch {
        HarvestMode::Batch
    } else {
        HarvestMode::Enhanced
    };
    handle_harvest(config, mode).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("award_harvest=info,warn"),
            1 => EnvFilter::new("award_harvest=debug,info"),
            2 => EnvFilter::new("award_harvest=trace,debug"),
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

/// Handles the --dry-run mode: validates config and shows the plan
fn handle_dry_run(config: &Config, batch: bool) -> anyhow::Result<()> {
    println!("=== Award-Harvest Dry Run ===\n");

    println!("Harvester Configuration:");
    println!("  Workers: {}", config.harvester.concurrency);
    println!(
        "  Request interval: {}ms",
        config.harvester.request_interval_ms
    );
    println!(
        "  Request timeout: {}s",
        config.harvester.request_timeout_secs
    );
    println!("  Page limit: {}", config.harvester.page_limit);
    println!(
        "  Page cap per partition: {}",
        config.harvester.max_pages_per_partition
    );

    println!("\nEndpoints:");
    println!("  Search: {}", config.api.search_url);
    println!("  Awards: {}", config.api.awards_url);
    println!("  User agent: {}", config.api.user_agent);

    println!("\nQuery:");
    println!("  Keywords: {}", config.query.keywords.join(", "));
    println!(
        "  Recipient types: {}",
        config.query.recipient_types.len()
    );
    for place in &config.query.place_of_performance {
        println!("  Place of performance: {} / {}", place.country, place.state);
    }

    println!("\nOutput:");
    println!("  Base directory: {}", config.output.base_dir);
    println!("  Batch prefix: {}", config.output.batch_prefix);

    let catalog = CategoryCatalog::builtin();
    if batch {
        println!("\nSingle-Pass Window:");
        println!(
            "  {} .. {}",
            config.query.start_date, config.query.end_date
        );

        println!("\nCategories ({}):", catalog.iter().count());
        for spec in catalog.iter() {
            println!("  - {} (codes {:?})", spec.category, spec.type_codes);
        }

        println!("\n✓ Configuration is valid");
        println!(
            "✓ Would write batch files under: {}",
            config.output.base_dir
        );
    } else {
        let partitions = build_partitions(config, &catalog)?;

        println!("\nPartition Plan ({}):", partitions.len());
        for partition in &partitions {
            println!(
                "  - {} ({} .. {})",
                partition.label(),
                partition.start_date,
                partition.end_date
            );
        }

        println!("\n✓ Configuration is valid");
        println!(
            "✓ Would harvest {} partitions with {} workers",
            partitions.len(),
            config.harvester.concurrency
        );
    }

    Ok(())
}

/// Handles the main harvest operation
async fn handle_harvest(config: Config, mode: HarvestMode) -> anyhow::Result<()> {
    let token = CancellationToken::new();

    // Wire Ctrl-C to cooperative shutdown
    let signal_token = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("Interrupt received, stopping workers");
            signal_token.cancel();
        }
    });

    let orchestrator =
        Orchestrator::new(config, token).context("failed to construct the harvest pipeline")?;

    match orchestrator.run(mode).await {
        Ok(summary) => {
            tracing::info!("Harvest completed");
            println!();
            print_summary(&summary);
            Ok(())
        }
        Err(e) => {
            tracing::error!("Harvest failed: {}", e);
            Err(e.into())
        }
    }
}
