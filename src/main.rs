use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info, warn};
use raven_view::config::AppConfig;
use raven_view::core::{Pipeline, Scheduler};
use raven_view::renderers::{self, OutputFormat};
use raven_view::sources;
use raven_view_types::{LogFileSourceConfig, SourceConfig, TestSourceConfig};
use std::path::PathBuf;
use tokio::sync::watch;

/// raven-view - live telemetry pipeline for the RAVEN test stand
#[derive(Parser, Debug, Clone)]
#[command(name = "raven-view")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file (defaults to the user config directory)
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log file to tail, overriding the configured source
    #[arg(short = 'l', long = "log", value_name = "FILE", conflicts_with = "demo")]
    log: Option<PathBuf>,

    /// Feed the pipeline with synthetic rows instead of a log file
    #[arg(long = "demo")]
    demo: bool,

    /// Tick interval in milliseconds, overriding the configured value
    #[arg(short = 'i', long = "interval-ms", value_name = "MS")]
    interval_ms: Option<u64>,

    /// How snapshots are emitted
    #[arg(short = 'o', long = "format", value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Print the effective configuration as JSON and exit
    #[arg(long = "print-config")]
    print_config: bool,

    /// List the column layout and exit
    #[arg(long = "list-columns")]
    list_columns: bool,

    /// Debug verbosity level (0=quiet, 1=info, 2=debug, 3=trace)
    #[arg(short = 'd', long = "debug", value_name = "LEVEL", default_value = "0")]
    debug: u8,
}

fn main() {
    // Parse command line arguments
    let cli = Cli::parse();

    // Level 0 (default): warn only
    // Level 1: info
    // Level 2: debug
    // Level 3+: trace
    let log_level = match cli.debug {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // Allow RUST_LOG to override CLI setting
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    if let Err(e) = run(cli) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;

    if cli.print_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }
    if cli.list_columns {
        list_columns(&config);
        return Ok(());
    }

    // Configuration errors are the only fatal ones; surface them before starting
    let pipeline = Pipeline::new(&config).context("Invalid configuration")?;
    let source = sources::create_source(&config.source, config.row_arity, &config.text_columns());
    info!(
        "Starting raven-view v{} with source {}",
        env!("CARGO_PKG_VERSION"),
        source.metadata().description
    );

    let mut scheduler = Scheduler::new(source, pipeline, config.tick_interval());
    scheduler.add_renderer(renderers::create_renderer(cli.format));

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start runtime")?;

    runtime.block_on(async move {
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        tokio::spawn(async move {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Interrupt received, stopping after the current tick"),
                Err(e) => warn!("Could not listen for Ctrl-C: {}", e),
            }
            let _ = shutdown_tx.send(true);
        });
        scheduler.run(shutdown_rx).await;
    });

    Ok(())
}

fn load_config(cli: &Cli) -> Result<AppConfig> {
    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from_path(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => AppConfig::load()?,
    };

    if let Some(path) = &cli.log {
        config.source = SourceConfig::LogFile(LogFileSourceConfig { path: path.clone() });
    }
    if cli.demo {
        config.source = SourceConfig::Test(TestSourceConfig::default());
    }
    if let Some(interval_ms) = cli.interval_ms {
        config.tick_interval_ms = interval_ms;
    }
    Ok(config)
}

/// Print the column layout to stdout
fn list_columns(config: &AppConfig) {
    println!("Row layout ({} columns):", config.row_arity);
    println!();
    for field in config.column_layout() {
        let unit = if field.unit.is_empty() {
            String::new()
        } else {
            format!(" [{}]", field.unit)
        };
        println!("  {:>3}  {}{}", field.column, field.id, unit);
    }
}
