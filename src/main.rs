//! Interviewer - interview question selection and performance summaries
//!
//! A CLI tool that filters a fixed catalog of frontend interview questions
//! by technology and level, and aggregates a candidate's scored responses
//! into per-technology performance summaries.
//!
//! Exit codes:
//!   0 - Success
//!   1 - Runtime error (missing file, invalid JSON, bad arguments, etc.)
//!   2 - A technology is below its thresholds and --fail-below was set

mod catalog;
mod cli;
mod config;
mod error;
mod models;
mod performance;
mod report;
mod selector;

use anyhow::{Context, Result};
use cli::{Args, Command, PerformArgs, SelectArgs};
use config::{Config, CONFIG_FILENAME};
use performance::PerformanceOptions;
use report::PerformanceReport;
use selector::SelectionOptions;
use std::path::PathBuf;
use tracing::{debug, error, info, warn};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args();

    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // Handle init-config early (no logging needed)
    if let Command::InitConfig = args.command {
        return handle_init_config();
    }

    // Config is loaded first since it can raise the log level
    let (mut config, source) = match load_config(&args) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    };
    config.merge_with_args(&args);

    init_logging(config.log_level(&args));

    debug!("Interviewer v{}", env!("CARGO_PKG_VERSION"));
    debug!("Arguments: {:?}", args);
    source.log();

    match run(args, config).await {
        Ok(exit_code) => {
            std::process::exit(exit_code);
        }
        Err(e) => {
            error!("Run failed: {:#}", e);
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}

/// Handle init-config: generate a default .interviewer.toml.
fn handle_init_config() -> Result<()> {
    let path = std::path::Path::new(CONFIG_FILENAME);

    if path.exists() {
        eprintln!("{} already exists. Remove it first or edit it manually.", CONFIG_FILENAME);
        std::process::exit(1);
    }

    let content = Config::default_toml();
    std::fs::write(path, &content)
        .with_context(|| format!("Failed to write {}", CONFIG_FILENAME))?;

    println!("Created {} with default settings.", CONFIG_FILENAME);
    Ok(())
}

/// Initialize logging at the given level.
///
/// Logs go to stderr so stdout carries only the rendered result.
fn init_logging(level: tracing::Level) {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

/// Dispatch the selected pipeline. Returns the exit code.
async fn run(args: Args, config: Config) -> Result<i32> {
    debug!("Assets directory: {}", config.general.assets_dir.display());

    match &args.command {
        Command::Select(select) => run_select(select, &config).await,
        Command::Perform(perform) => run_perform(perform, &config).await,
        Command::InitConfig => Ok(0),
    }
}

/// Filter the catalog and write the selected questions.
async fn run_select(select: &SelectArgs, config: &Config) -> Result<i32> {
    let catalog = match config.selector.catalog {
        Some(ref path) => catalog::load(path).await?,
        None => catalog::builtin()?,
    };

    let options = SelectionOptions {
        technologies: select.technologies.iter().copied().collect(),
        levels: select.levels.iter().copied().collect(),
        filename: select.filename.clone(),
        pretty: config.selector.pretty,
    };

    let (path, count) =
        selector::create_interview_questions(&catalog, &config.general.assets_dir, &options)
            .await
            .context("Failed to create interview questions")?;

    if count == 0 {
        warn!("No questions matched the selected technologies and levels");
    }
    println!("Wrote {} questions to {}", count, path.display());

    Ok(0)
}

/// Aggregate a candidate's responses and render the summary.
async fn run_perform(perform: &PerformArgs, config: &Config) -> Result<i32> {
    let options = PerformanceOptions {
        path: perform.path.clone(),
    };
    let source = performance::responses_path(&config.general.assets_dir, &options.path);

    let aggregation = performance::compute_performance(&config.general.assets_dir, &options)
        .await
        .context("Failed to compute performance")?;

    if !aggregation.warnings.is_empty() {
        warn!(
            "{} scores were missing or not recognized and counted as zero",
            aggregation.warnings.len()
        );
    }

    let failing = performance::failing_technologies(&aggregation.performance);

    let mut report = PerformanceReport::new(source.display().to_string(), aggregation.performance);
    report.warnings = aggregation.warnings;
    report.show_status = config.report.show_status;

    let output = report.render(config.report.format)?;
    print!("{}", output);

    if let Some(ref path) = perform.output {
        tokio::fs::write(path, &output)
            .await
            .with_context(|| format!("Failed to write report to {}", path.display()))?;
        info!("Report saved to {}", path.display());
    }

    if perform.fail_below && !failing.is_empty() {
        let names: Vec<String> = failing.iter().map(ToString::to_string).collect();
        eprintln!("Below threshold: {}", names.join(", "));
        return Ok(2);
    }

    Ok(0)
}

/// Where the configuration came from, logged once the subscriber is set.
enum ConfigSource {
    Explicit(PathBuf),
    DefaultFile,
    Defaults,
    Unreadable(anyhow::Error),
}

impl ConfigSource {
    fn log(&self) {
        match self {
            ConfigSource::Explicit(path) => info!("Loaded config from: {}", path.display()),
            ConfigSource::DefaultFile => debug!("Loaded default config from {}", CONFIG_FILENAME),
            ConfigSource::Defaults => debug!("No config file found, using defaults"),
            ConfigSource::Unreadable(e) => warn!("Failed to load config: {:#}", e),
        }
    }
}

/// Load configuration from file or use defaults.
fn load_config(args: &Args) -> Result<(Config, ConfigSource)> {
    if let Some(ref config_path) = args.config {
        let config = Config::load(config_path)?;
        return Ok((config, ConfigSource::Explicit(config_path.clone())));
    }

    match Config::load_default() {
        Ok(Some(config)) => Ok((config, ConfigSource::DefaultFile)),
        Ok(None) => Ok((Config::default(), ConfigSource::Defaults)),
        Err(e) => Ok((Config::default(), ConfigSource::Unreadable(e))),
    }
}
