mod commands;
mod error;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::commands::{check, classify, completions, run, sources, Context};
use crate::error::{exit_code_for, report_error};
use scamsweep_config as config;
use scamsweep_core::LockerStyle;

#[derive(Debug, Parser)]
#[command(
    name = "scamsweep",
    version,
    about = "Clean and classify reported scam phone numbers"
)]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Directory holding the source CSV files and databases
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
    /// Directory the cleaned CSV files are written to
    #[arg(long, global = true)]
    out_dir: Option<PathBuf>,
    /// Fill `locker_type` with the category tag or its description
    #[arg(long, global = true, value_name = "tag|description")]
    locker_type: Option<String>,
    #[arg(long, global = true)]
    json: bool,
    #[arg(long, short, global = true)]
    verbose: bool,
    /// Defaults to cleaning every configured database
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Clean SQLite sources
    Db(run::DbArgs),
    /// Clean CSV sources
    Csv(run::CsvArgs),
    /// List configured sources and their column mappings
    Sources(sources::SourcesArgs),
    /// Validate and canonicalize phone numbers
    Check(check::CheckArgs),
    /// Classify free-text labels into scam categories
    Classify(classify::ClassifyArgs),
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        config: config_path,
        data_dir,
        out_dir,
        locker_type,
        json,
        verbose: _,
        command,
    } = cli;
    let overrides = Overrides {
        config_path,
        data_dir,
        out_dir,
        locker_type,
    };

    match command.unwrap_or(Command::Db(run::DbArgs::default())) {
        Command::Completions(args) => completions::emit(args),
        Command::Check(args) => check::check_numbers(json, args),
        Command::Classify(args) => classify::classify_labels(json, args),
        Command::Db(args) => with_config(overrides, json, |ctx| run::run_db(ctx, args)),
        Command::Csv(args) => with_config(overrides, json, |ctx| run::run_csv(ctx, args)),
        Command::Sources(args) => {
            with_config(overrides, json, |ctx| sources::list_sources(ctx, args))
        }
    }
}

struct Overrides {
    config_path: Option<PathBuf>,
    data_dir: Option<PathBuf>,
    out_dir: Option<PathBuf>,
    locker_type: Option<String>,
}

fn with_config(
    overrides: Overrides,
    json: bool,
    f: impl FnOnce(&Context<'_>) -> Result<()>,
) -> Result<()> {
    let Overrides {
        config_path,
        data_dir,
        out_dir,
        locker_type,
    } = overrides;

    match config::resolve_config_path(config_path.clone()) {
        Ok(path) if path.exists() => debug!(path = %path.display(), "config resolved"),
        Ok(path) => debug!(path = %path.display(), "config missing, using defaults"),
        Err(err) => debug!(error = %err, "config unavailable"),
    }
    let mut app_config = config::load(config_path).with_context(|| "load config")?;
    if let Some(dir) = data_dir {
        app_config.data_dir = dir;
    }
    if let Some(dir) = out_dir {
        app_config.output_dir = dir;
    }
    if let Some(raw) = locker_type {
        app_config.locker_style = raw
            .parse::<LockerStyle>()
            .with_context(|| "parse --locker-type")?;
    }
    debug!(
        data_dir = %app_config.data_dir.display(),
        output_dir = %app_config.output_dir.display(),
        locker_style = ?app_config.locker_style,
        "settings resolved"
    );

    f(&Context {
        config: &app_config,
        json,
    })
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
