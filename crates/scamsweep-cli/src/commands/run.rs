use crate::commands::{print_json, Context};
use crate::error::{not_found, sources_failed};
use anyhow::Result;
use clap::Args;
use scamsweep_ingest::{run_source, CsvSource, RecordSource, SourceReport, SqliteSource};
use serde::Serialize;
use tracing::warn;

#[derive(Debug, Default, Args)]
pub struct DbArgs {
    /// Database source names; every configured database when omitted
    pub names: Vec<String>,
    #[arg(long, conflicts_with = "names")]
    pub all: bool,
    /// Print configured database names and exit
    #[arg(long, conflicts_with_all = ["names", "all"])]
    pub list: bool,
}

#[derive(Debug, Default, Args)]
pub struct CsvArgs {
    /// CSV source names; every configured file when omitted
    pub names: Vec<String>,
    #[arg(long, conflicts_with = "names")]
    pub all: bool,
    /// Print configured CSV source names and exit
    #[arg(long, conflicts_with_all = ["names", "all"])]
    pub list: bool,
}

#[derive(Debug, Default, Serialize)]
struct BatchReport {
    sources: Vec<SourceReport>,
    failures: Vec<SourceFailure>,
}

#[derive(Debug, Serialize)]
struct SourceFailure {
    source: String,
    error: String,
}

pub fn run_db(ctx: &Context<'_>, args: DbArgs) -> Result<()> {
    let config = ctx.config;
    if args.list {
        return print_names(ctx, &config.db_source_names());
    }

    let selected = resolve(&args.names, &config.db_sources, |s| &s.name, "database")?;
    let sources: Vec<Box<dyn RecordSource>> = selected
        .into_iter()
        .map(|source| {
            Box::new(SqliteSource::from_config(&config.data_dir, source)) as Box<dyn RecordSource>
        })
        .collect();
    run_batch(ctx, sources)
}

pub fn run_csv(ctx: &Context<'_>, args: CsvArgs) -> Result<()> {
    let config = ctx.config;
    if args.list {
        return print_names(ctx, &config.csv_source_names());
    }

    let selected = resolve(&args.names, &config.csv_sources, |s| &s.name, "csv")?;
    let sources: Vec<Box<dyn RecordSource>> = selected
        .into_iter()
        .map(|source| {
            Box::new(CsvSource::from_config(&config.data_dir, source)) as Box<dyn RecordSource>
        })
        .collect();
    run_batch(ctx, sources)
}

fn resolve<'a, T>(
    requested: &[String],
    available: &'a [T],
    name_of: impl Fn(&T) -> &String,
    kind: &str,
) -> Result<Vec<&'a T>> {
    if requested.is_empty() {
        return Ok(available.iter().collect());
    }

    requested
        .iter()
        .map(|name| {
            available
                .iter()
                .find(|source| name_of(source) == name)
                .ok_or_else(|| {
                    let names: Vec<&str> = available.iter().map(|s| name_of(s).as_str()).collect();
                    not_found(format!(
                        "{kind} source {name} (available: {})",
                        names.join(", ")
                    ))
                })
        })
        .collect()
}

fn run_batch(ctx: &Context<'_>, sources: Vec<Box<dyn RecordSource>>) -> Result<()> {
    let total = sources.len();
    let mut batch = BatchReport::default();
    let mut last_error = None;

    for source in &sources {
        match run_source(
            source.as_ref(),
            &ctx.config.output_dir,
            ctx.config.locker_style,
        ) {
            Ok(report) => batch.sources.push(report),
            Err(err) => {
                if total > 1 {
                    warn!(source = source.name(), error = %err, "source failed, continuing");
                }
                batch.failures.push(SourceFailure {
                    source: source.name().to_string(),
                    error: err.to_string(),
                });
                last_error = Some((source.name().to_string(), err));
            }
        }
    }

    print_batch(ctx, &batch)?;

    match last_error {
        None => Ok(()),
        Some((name, err)) if total == 1 => {
            Err(anyhow::Error::new(err).context(format!("clean source {name}")))
        }
        Some(_) => Err(sources_failed(batch.failures.len(), total)),
    }
}

fn print_names(ctx: &Context<'_>, names: &[&str]) -> Result<()> {
    if ctx.json {
        return print_json(&names);
    }
    if names.is_empty() {
        println!("no sources configured");
        return Ok(());
    }
    println!("{}", names.join(", "));
    Ok(())
}

fn print_batch(ctx: &Context<'_>, batch: &BatchReport) -> Result<()> {
    if ctx.json {
        return print_json(batch);
    }

    if batch.sources.is_empty() && batch.failures.is_empty() {
        println!("no sources configured");
        return Ok(());
    }

    for source in &batch.sources {
        let report = &source.report;
        println!("{}", source.source);
        println!(
            "  records: {} (valid {}, invalid {}, skipped {})",
            report.total, report.valid, report.invalid, report.skipped
        );
        println!("  output: {}", source.output.display());
        for entry in &report.categories {
            println!(
                "  {}: {} ({:.1}%) {}",
                entry.category, entry.count, entry.percentage, entry.description
            );
        }
    }
    for failure in &batch.failures {
        println!("{}: failed: {}", failure.source, failure.error);
    }
    Ok(())
}
