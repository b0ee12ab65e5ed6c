use crate::commands::{print_json, Context};
use anyhow::Result;
use clap::Args;
use scamsweep_ingest::{CsvSource, RecordSource};
use serde::Serialize;

#[derive(Debug, Args)]
pub struct SourcesArgs {}

#[derive(Debug, Serialize)]
struct SourceDto<'a> {
    kind: &'static str,
    name: &'a str,
    input: &'a str,
    table: Option<&'a str>,
    number_field: &'a str,
    type_field: &'a str,
    output: String,
}

pub fn list_sources(ctx: &Context<'_>, _args: SourcesArgs) -> Result<()> {
    let config = ctx.config;
    let mut items: Vec<SourceDto<'_>> = config
        .db_sources
        .iter()
        .map(|source| SourceDto {
            kind: "db",
            name: &source.name,
            input: &source.db_file,
            table: Some(&source.table),
            number_field: &source.number_field,
            type_field: &source.type_field,
            output: source.output_file.clone(),
        })
        .collect();
    items.extend(config.csv_sources.iter().map(|source| SourceDto {
        kind: "csv",
        name: &source.name,
        input: &source.file,
        table: None,
        number_field: &source.number_field,
        type_field: &source.type_field,
        output: CsvSource::from_config(&config.data_dir, source)
            .output_file_name()
            .to_string(),
    }));

    if ctx.json {
        return print_json(&items);
    }

    if items.is_empty() {
        println!("no sources configured");
        return Ok(());
    }

    for item in items {
        let input = match item.table {
            Some(table) => format!("{}:{}", item.input, table),
            None => item.input.to_string(),
        };
        println!(
            "[{}] {} {} ({} -> number, {} -> type) => {}",
            item.kind, item.name, input, item.number_field, item.type_field, item.output
        );
    }
    Ok(())
}
