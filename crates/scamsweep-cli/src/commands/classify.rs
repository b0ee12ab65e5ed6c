use crate::commands::print_json;
use anyhow::Result;
use clap::Args;
use scamsweep_core::{classify_scam_type, ScamCategory};
use serde::Serialize;

#[derive(Debug, Args)]
pub struct ClassifyArgs {
    #[arg(required = true)]
    pub labels: Vec<String>,
}

#[derive(Debug, Serialize)]
struct ClassifyResult {
    label: String,
    category: ScamCategory,
    description: &'static str,
}

pub fn classify_labels(json: bool, args: ClassifyArgs) -> Result<()> {
    let results: Vec<ClassifyResult> = args
        .labels
        .into_iter()
        .map(|label| {
            let category = classify_scam_type(&label);
            ClassifyResult {
                label,
                category,
                description: category.description(),
            }
        })
        .collect();

    if json {
        return print_json(&results);
    }

    for result in results {
        println!(
            "{}: {} ({})",
            result.label, result.category, result.description
        );
    }
    Ok(())
}
