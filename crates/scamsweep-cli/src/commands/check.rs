use crate::commands::print_json;
use anyhow::Result;
use clap::Args;
use scamsweep_core::{format_phone_number, is_valid_phone_number};
use serde::Serialize;

#[derive(Debug, Args)]
pub struct CheckArgs {
    #[arg(required = true)]
    pub numbers: Vec<String>,
}

#[derive(Debug, Serialize)]
struct CheckResult {
    input: String,
    valid: bool,
    formatted: String,
}

pub fn check_numbers(json: bool, args: CheckArgs) -> Result<()> {
    let results: Vec<CheckResult> = args
        .numbers
        .into_iter()
        .map(|input| CheckResult {
            valid: is_valid_phone_number(&input),
            formatted: format_phone_number(&input),
            input,
        })
        .collect();

    if json {
        return print_json(&results);
    }

    for result in results {
        if result.valid {
            println!("{} -> {}", result.input, result.formatted);
        } else {
            println!("{} -> invalid", result.input);
        }
    }
    Ok(())
}
