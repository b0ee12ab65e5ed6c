use crate::source::{RawRecord, SourceBatch};
use scamsweep_core::{
    classify_scam_type, format_phone_number, is_valid_phone_number, CleanRow, LockerStyle,
    ScamCategory,
};
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryCount {
    pub category: ScamCategory,
    pub description: &'static str,
    pub count: usize,
    pub percentage: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CleanReport {
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
    pub skipped: usize,
    pub categories: Vec<CategoryCount>,
}

#[derive(Debug, Clone, Default)]
pub struct CleanOutcome {
    pub rows: Vec<CleanRow>,
    pub report: CleanReport,
}

/// Drops records whose number fails validation, canonicalizes the rest and
/// tags each with its category.
pub fn clean_records(records: Vec<RawRecord>, style: LockerStyle) -> CleanOutcome {
    let mut rows = Vec::with_capacity(records.len());
    let mut counts: HashMap<ScamCategory, usize> = HashMap::new();
    let mut report = CleanReport {
        total: records.len(),
        ..CleanReport::default()
    };

    for record in records {
        if !is_valid_phone_number(&record.number) {
            report.invalid += 1;
            continue;
        }
        report.valid += 1;

        let number = format_phone_number(&record.number);
        let category = classify_scam_type(&record.label);
        *counts.entry(category).or_default() += 1;
        rows.push(CleanRow::new(number, record.label, category, style));
    }

    report.categories = category_counts(&counts, report.valid);
    CleanOutcome { rows, report }
}

pub fn clean_batch(batch: SourceBatch, style: LockerStyle) -> CleanOutcome {
    let skipped = batch.skipped;
    let mut outcome = clean_records(batch.records, style);
    outcome.report.skipped = skipped;
    outcome.report.total += skipped;
    outcome
}

fn category_counts(counts: &HashMap<ScamCategory, usize>, valid: usize) -> Vec<CategoryCount> {
    // ALL order breaks ties; sort_by is stable.
    let mut out: Vec<CategoryCount> = ScamCategory::ALL
        .into_iter()
        .filter_map(|category| {
            let count = *counts.get(&category)?;
            Some(CategoryCount {
                category,
                description: category.description(),
                count,
                percentage: percentage(count, valid),
            })
        })
        .collect();
    out.sort_by(|a, b| b.count.cmp(&a.count));
    out
}

fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let raw = count as f64 * 100.0 / total as f64;
    (raw * 10.0).round() / 10.0
}
