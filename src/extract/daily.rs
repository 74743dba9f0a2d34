//! Daily feed: one header row plus the day's values.

use std::path::Path;

use crate::domain::{DailyRateMap, TargetCurrencies};
use crate::error::PipelineError;
use crate::extract::{ExtractWarning, Rejection, join_codes, validate_cell};
use crate::io::ingest::{Table, load_table};

/// Daily extractor output: the rate map plus what went wrong along the way.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyExtract {
    pub rates: DailyRateMap,
    pub warnings: Vec<ExtractWarning>,
}

/// Read the daily CSV at `path` and extract one rate per target currency.
pub fn extract_daily_rates(path: &Path, targets: &TargetCurrencies) -> Result<DailyExtract, PipelineError> {
    let table = load_table(path, "Daily rates file")?;
    daily_rates_from_table(&table, targets)
}

/// Extract daily rates from an already parsed table. Only the first row is used.
pub fn daily_rates_from_table(table: &Table, targets: &TargetCurrencies) -> Result<DailyExtract, PipelineError> {
    if table.is_empty() {
        return Err(PipelineError::malformed("CSV file is empty - no data rows found"));
    }

    let mut rates = DailyRateMap::new();
    let mut warnings = Vec::new();
    let mut missing = Vec::new();
    let mut unusable = Vec::new();

    for currency in targets {
        let cell = table.column(currency.as_str()).map(|col| table.cell(0, col));
        match validate_cell(cell.as_ref()) {
            Ok(rate) => {
                rates.insert(currency.clone(), rate.value());
            }
            Err(Rejection::NonPositive(value)) => {
                // Kept on purpose: the daily feed warns but does not drop.
                warnings.push(ExtractWarning::NonPositiveRate {
                    currency: currency.clone(),
                    value,
                });
                rates.insert(currency.clone(), value);
            }
            Err(Rejection::MissingColumn) => missing.push(currency.clone()),
            Err(Rejection::NullOrBlank) => unusable.push(currency.clone()),
            Err(Rejection::NotANumber(raw)) => {
                warnings.push(ExtractWarning::InvalidValue {
                    currency: currency.clone(),
                    raw,
                });
                unusable.push(currency.clone());
            }
        }
    }

    if rates.is_empty() {
        return Err(PipelineError::NoUsableData(format!(
            "No valid rates found for any target currencies. Missing: [{}], Invalid: [{}]",
            join_codes(&missing),
            join_codes(&unusable)
        )));
    }

    if !missing.is_empty() {
        warnings.push(ExtractWarning::MissingColumns(missing));
    }
    if !unusable.is_empty() {
        warnings.push(ExtractWarning::UnusableValues(unusable));
    }

    Ok(DailyExtract { rates, warnings })
}
