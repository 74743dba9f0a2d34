//! Historical feed: a `Date` column plus one column per currency, one row per day.

use std::path::Path;

use crate::domain::{CurrencyCode, HistoricalObservation, TargetCurrencies};
use crate::error::PipelineError;
use crate::extract::{ExtractWarning, validate_cell};
use crate::io::ingest::{Table, load_table};

/// Exact, case-sensitive name of the required date column.
pub const DATE_COLUMN: &str = "Date";

/// Historical extractor output.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoricalExtract {
    /// Currency-major: every row for the first currency, then the next one.
    pub observations: Vec<HistoricalObservation>,
    /// Accepted record count per currency with a column, in target order.
    pub counts: Vec<(CurrencyCode, usize)>,
    pub warnings: Vec<ExtractWarning>,
}

/// Read the historical CSV at `path` and flatten it into observations.
pub fn extract_historical_rates(
    path: &Path,
    targets: &TargetCurrencies,
) -> Result<HistoricalExtract, PipelineError> {
    let table = load_table(path, "Historical rates file")?;
    historical_rates_from_table(&table, targets)
}

/// Flatten an already parsed historical table.
///
/// Blank, unparsable and non-positive cells are dropped row by row without a
/// warning; only the per-currency counts reflect them.
pub fn historical_rates_from_table(
    table: &Table,
    targets: &TargetCurrencies,
) -> Result<HistoricalExtract, PipelineError> {
    if table.is_empty() {
        return Err(PipelineError::malformed("CSV file is empty - no data rows found"));
    }

    let date_col = table
        .column(DATE_COLUMN)
        .ok_or_else(|| PipelineError::malformed(format!("CSV file missing required '{DATE_COLUMN}' column")))?;

    let mut observations = Vec::new();
    let mut counts = Vec::with_capacity(targets.len());
    let mut missing = Vec::new();

    for currency in targets {
        let Some(col) = table.column(currency.as_str()) else {
            missing.push(currency.clone());
            continue;
        };

        let mut accepted = 0usize;
        for row in 0..table.row_count() {
            let cell = table.cell(row, col);
            let Ok(rate) = validate_cell(Some(&cell)) else {
                continue;
            };
            observations.push(HistoricalObservation {
                date: table.text(row, date_col).to_string(),
                currency: currency.clone(),
                rate,
            });
            accepted += 1;
        }
        counts.push((currency.clone(), accepted));
    }

    if observations.is_empty() {
        let found = counts
            .iter()
            .map(|(c, n)| format!("{c}: {n}"))
            .collect::<Vec<_>>()
            .join(", ");
        return Err(PipelineError::NoUsableData(format!(
            "No valid historical rates found for any target currencies. Currencies found: {{{found}}}"
        )));
    }

    let warnings = if missing.is_empty() {
        Vec::new()
    } else {
        vec![ExtractWarning::MissingColumns(missing)]
    };

    Ok(HistoricalExtract {
        observations,
        counts,
        warnings,
    })
}
