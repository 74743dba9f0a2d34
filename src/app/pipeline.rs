//! The extraction pipeline shared by the CLI and the integration tests.
//!
//! daily extract -> historical extract -> means -> report rows
//!
//! The core stages return warnings instead of logging; this is where they
//! get surfaced through `log`.

use std::path::PathBuf;

use crate::domain::{CurrencyCode, MeanRateMap, ReportConfig};
use crate::error::PipelineError;
use crate::extract::{DailyExtract, ExtractWarning, HistoricalExtract};
use crate::report::ReportRow;

/// All computed outputs of a single run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub daily: DailyExtract,
    pub historical: HistoricalExtract,
    pub means: MeanRateMap,
    pub rows: Vec<ReportRow>,
}

/// Run extraction and aggregation. Nothing is written to disk.
pub fn run_pipeline(config: &ReportConfig) -> Result<RunOutput, PipelineError> {
    ensure_inputs_exist(config)?;

    log::info!("Reading daily rates from {}", config.daily_csv.display());
    let daily = crate::extract::extract_daily_rates(&config.daily_csv, &config.currencies)?;
    log_warnings(&daily.warnings);
    log::info!("Extracted {} daily rates", daily.rates.len());

    log::info!("Reading historical rates from {}", config.historical_csv.display());
    let historical = crate::extract::extract_historical_rates(&config.historical_csv, &config.currencies)?;
    log_warnings(&historical.warnings);
    for (currency, n) in &historical.counts {
        log::info!("  {currency}: {n} records");
    }
    log::info!("Extracted {} historical rate records", historical.observations.len());

    log::info!("Calculating mean historical rates");
    let means = crate::stats::compute_mean_rates(&historical.observations)?;
    let without_mean: Vec<&CurrencyCode> = config.currencies.iter().filter(|c| !means.contains_key(*c)).collect();
    if !without_mean.is_empty() {
        log::warn!("No historical data to calculate means for: {}", join(&without_mean));
    }
    for currency in &config.currencies {
        if let Some(mean) = means.get(currency) {
            log::info!("  {currency}: {mean:.4}");
        }
    }
    log::info!("Calculated means for {} currencies", means.len());

    let no_data: Vec<&CurrencyCode> = config
        .currencies
        .iter()
        .filter(|c| !daily.rates.contains_key(*c) && !means.contains_key(*c))
        .collect();
    if !no_data.is_empty() {
        log::warn!("No data found for currencies: {}", join(&no_data));
    }

    let rows = crate::report::build_rows(&config.currencies, &daily.rates, &means);

    Ok(RunOutput {
        daily,
        historical,
        means,
        rows,
    })
}

/// Fail early, naming every missing input rather than just the first.
fn ensure_inputs_exist(config: &ReportConfig) -> Result<(), PipelineError> {
    let missing: Vec<PathBuf> = [&config.daily_csv, &config.historical_csv]
        .into_iter()
        .filter(|p| !p.exists())
        .cloned()
        .collect();

    if missing.is_empty() {
        return Ok(());
    }
    Err(PipelineError::NotFound {
        what: "Required input files".to_string(),
        paths: missing,
        source: None,
    })
}

fn log_warnings(warnings: &[ExtractWarning]) {
    for w in warnings {
        log::warn!("{w}");
    }
}

fn join(codes: &[&CurrencyCode]) -> String {
    codes.iter().map(|c| c.as_str()).collect::<Vec<_>>().join(", ")
}
