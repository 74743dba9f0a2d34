//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments and resolves configuration
//! - sets up logging
//! - runs the extraction pipeline
//! - renders and writes the report (plus the optional JSON export)

use chrono::Utc;
use clap::Parser;

use crate::cli::Cli;
use crate::domain::{ReportConfig, TargetCurrencies};
use crate::error::AppError;

pub mod pipeline;

/// Environment variable holding the default target currency list.
pub const CURRENCIES_ENV: &str = "FXREF_CURRENCIES";

/// Entry point for the `fxref` binary.
pub fn run() -> Result<(), AppError> {
    let cli = Cli::parse();

    // A missing .env is fine; real environment variables still apply.
    dotenvy::dotenv().ok();
    init_logging(&cli);

    let config = report_config_from_args(&cli, std::env::var(CURRENCIES_ENV).ok().as_deref())?;

    log::info!("Starting exchange rate ETL pipeline");
    let result = generate_report(&config);
    match &result {
        Ok(()) => log::info!("ETL pipeline completed successfully"),
        Err(_) => log::error!("ETL pipeline failed"),
    }
    result
}

/// Run the pipeline and write every requested output.
pub fn generate_report(config: &ReportConfig) -> Result<(), AppError> {
    let run = pipeline::run_pipeline(config)?;
    let generated_at = Utc::now();

    let html = crate::report::render_html(&run.rows, generated_at);
    log::debug!("Rendered HTML report ({} rows)", run.rows.len());

    let size = crate::io::write_html_report(&config.output_html, &html)?;
    log::info!(
        "Report saved to {} ({size} bytes)",
        crate::io::display_path(&config.output_html).display()
    );

    if let Some(path) = &config.export_json {
        crate::io::write_summary_json(path, &run.rows, config, generated_at)?;
        log::info!("Summary JSON written to {}", path.display());
    }

    println!("{}", crate::report::format_summary(&run.rows));
    Ok(())
}

/// Resolve CLI arguments (and the env fallback for currencies) into a config.
pub fn report_config_from_args(cli: &Cli, env_currencies: Option<&str>) -> Result<ReportConfig, AppError> {
    let currencies = match cli.currencies.as_deref().or(env_currencies) {
        Some(list) => TargetCurrencies::parse_list(list).map_err(AppError::failure)?,
        None => TargetCurrencies::default(),
    };

    Ok(ReportConfig {
        daily_csv: cli.daily.clone(),
        historical_csv: cli.historical.clone(),
        output_html: cli.output.clone(),
        export_json: cli.export_json.clone(),
        currencies,
    })
}

fn init_logging(cli: &Cli) {
    let level = if cli.quiet {
        "warn"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };
    // RUST_LOG still wins when set.
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_beats_env_for_currencies() {
        let cli = Cli::parse_from(["fxref", "--currencies", "chf,usd"]);
        let config = report_config_from_args(&cli, Some("JPY")).unwrap();
        let codes: Vec<String> = config.currencies.iter().map(|c| c.to_string()).collect();
        assert_eq!(codes, vec!["CHF", "USD"]);
    }

    #[test]
    fn env_then_default() {
        let cli = Cli::parse_from(["fxref"]);
        let config = report_config_from_args(&cli, Some("JPY")).unwrap();
        assert_eq!(config.currencies.len(), 1);

        let config = report_config_from_args(&cli, None).unwrap();
        assert_eq!(config.currencies, TargetCurrencies::default());
    }

    #[test]
    fn bad_currency_list_is_an_error() {
        let cli = Cli::parse_from(["fxref", "--currencies", "DOLLARS"]);
        let err = report_config_from_args(&cli, None).unwrap_err();
        assert_eq!(err.exit_code(), 1);
    }
}
