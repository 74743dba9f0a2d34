//! Command-line parsing for the exchange rate report.
//!
//! Only argument parsing lives here; turning arguments into a `ReportConfig`
//! happens in `app`.

use std::path::PathBuf;

use clap::Parser;

/// Top-level CLI.
#[derive(Debug, Parser, Clone)]
#[command(
    name = "fxref",
    version,
    about = "Build an HTML exchange rate report from ECB daily and historical CSV files"
)]
pub struct Cli {
    /// Daily rates CSV (header row plus one row of values).
    #[arg(long, value_name = "CSV", default_value = "eurofxref.csv")]
    pub daily: PathBuf,

    /// Historical rates CSV (a `Date` column plus one column per currency).
    #[arg(long, value_name = "CSV", default_value = "eurofxref-hist.csv")]
    pub historical: PathBuf,

    /// Where to write the HTML report.
    #[arg(short, long, value_name = "HTML", default_value = "exchange_rates.html")]
    pub output: PathBuf,

    /// Comma separated target currencies, in report order.
    ///
    /// Falls back to `FXREF_CURRENCIES`, then to USD,SEK,GBP,JPY.
    #[arg(long, value_name = "CODES")]
    pub currencies: Option<String>,

    /// Also export the report rows as JSON.
    #[arg(long = "export-json", value_name = "JSON")]
    pub export_json: Option<PathBuf>,

    /// Log debug output.
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log warnings and errors.
    #[arg(short, long)]
    pub quiet: bool,
}
