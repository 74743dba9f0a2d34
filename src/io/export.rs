//! Write the HTML report and the optional JSON summary.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::ReportConfig;
use crate::error::AppError;
use crate::report::ReportRow;

/// Write the rendered report and return the resulting file size in bytes.
pub fn write_html_report(path: &Path, html: &str) -> Result<u64, AppError> {
    if html.trim().is_empty() {
        return Err(AppError::failure("Cannot save empty HTML content"));
    }

    ensure_parent_dir(path)?;
    fs::write(path, html).map_err(|e| {
        AppError::failure(format!("Failed to write HTML report '{}': {e}", path.display()))
    })?;

    let meta = fs::metadata(path).map_err(|e| {
        AppError::failure(format!("Report file was not created '{}': {e}", path.display()))
    })?;
    Ok(meta.len())
}

/// Portable JSON view of one run.
#[derive(Debug, Serialize)]
pub struct SummaryFile<'a> {
    pub tool: &'static str,
    pub generated_at: DateTime<Utc>,
    pub daily_source: &'a Path,
    pub historical_source: &'a Path,
    pub rows: &'a [ReportRow],
}

/// Write the report rows as pretty JSON. Absent values serialize as `null`.
pub fn write_summary_json(
    path: &Path,
    rows: &[ReportRow],
    config: &ReportConfig,
    generated_at: DateTime<Utc>,
) -> Result<(), AppError> {
    ensure_parent_dir(path)?;
    let file = File::create(path)
        .map_err(|e| AppError::failure(format!("Failed to create summary JSON '{}': {e}", path.display())))?;

    let summary = SummaryFile {
        tool: "fxref",
        generated_at,
        daily_source: &config.daily_csv,
        historical_source: &config.historical_csv,
        rows,
    };

    serde_json::to_writer_pretty(file, &summary)
        .map_err(|e| AppError::failure(format!("Failed to write summary JSON: {e}")))?;

    Ok(())
}

/// Absolute form of `path` for log output; falls back to the input.
pub fn display_path(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

fn ensure_parent_dir(path: &Path) -> Result<(), AppError> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent).map_err(|e| {
            AppError::failure(format!("Failed to create directory '{}': {e}", parent.display()))
        }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TargetCurrencies;

    #[test]
    fn writes_report_into_new_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/out/report.html");

        let size = write_html_report(&path, "<html></html>\n").unwrap();
        assert_eq!(size, 14);
        assert_eq!(fs::read_to_string(&path).unwrap(), "<html></html>\n");
    }

    #[test]
    fn refuses_blank_content() {
        let dir = tempfile::tempdir().unwrap();
        let err = write_html_report(&dir.path().join("r.html"), "  \n").unwrap_err();
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn summary_json_uses_null_for_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summary.json");
        let config = ReportConfig {
            daily_csv: PathBuf::from("eurofxref.csv"),
            historical_csv: PathBuf::from("eurofxref-hist.csv"),
            output_html: PathBuf::from("exchange_rates.html"),
            export_json: Some(path.clone()),
            currencies: TargetCurrencies::default(),
        };
        let rows = vec![ReportRow {
            currency: "USD".parse().unwrap(),
            rate: Some(1.085),
            mean_historical_rate: None,
        }];

        write_summary_json(&path, &rows, &config, Utc::now()).unwrap();

        let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["tool"], "fxref");
        assert_eq!(value["rows"][0]["currency"], "USD");
        assert_eq!(value["rows"][0]["rate"], 1.085);
        assert!(value["rows"][0]["mean_historical_rate"].is_null());
    }
}
