//! Reporting: the per-currency table shared by the HTML, terminal and JSON outputs.

use serde::Serialize;

use crate::domain::{CurrencyCode, DailyRateMap, MeanRateMap, TargetCurrencies};

pub mod format;
pub mod html;

pub use format::*;
pub use html::*;

/// Placeholder for a value missing from its map.
pub const NOT_AVAILABLE: &str = "N/A";

/// One report row. `None` means the currency was absent from that map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub currency: CurrencyCode,
    pub rate: Option<f64>,
    pub mean_historical_rate: Option<f64>,
}

/// Build rows in configured currency order, not map order.
pub fn build_rows(targets: &TargetCurrencies, daily: &DailyRateMap, means: &MeanRateMap) -> Vec<ReportRow> {
    targets
        .iter()
        .map(|currency| ReportRow {
            currency: currency.clone(),
            rate: daily.get(currency).copied(),
            mean_historical_rate: means.get(currency).copied(),
        })
        .collect()
}

/// Format a value to four decimals, or [`NOT_AVAILABLE`].
pub fn fmt_rate(v: Option<f64>) -> String {
    match v {
        Some(v) => format!("{v:.4}"),
        None => NOT_AVAILABLE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_follow_target_order() {
        let targets = TargetCurrencies::default();
        let mut daily = DailyRateMap::new();
        daily.insert("JPY".parse().unwrap(), 157.3);
        daily.insert("USD".parse().unwrap(), 1.085);
        let mut means = MeanRateMap::new();
        means.insert("SEK".parse().unwrap(), 11.25);

        let rows = build_rows(&targets, &daily, &means);
        let codes: Vec<&str> = rows.iter().map(|r| r.currency.as_str()).collect();
        assert_eq!(codes, vec!["USD", "SEK", "GBP", "JPY"]);

        assert_eq!(rows[0].rate, Some(1.085));
        assert_eq!(rows[0].mean_historical_rate, None);
        assert_eq!(rows[1].rate, None);
        assert_eq!(rows[1].mean_historical_rate, Some(11.25));
        assert_eq!(rows[2], ReportRow {
            currency: "GBP".parse().unwrap(),
            rate: None,
            mean_historical_rate: None,
        });
    }

    #[test]
    fn fmt_rate_uses_four_decimals() {
        assert_eq!(fmt_rate(Some(1.085)), "1.0850");
        assert_eq!(fmt_rate(Some(-0.5)), "-0.5000");
        assert_eq!(fmt_rate(Some(0.0)), "0.0000");
        assert_eq!(fmt_rate(None), "N/A");
    }
}
