//! Shared domain types.
//!
//! Everything here is built once per run and read-only afterwards:
//!
//! - the ordered target currency set (configuration, never discovered from input)
//! - raw CSV cells and validated rates
//! - the daily / historical / mean outputs handed to the report

use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::Serialize;

/// A three-letter currency code such as `USD`.
///
/// Identity is exact string match against CSV headers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for CurrencyCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.len() != 3 || !s.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(format!("Invalid currency code '{s}': expected three ASCII letters."));
        }
        Ok(Self(s.to_ascii_uppercase()))
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The fixed, ordered set of currencies a run reports on.
///
/// Order matters: extractors walk currencies in this order and report rows
/// follow it regardless of map iteration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetCurrencies(Vec<CurrencyCode>);

impl TargetCurrencies {
    pub const DEFAULT_CODES: [&'static str; 4] = ["USD", "SEK", "GBP", "JPY"];

    /// Build from codes, dropping later duplicates.
    pub fn new(codes: impl IntoIterator<Item = CurrencyCode>) -> Result<Self, String> {
        let mut out: Vec<CurrencyCode> = Vec::new();
        for code in codes {
            if !out.contains(&code) {
                out.push(code);
            }
        }
        if out.is_empty() {
            return Err("At least one target currency is required.".to_string());
        }
        Ok(Self(out))
    }

    /// Parse a comma separated list such as `USD, sek,GBP`.
    pub fn parse_list(list: &str) -> Result<Self, String> {
        let codes = list
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(CurrencyCode::from_str)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(codes)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CurrencyCode> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for TargetCurrencies {
    fn default() -> Self {
        Self(
            Self::DEFAULT_CODES
                .iter()
                .map(|c| CurrencyCode((*c).to_string()))
                .collect(),
        )
    }
}

impl<'a> IntoIterator for &'a TargetCurrencies {
    type Item = &'a CurrencyCode;
    type IntoIter = std::slice::Iter<'a, CurrencyCode>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// An untyped value read from a CSV cell.
#[derive(Debug, Clone, PartialEq)]
pub enum RawCell {
    Empty,
    Numeric(f64),
    Text(String),
}

impl RawCell {
    /// Classify a single field. Surrounding whitespace is ignored.
    pub fn parse(field: &str) -> Self {
        let field = field.trim();
        if field.is_empty() {
            return RawCell::Empty;
        }
        match field.parse::<f64>() {
            Ok(v) => RawCell::Numeric(v),
            Err(_) => RawCell::Text(field.to_string()),
        }
    }
}

/// A validated exchange rate: finite and strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Rate(f64);

impl Rate {
    pub fn new(value: f64) -> Option<Self> {
        (value.is_finite() && value > 0.0).then_some(Self(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

/// Latest rate per currency from the daily feed.
///
/// Values are plain `f64` because a non-positive daily value is kept (with a
/// warning) rather than dropped.
pub type DailyRateMap = HashMap<CurrencyCode, f64>;

/// Arithmetic mean of the historical rates per currency.
pub type MeanRateMap = HashMap<CurrencyCode, f64>;

/// One `(date, currency, rate)` point from the historical feed.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoricalObservation {
    pub date: String,
    pub currency: CurrencyCode,
    pub rate: Rate,
}

/// Resolved settings for a single run.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub daily_csv: PathBuf,
    pub historical_csv: PathBuf,
    pub output_html: PathBuf,
    pub export_json: Option<PathBuf>,
    pub currencies: TargetCurrencies,
}
