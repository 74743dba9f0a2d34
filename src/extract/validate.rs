//! Single-cell rate validation.

use std::fmt;

use crate::domain::{RawCell, Rate};

/// Literal cell values that mean "no data".
pub const NA_SENTINELS: [&str; 8] = ["N/A", "NA", "#N/A", "NaN", "nan", "null", "NULL", "None"];

/// Why a cell did not yield a [`Rate`].
#[derive(Debug, Clone, PartialEq)]
pub enum Rejection {
    /// The source has no column for this currency at all.
    MissingColumn,
    /// Column present, value empty, null or a "not available" sentinel.
    NullOrBlank,
    /// Column present, value non-blank but not a usable number.
    NotANumber(String),
    /// Parsed to a number `<= 0`. Carries the value so callers can choose to keep it.
    NonPositive(f64),
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::MissingColumn => f.write_str("missing column"),
            Rejection::NullOrBlank => f.write_str("null or blank"),
            Rejection::NotANumber(raw) => write!(f, "not a number: {raw}"),
            Rejection::NonPositive(v) => write!(f, "non-positive: {v}"),
        }
    }
}

/// Classify one cell. `None` means the column does not exist.
pub fn validate_cell(cell: Option<&RawCell>) -> Result<Rate, Rejection> {
    let cell = cell.ok_or(Rejection::MissingColumn)?;
    let value = match cell {
        RawCell::Empty => return Err(Rejection::NullOrBlank),
        RawCell::Text(s) if is_na_sentinel(s) => return Err(Rejection::NullOrBlank),
        RawCell::Text(s) => return Err(Rejection::NotANumber(s.clone())),
        RawCell::Numeric(v) => *v,
    };

    if value.is_nan() {
        return Err(Rejection::NullOrBlank);
    }
    if value.is_infinite() {
        return Err(Rejection::NotANumber(value.to_string()));
    }
    Rate::new(value).ok_or(Rejection::NonPositive(value))
}

fn is_na_sentinel(s: &str) -> bool {
    NA_SENTINELS.contains(&s.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_positive_numbers() {
        let rate = validate_cell(Some(&RawCell::Numeric(1.085))).unwrap();
        assert!((rate.value() - 1.085).abs() < 1e-12);
    }

    #[test]
    fn missing_column_is_distinct_from_blank() {
        assert_eq!(validate_cell(None), Err(Rejection::MissingColumn));
        assert_eq!(validate_cell(Some(&RawCell::Empty)), Err(Rejection::NullOrBlank));
    }

    #[test]
    fn sentinels_and_nan_are_null() {
        for s in ["N/A", "NaN", "null"] {
            assert_eq!(validate_cell(Some(&RawCell::parse(s))), Err(Rejection::NullOrBlank), "{s}");
        }
    }

    #[test]
    fn text_is_not_a_number() {
        assert_eq!(
            validate_cell(Some(&RawCell::parse("abc"))),
            Err(Rejection::NotANumber("abc".to_string()))
        );
        assert!(matches!(
            validate_cell(Some(&RawCell::parse("inf"))),
            Err(Rejection::NotANumber(_))
        ));
    }

    #[test]
    fn non_positive_carries_value() {
        assert_eq!(validate_cell(Some(&RawCell::Numeric(-0.5))), Err(Rejection::NonPositive(-0.5)));
        assert_eq!(validate_cell(Some(&RawCell::Numeric(0.0))), Err(Rejection::NonPositive(0.0)));
    }
}
