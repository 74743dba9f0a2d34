//! Turning loosely structured CSV tables into validated rate data.
//!
//! - single-cell classification (`validate`)
//! - the one-row daily feed (`daily`)
//! - the multi-row historical feed (`historical`)
//!
//! Nothing in here logs. Non-fatal problems come back as [`ExtractWarning`]s
//! and it is up to the caller to surface them.

use std::fmt;

use crate::domain::CurrencyCode;

pub mod daily;
pub mod historical;
pub mod validate;

pub use daily::*;
pub use historical::*;
pub use validate::*;

/// A non-fatal problem found while extracting rates.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtractWarning {
    /// Target currencies with no column in the source.
    MissingColumns(Vec<CurrencyCode>),
    /// A daily value that parsed but is `<= 0`. It is still kept.
    NonPositiveRate { currency: CurrencyCode, value: f64 },
    /// A daily value that is present but not a number.
    InvalidValue { currency: CurrencyCode, raw: String },
    /// Daily currencies skipped because their value was blank or unparsable.
    UnusableValues(Vec<CurrencyCode>),
}

impl fmt::Display for ExtractWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractWarning::MissingColumns(codes) => {
                write!(f, "Missing columns in CSV: {}", join_codes(codes))
            }
            ExtractWarning::NonPositiveRate { currency, value } => {
                write!(f, "{currency} has non-positive rate: {value}")
            }
            ExtractWarning::InvalidValue { currency, raw } => {
                write!(f, "Invalid rate value for {currency}: {raw}")
            }
            ExtractWarning::UnusableValues(codes) => {
                write!(f, "Invalid/missing values for: {}", join_codes(codes))
            }
        }
    }
}

pub(crate) fn join_codes(codes: &[CurrencyCode]) -> String {
    codes.iter().map(CurrencyCode::as_str).collect::<Vec<_>>().join(", ")
}
