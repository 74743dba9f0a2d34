//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the target currency set (`CurrencyCode`, `TargetCurrencies`)
//! - raw and validated values (`RawCell`, `Rate`)
//! - stage outputs (`DailyRateMap`, `HistoricalObservation`, `MeanRateMap`)

pub mod types;

pub use types::*;
