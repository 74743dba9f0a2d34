//! Input/output helpers.
//!
//! - CSV ingest into an in-memory table (`ingest`)
//! - HTML report and JSON summary writers (`export`)

pub mod export;
pub mod ingest;

pub use export::*;
pub use ingest::*;
