//! Summary statistics over historical observations.

pub mod mean;

pub use mean::*;
