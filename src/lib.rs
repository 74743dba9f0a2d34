//! `fxref-report` library crate.
//!
//! The binary (`fxref`) is a thin wrapper around this library so that:
//!
//! - the extraction core is testable without spawning processes
//! - warnings come back as values instead of console output
//! - rendering and file I/O stay at the edges

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod extract;
pub mod io;
pub mod report;
pub mod stats;
