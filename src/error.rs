use std::path::PathBuf;

use thiserror::Error;

/// Exit code used for every failed run.
pub const EXIT_FAILURE: u8 = 1;

/// Coarse classification of a [`PipelineError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    MalformedInput,
    NoUsableData,
    InvalidInput,
}

/// Fatal failures raised by the extraction and aggregation stages.
///
/// Per-currency and per-row problems never show up here; they are returned
/// as warnings next to the stage output.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("{what} not found: {}", display_paths(.paths))]
    NotFound {
        what: String,
        paths: Vec<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    #[error("{message}")]
    MalformedInput {
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    #[error("{0}")]
    NoUsableData(String),

    #[error("{0}")]
    InvalidInput(String),
}

impl PipelineError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PipelineError::NotFound { .. } => ErrorKind::NotFound,
            PipelineError::MalformedInput { .. } => ErrorKind::MalformedInput,
            PipelineError::NoUsableData(_) => ErrorKind::NoUsableData,
            PipelineError::InvalidInput(_) => ErrorKind::InvalidInput,
        }
    }

    pub(crate) fn malformed(message: impl Into<String>) -> Self {
        PipelineError::MalformedInput {
            message: message.into(),
            source: None,
        }
    }
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(EXIT_FAILURE, message)
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl From<PipelineError> for AppError {
    fn from(err: PipelineError) -> Self {
        AppError::failure(format!("ETL pipeline failed: {err}"))
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
