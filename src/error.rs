//! Errors raised while scanning light frames and writing reports.
//!
//! Every variant that concerns a file carries its path so a failed run
//! points straight at the offending frame.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CaptureError {
    #[error("Lights directory not found: {path}")]
    LightsDirNotFound { path: PathBuf },

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Truncated FITS header in {path}: no END card")]
    TruncatedHeader { path: PathBuf },

    #[error("FITS header in {path} exceeds {blocks} blocks without an END card")]
    OversizedHeader { path: PathBuf, blocks: usize },

    #[error("Missing {keyword} header in {path}")]
    MissingKeyword { path: PathBuf, keyword: String },

    #[error("Invalid {keyword} value '{value}' in {path}: {reason}")]
    InvalidValue {
        path: PathBuf,
        keyword: String,
        value: String,
        reason: String,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CaptureError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CaptureError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn invalid(
        path: impl Into<PathBuf>,
        keyword: &str,
        value: &str,
        reason: impl Into<String>,
    ) -> Self {
        CaptureError::InvalidValue {
            path: path.into(),
            keyword: keyword.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CaptureError>;
