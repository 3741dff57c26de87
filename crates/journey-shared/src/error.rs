use std::path::PathBuf;

use thiserror::Error;

/// Failure conditions of the fetch-all operation.
///
/// Both are surfaced at the data boundary; the derivations themselves
/// never fail.
#[derive(Error, Debug)]
pub enum JourneyError {
    #[error("Journey data unavailable: {} not found", .path.display())]
    DataUnavailable { path: PathBuf },

    #[error("Journey data corrupt: {0}")]
    DataCorrupt(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, JourneyError>;
