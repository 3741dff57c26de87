use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use journey_shared::{JourneyDocument, JourneyError};
use tokio::fs;
use tracing::debug;

/// Read-only access to the journey fixture on disk.
///
/// The file is read on every call, so a regenerated fixture is served
/// without restarting the server.
#[derive(Debug, Clone)]
pub struct JourneyFixture {
    path: PathBuf,
}

impl JourneyFixture {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Fetch-all: the whole document, or `DataUnavailable` / `DataCorrupt`.
    pub async fn load(&self) -> Result<JourneyDocument, JourneyError> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(JourneyError::DataUnavailable {
                    path: self.path.clone(),
                });
            }
            Err(e) => return Err(JourneyError::Io(e)),
        };

        let document = JourneyDocument::from_slice(&bytes)?;

        debug!(
            path = %self.path.display(),
            days = document.journey.len(),
            "Loaded journey fixture"
        );
        Ok(document)
    }
}
