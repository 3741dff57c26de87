use journey_shared::JourneyError;
use thiserror::Error;

/// Reasons the fetch-all call can fail on the client side.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Server responded {status}: {message}")]
    Status { status: u16, message: String },

    #[error(transparent)]
    Journey(#[from] JourneyError),
}
