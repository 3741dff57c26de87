use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use journey_shared::constants::FIXTURE_FILE_NAME;
use journey_shared::JourneyError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Journey(#[from] JourneyError),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ServerError::Journey(JourneyError::DataUnavailable { .. }) => (
                StatusCode::NOT_FOUND,
                serde_json::json!({
                    "message": format!(
                        "{FIXTURE_FILE_NAME} not found. Please run the generation script first."
                    ),
                }),
            ),
            ServerError::Journey(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                serde_json::json!({
                    "message": "Error reading journey data",
                    "error": e.to_string(),
                }),
            ),
        };

        (status, axum::Json(body)).into_response()
    }
}
