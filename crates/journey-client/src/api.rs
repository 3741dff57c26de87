//! HTTP client for the journey server.

use std::time::Duration;

use journey_shared::constants::JOURNEY_ROUTE;
use journey_shared::JourneyDocument;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::error::ClientError;

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ClientError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn journey_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), JOURNEY_ROUTE)
    }

    /// Fetch-all: the complete journey document.
    pub async fn fetch_journey(&self) -> Result<JourneyDocument, ClientError> {
        let url = self.journey_url();
        debug!(url = %url, "Fetching journey");

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .map(|body| body.message)
                .unwrap_or_else(|_| {
                    status
                        .canonical_reason()
                        .unwrap_or("Network response was not ok")
                        .to_string()
                });
            return Err(ClientError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let bytes = response.bytes().await?;
        let document = JourneyDocument::from_slice(&bytes)?;

        debug!(days = document.journey.len(), "Journey fetched");
        Ok(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use journey_shared::JourneyError;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve a single canned HTTP response and return the base URL.
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await.unwrap();
            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
        });

        format!("http://{addr}")
    }

    fn client(base_url: String) -> ApiClient {
        ApiClient::new(base_url, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_journey_url_trims_slash() {
        let api = client("http://localhost:3001/".into());
        assert_eq!(api.journey_url(), "http://localhost:3001/api/journey");
    }

    #[tokio::test]
    async fn test_fetch_journey_ok() {
        let url = serve_once(
            "200 OK",
            r#"{"journey":[{"date":"2025-08-01","dayOfWeek":"Friday","month":"August","summary":"Kickoff"}]}"#,
        )
        .await;

        let doc = client(url).fetch_journey().await.unwrap();
        assert_eq!(doc.journey.len(), 1);
        assert_eq!(doc.journey[0].month, "August");
    }

    #[tokio::test]
    async fn test_fetch_journey_not_found() {
        let url = serve_once(
            "404 Not Found",
            r#"{"message":"journeyData.json not found. Please run the generation script first."}"#,
        )
        .await;

        let err = client(url).fetch_journey().await.unwrap_err();
        match err {
            ClientError::Status { status, message } => {
                assert_eq!(status, 404);
                assert!(message.starts_with("journeyData.json not found"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_journey_bad_body() {
        let url = serve_once("200 OK", r#"{"journey": 7}"#).await;

        let err = client(url).fetch_journey().await.unwrap_err();
        assert!(matches!(
            err,
            ClientError::Journey(JourneyError::DataCorrupt(_))
        ));
    }
}
