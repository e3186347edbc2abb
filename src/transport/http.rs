//! HTTP Record Transport
//!
//! `reqwest` client for the records backend REST API.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::time::Duration;

use super::{RecordTransport, TransportError, TransportResult};
use crate::record::{Draft, RecordId, StudentRecord};

/// Default backend base URL
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Configuration for the HTTP transport
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Base URL every path is appended to (e.g., "http://localhost:8080")
    pub base_url: String,
    /// Per-request timeout; `None` leaves requests unbounded
    pub request_timeout: Option<Duration>,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: None,
        }
    }
}

impl TransportConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }
}

/// Records backend client over HTTP/JSON
pub struct HttpTransport {
    client: Client,
    config: TransportConfig,
}

impl HttpTransport {
    /// Create a new transport with the given configuration
    pub fn new(mut config: TransportConfig) -> TransportResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        // Normalize: remove trailing slash
        config.base_url = config.base_url.trim_end_matches('/').to_string();

        Ok(Self { client, config })
    }

    /// Get the current configuration
    pub fn config(&self) -> &TransportConfig {
        &self.config
    }

    fn collection_url(&self) -> String {
        format!("{}/students", self.config.base_url)
    }

    fn create_url(&self) -> String {
        format!("{}/student", self.config.base_url)
    }

    fn record_url(&self, id: &RecordId) -> String {
        format!(
            "{}/student/{}",
            self.config.base_url,
            urlencoding::encode(&id.to_string())
        )
    }

    /// Send a request and turn non-success statuses into errors
    async fn send(&self, request: RequestBuilder, method: &str, url: &str) -> TransportResult<Response> {
        let request_id = uuid::Uuid::new_v4();
        tracing::debug!(request_id = %request_id, method, url, "Sending request");

        let response = request
            .send()
            .await
            .map_err(|e| TransportError::from_send(e, &self.config.base_url))?;

        let status = response.status();
        tracing::debug!(request_id = %request_id, status = status.as_u16(), "Received response");

        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        let message = backend_message(&text);

        if status == StatusCode::NOT_FOUND {
            Err(TransportError::NotFound(if message.is_empty() {
                url.to_string()
            } else {
                message
            }))
        } else {
            Err(TransportError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> TransportResult<T> {
        response
            .json()
            .await
            .map_err(|e| TransportError::Decode(e.to_string()))
    }
}

/// Extract the human-readable part of a backend error body
///
/// The backend reports failures as a single-entry JSON object such as
/// `{"Error occurred": "Student with id 3 wasn't found"}`.
fn backend_message(body: &str) -> String {
    match serde_json::from_str::<HashMap<String, String>>(body) {
        Ok(map) if map.len() == 1 => map.into_values().next().unwrap_or_default(),
        _ => body.trim().to_string(),
    }
}

#[async_trait]
impl RecordTransport for HttpTransport {
    async fn list(&self) -> TransportResult<Vec<StudentRecord>> {
        let url = self.collection_url();
        let response = self.send(self.client.get(&url), "GET", &url).await?;
        Self::decode(response).await
    }

    async fn get(&self, id: &RecordId) -> TransportResult<StudentRecord> {
        let url = self.record_url(id);
        let response = self.send(self.client.get(&url), "GET", &url).await?;
        Self::decode(response).await
    }

    async fn create(&self, draft: &Draft) -> TransportResult<StudentRecord> {
        let url = self.create_url();
        let response = self
            .send(self.client.post(&url).json(draft), "POST", &url)
            .await?;
        Self::decode(response).await
    }

    async fn update(&self, id: &RecordId, draft: &Draft) -> TransportResult<StudentRecord> {
        let url = self.record_url(id);
        let response = self
            .send(self.client.put(&url).json(draft), "PUT", &url)
            .await?;
        Self::decode(response).await
    }

    async fn delete(&self, id: &RecordId) -> TransportResult<()> {
        let url = self.record_url(id);
        // Body is a plain-text confirmation; nothing to decode
        self.send(self.client.delete(&url), "DELETE", &url).await?;
        Ok(())
    }
}
