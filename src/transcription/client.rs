//! HTTP client for the remote transcription endpoint.
//!
//! One multipart POST per submission, no automatic retries. Error bodies are
//! mined for a human-readable `detail` field before falling back to the
//! transport status text.

use crate::error::{AppError, Result};
use crate::transcription::result::TranscriptionResult;
use std::time::Duration;
use tracing::{debug, info};

/// Development endpoint used by debug builds.
const DEV_ENDPOINT: &str = "http://localhost:8000/transcribe";
/// Production endpoint used by release builds.
const PROD_ENDPOINT: &str = "https://transcriba-api.hf.space/transcribe";

/// One audio payload headed for the transcription service. Ephemeral: built
/// from a user file selection, consumed by a single network call.
#[derive(Debug)]
pub struct UploadRequest {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub api_token: Option<String>,
}

impl UploadRequest {
    pub fn new(file_name: String, bytes: Vec<u8>, api_token: Option<String>) -> Result<Self> {
        if bytes.is_empty() {
            return Err(AppError::InvalidInput(format!(
                "File is empty: {}",
                file_name
            )));
        }
        Ok(Self {
            file_name,
            bytes,
            api_token,
        })
    }
}

pub struct TranscriberClient {
    client: reqwest::Client,
    endpoint: String,
}

impl TranscriberClient {
    pub fn new() -> Self {
        Self::with_endpoint(resolve_endpoint())
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(600))
            .build()
            .expect("failed to build HTTP client");

        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    /// Submit one file and wait for the service's verdict.
    pub async fn transcribe(&self, upload: UploadRequest) -> Result<TranscriptionResult> {
        info!(
            "Submitting {} ({} bytes) to {}",
            upload.file_name,
            upload.bytes.len(),
            self.endpoint
        );

        let part = reqwest::multipart::Part::bytes(upload.bytes)
            .file_name(upload.file_name.clone())
            .mime_str("application/octet-stream")?;

        let mut form = reqwest::multipart::Form::new().part("file", part);
        if let Some(token) = upload.api_token {
            form = form.text("hf_token", token);
        }

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Transcription(error_message(status, &body)));
        }

        let result: TranscriptionResult = response.json().await?;
        debug!(
            "Transcription received: {} chars, {} segments",
            result.transcription.len(),
            result.segments.len()
        );
        Ok(result)
    }
}

/// Static environment dispatch: debug builds talk to a local backend, release
/// builds to the hosted one. Deliberately not user-configurable.
fn resolve_endpoint() -> &'static str {
    if cfg!(debug_assertions) {
        DEV_ENDPOINT
    } else {
        PROD_ENDPOINT
    }
}

/// Extract the message shown for a failed submission: the JSON `detail` field
/// when the body parses, otherwise the HTTP status text.
fn error_message(status: reqwest::StatusCode, body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("detail").and_then(|d| d.as_str()).map(String::from))
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Request failed")
                .to_string()
        })
}
