use reqwest::multipart;
use tracing::debug;

use crate::error::AppError;
use crate::models::extraction::{ExtractionResponse, HealthStatus};
use crate::models::staged_file::StagedFile;

pub const EXTRACT_PATH: &str = "/api/extract";
pub const HEALTH_PATH: &str = "/api/health";

/// Client for the extraction server.
///
/// One submission at a time; the single-flight guard lives in
/// `UploadWorkflow`, not here. No request timeout is configured beyond
/// the transport default.
#[derive(Debug, Clone)]
pub struct ExtractionClient {
    base_url: String,
    client: reqwest::Client,
}

impl ExtractionClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn set_base_url(&mut self, base_url: impl Into<String>) {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
    }

    /// POST the staged image as `multipart/form-data` under the `file`
    /// field and parse the JSON envelope.
    ///
    /// The HTTP status is not consulted: the server ships its envelope on
    /// 400/500 responses too, and `success` is authoritative.
    pub async fn extract(&self, file: &StagedFile) -> Result<ExtractionResponse, AppError> {
        let part = multipart::Part::bytes(file.bytes.clone())
            .file_name(file.file_name.clone())
            .mime_str(&file.mime_type)?;
        let form = multipart::Form::new().part("file", part);

        debug!(
            url = %format!("{}{EXTRACT_PATH}", self.base_url),
            size = file.size_bytes,
            "submitting image for extraction"
        );

        let response = self
            .client
            .post(format!("{}{EXTRACT_PATH}", self.base_url))
            .multipart(form)
            .send()
            .await?;

        let body = response.bytes().await?;
        parse_extraction_response(&body)
    }

    pub async fn health(&self) -> Result<HealthStatus, AppError> {
        let response = self
            .client
            .get(format!("{}{HEALTH_PATH}", self.base_url))
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json::<HealthStatus>().await?)
    }
}

/// Decode the response body, failing closed on anything that does not
/// match the envelope shape (non-JSON, missing `success`, wrong types).
pub fn parse_extraction_response(body: &[u8]) -> Result<ExtractionResponse, AppError> {
    serde_json::from_slice(body).map_err(|e| AppError::InvalidResponse(e.to_string()))
}
