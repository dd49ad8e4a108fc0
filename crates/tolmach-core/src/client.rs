use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};

use crate::error::TransportError;
use crate::types::{JobStatus, SubmitReceipt, TranslateRequest, TranslateResponse, VideoEntry};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Seam between the orchestrator and the remote services, one method per
/// boundary call. Implementations issue a single request per call; retry
/// policy belongs to callers.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Submit a media file for indexing, returning the new job's handle.
    async fn submit_media(
        &self,
        file_name: &str,
        payload: Vec<u8>,
    ) -> Result<SubmitReceipt, TransportError>;

    /// Query the current status of an indexing job.
    async fn job_status(&self, video_id: &str) -> Result<JobStatus, TransportError>;

    /// Fetch the full listing of known jobs.
    async fn list_videos(&self) -> Result<Vec<VideoEntry>, TransportError>;

    /// Fetch the transcript of an already-indexed job.
    async fn fetch_transcript(&self, video_id: &str) -> Result<String, TransportError>;

    /// Translate a text payload in a single round trip.
    async fn translate(&self, text: &str) -> Result<String, TransportError>;
}

/// HTTP implementation of [`Backend`] against the indexing/translation server.
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: &str) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("reqwest client build never fails with valid TLS config");
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn unreachable_err(e: reqwest::Error) -> TransportError {
    TransportError::Unreachable {
        reason: e.to_string(),
    }
}

/// Map a non-success status to a transport failure before any body parsing.
fn check(response: Response) -> Result<Response, TransportError> {
    if response.status().is_success() {
        Ok(response)
    } else {
        Err(TransportError::Status {
            status: response.status().as_u16(),
        })
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn submit_media(
        &self,
        file_name: &str,
        payload: Vec<u8>,
    ) -> Result<SubmitReceipt, TransportError> {
        let part = reqwest::multipart::Part::bytes(payload).file_name(file_name.to_string());
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self
            .client
            .post(self.url("/upload"))
            .multipart(form)
            .send()
            .await
            .map_err(unreachable_err)?;

        check(response)?.json().await.map_err(unreachable_err)
    }

    async fn job_status(&self, video_id: &str) -> Result<JobStatus, TransportError> {
        let response = self
            .client
            .get(self.url(&format!("/results/{video_id}")))
            .send()
            .await
            .map_err(unreachable_err)?;

        check(response)?.json().await.map_err(unreachable_err)
    }

    async fn list_videos(&self) -> Result<Vec<VideoEntry>, TransportError> {
        let response = self
            .client
            .get(self.url("/list_videos"))
            .send()
            .await
            .map_err(unreachable_err)?;

        check(response)?.json().await.map_err(unreachable_err)
    }

    async fn fetch_transcript(&self, video_id: &str) -> Result<String, TransportError> {
        let response = self
            .client
            .get(self.url(&format!("/get_captions/{video_id}")))
            .send()
            .await
            .map_err(unreachable_err)?;

        check(response)?.text().await.map_err(unreachable_err)
    }

    async fn translate(&self, text: &str) -> Result<String, TransportError> {
        let response = self
            .client
            .post(self.url("/translate"))
            .json(&TranslateRequest { text })
            .send()
            .await
            .map_err(unreachable_err)?;

        let body: TranslateResponse = check(response)?.json().await.map_err(unreachable_err)?;
        Ok(body.translated_text)
    }
}
