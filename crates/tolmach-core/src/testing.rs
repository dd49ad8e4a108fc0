//! Scripted backend double for orchestration tests.

use std::collections::VecDeque;
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;

use crate::client::Backend;
use crate::error::TransportError;
use crate::types::{JobStatus, SubmitReceipt, VideoEntry};

#[derive(Clone, Default)]
pub(crate) struct MockBackend {
    inner: Arc<Inner>,
}

#[derive(Default)]
struct Inner {
    statuses: Mutex<VecDeque<Result<JobStatus, TransportError>>>,
    listing: Mutex<Vec<VideoEntry>>,
    transcript: Mutex<String>,
    translation: Mutex<Option<String>>,
    status_calls: AtomicUsize,
    transcript_calls: AtomicUsize,
    submitted_files: Mutex<Vec<String>>,
    translated_inputs: Mutex<Vec<String>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the status responses to hand out, in order. When the queue runs
    /// dry the job reports not-complete forever.
    pub fn with_statuses(self, statuses: Vec<Result<JobStatus, TransportError>>) -> Self {
        *self.inner.statuses.lock().unwrap() = statuses.into();
        self
    }

    pub fn with_listing(self, listing: Vec<VideoEntry>) -> Self {
        *self.inner.listing.lock().unwrap() = listing;
        self
    }

    pub fn with_transcript(self, transcript: &str) -> Self {
        *self.inner.transcript.lock().unwrap() = transcript.to_string();
        self
    }

    pub fn with_translation(self, translated: &str) -> Self {
        *self.inner.translation.lock().unwrap() = Some(translated.to_string());
        self
    }

    pub fn status_calls(&self) -> usize {
        self.inner.status_calls.load(Ordering::SeqCst)
    }

    pub fn transcript_calls(&self) -> usize {
        self.inner.transcript_calls.load(Ordering::SeqCst)
    }

    pub fn submitted_files(&self) -> Vec<String> {
        self.inner.submitted_files.lock().unwrap().clone()
    }

    pub fn translated_inputs(&self) -> Vec<String> {
        self.inner.translated_inputs.lock().unwrap().clone()
    }
}

#[async_trait]
impl Backend for MockBackend {
    async fn submit_media(
        &self,
        file_name: &str,
        _payload: Vec<u8>,
    ) -> Result<SubmitReceipt, TransportError> {
        self.inner
            .submitted_files
            .lock()
            .unwrap()
            .push(file_name.to_string());
        Ok(SubmitReceipt {
            video_id: "mock-video-1".to_string(),
        })
    }

    async fn job_status(&self, _video_id: &str) -> Result<JobStatus, TransportError> {
        self.inner.status_calls.fetch_add(1, Ordering::SeqCst);
        self.inner
            .statuses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(JobStatus {
                processing_complete: false,
                results: None,
            }))
    }

    async fn list_videos(&self) -> Result<Vec<VideoEntry>, TransportError> {
        Ok(self.inner.listing.lock().unwrap().clone())
    }

    async fn fetch_transcript(&self, _video_id: &str) -> Result<String, TransportError> {
        self.inner.transcript_calls.fetch_add(1, Ordering::SeqCst);
        let transcript = self.inner.transcript.lock().unwrap().clone();
        if transcript.is_empty() {
            return Err(TransportError::Status { status: 404 });
        }
        Ok(transcript)
    }

    async fn translate(&self, text: &str) -> Result<String, TransportError> {
        self.inner
            .translated_inputs
            .lock()
            .unwrap()
            .push(text.to_string());
        let translation = self.inner.translation.lock().unwrap().clone();
        Ok(translation.unwrap_or_else(|| format!("translated: {text}")))
    }
}
