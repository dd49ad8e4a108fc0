use std::sync::Arc;
use std::time::Duration;

use tokio::sync::broadcast;

use crate::client::Backend;
use crate::error::{Result, TolmachError};
use crate::poller::JobPoller;
use crate::session::Session;
use crate::types::{Job, VideoEntry};

/// The orchestrator instance: owns the session slot, the backend handle, and
/// the poller, and sequences the acquisition and translation steps. All
/// acquisition paths converge on committing the session slot, so the
/// translation step never cares where the text came from.
pub struct Workflow {
    backend: Arc<dyn Backend>,
    session: Session,
    poller: JobPoller,
    shutdown: broadcast::Sender<()>,
}

impl Workflow {
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        let (shutdown, _) = broadcast::channel(1);
        Self {
            backend,
            session: Session::new(),
            poller: JobPoller::new(),
            shutdown,
        }
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poller = JobPoller::with_interval(interval);
        self
    }

    /// Submit a media file for indexing and wait for the derived transcript:
    /// submit, poll the job to completion, then commit the result text.
    /// Returns the acquired transcript.
    pub async fn ingest_media(&self, file_name: &str, payload: Vec<u8>) -> Result<String> {
        let ticket = self.session.begin_acquisition();

        let receipt = self.backend.submit_media(file_name, payload).await?;
        log::info!("media submitted, processing started as job {}", receipt.video_id);

        let mut job = Job::submitted(receipt.video_id);
        let mut shutdown = self.shutdown.subscribe();
        let transcript = self
            .poller
            .wait_for_completion(self.backend.as_ref(), &mut job, &mut shutdown)
            .await?;

        self.session.commit(ticket, transcript.clone());
        Ok(transcript)
    }

    /// Acquire the transcript of an already-indexed job picked from the
    /// listing. No polling: listed jobs are complete by definition.
    pub async fn ingest_listed(&self, video_id: &str) -> Result<String> {
        let ticket = self.session.begin_acquisition();

        let transcript = self
            .backend
            .fetch_transcript(video_id)
            .await
            .map_err(|e| TolmachError::Acquisition {
                reason: format!("transcript fetch for {video_id} failed: {e}"),
            })?;

        self.session.commit(ticket, transcript.clone());
        Ok(transcript)
    }

    /// Acquire a directly supplied text payload, verbatim.
    pub fn ingest_text(&self, text: String) {
        let ticket = self.session.begin_acquisition();
        self.session.commit(ticket, text);
    }

    pub async fn list_videos(&self) -> Result<Vec<VideoEntry>> {
        self.backend
            .list_videos()
            .await
            .map_err(|e| TolmachError::Acquisition {
                reason: format!("listing fetch failed: {e}"),
            })
    }

    /// Translate the current session text in one round trip. Fails fast with
    /// `NoContent` before any network call when nothing has been acquired.
    /// No retry: this is a user-triggered foreground action, unlike the
    /// background poll loop.
    pub async fn translate(&self) -> Result<String> {
        let Some(text) = self.session.text().filter(|t| !t.is_empty()) else {
            return Err(TolmachError::NoContent);
        };

        let translated = self.backend.translate(&text).await?;
        Ok(translated)
    }

    /// Current session content, if any has been acquired.
    pub fn session_text(&self) -> Option<String> {
        self.session.text()
    }

    /// Abandon any in-flight poll loop.
    pub fn shutdown(&self) {
        let _ = self.shutdown.send(());
    }
}
