use serde::{Deserialize, Serialize};

/// Response to a media submission: the backend's opaque job handle.
#[derive(Debug, Deserialize)]
pub struct SubmitReceipt {
    #[serde(rename = "videoId")]
    pub video_id: String,
}

/// One status snapshot of a remote indexing job. `results` carries the
/// derived transcript once `processing_complete` is true.
#[derive(Debug, Clone, Deserialize)]
pub struct JobStatus {
    #[serde(rename = "processingComplete")]
    pub processing_complete: bool,
    pub results: Option<String>,
}

/// One row of the backend's job listing. Rebuilt wholesale on each fetch.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VideoEntry {
    pub name: String,
    pub id: String,
}

#[derive(Serialize)]
pub struct TranslateRequest<'a> {
    pub text: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct TranslateResponse {
    pub translated_text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobState {
    Submitted,
    Processing,
    Complete,
}

/// Local snapshot of a remote indexing job. The backend owns the real state;
/// this is only refreshed from the statuses observed while polling.
#[derive(Debug)]
pub struct Job {
    pub id: String,
    pub state: JobState,
    pub result: Option<String>,
}

impl Job {
    pub fn submitted(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            state: JobState::Submitted,
            result: None,
        }
    }

    /// Refresh the snapshot from an observed status.
    pub fn observe(&mut self, status: &JobStatus) {
        if status.processing_complete {
            self.state = JobState::Complete;
            self.result = status.results.clone();
        } else {
            self.state = JobState::Processing;
        }
    }
}
