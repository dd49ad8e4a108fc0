use thiserror::Error;

/// Failure of a single request against the remote backend. No retry policy
/// lives at this level; callers decide what to do with a failed request.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Backend unreachable: {reason}")]
    Unreachable { reason: String },

    #[error("Backend returned HTTP {status}")]
    Status { status: u16 },
}

impl TransportError {
    /// Whether a poll loop may reasonably retry after this failure.
    ///
    /// Network-level failures and 408/429/5xx count as transient. Anything
    /// else (404 for an unknown job id, auth failures) is permanent and
    /// retrying it would never succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            TransportError::Unreachable { .. } => true,
            TransportError::Status { status } => {
                matches!(status, 408 | 429) || (500..600).contains(status)
            }
        }
    }
}

#[derive(Error, Debug)]
pub enum TolmachError {
    #[error("Transport failure: {0}")]
    Transport(#[from] TransportError),

    #[error("No content acquired yet; upload media or text first")]
    NoContent,

    #[error("Acquisition failed: {reason}")]
    Acquisition { reason: String },

    #[error("Polling failed for job {job_id}: {reason}")]
    PollFailed { job_id: String, reason: String },

    #[error("Polling cancelled for job {job_id}")]
    PollCancelled { job_id: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TolmachError>;
