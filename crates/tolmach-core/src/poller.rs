use std::time::Duration;

use tokio::sync::broadcast;

use crate::client::Backend;
use crate::error::{Result, TolmachError};
use crate::types::{Job, JobState};

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Polls an indexing job at a fixed interval until the backend reports it
/// complete. Not-complete responses and transient transport failures both
/// schedule another query; there is no attempt cap and no backoff. Permanent
/// transport failures (an unknown job id, say) end the loop with an error
/// instead of retrying forever.
pub struct JobPoller {
    interval: Duration,
}

impl Default for JobPoller {
    fn default() -> Self {
        Self::new()
    }
}

impl JobPoller {
    pub fn new() -> Self {
        Self {
            interval: DEFAULT_POLL_INTERVAL,
        }
    }

    pub fn with_interval(interval: Duration) -> Self {
        Self { interval }
    }

    /// Drive `job` to completion, refreshing its local snapshot on every
    /// observed status, and return the job's result payload.
    ///
    /// The wait between queries races the `shutdown` signal, so a caller
    /// holding the sender can abandon the loop deterministically; the loop
    /// then returns `PollCancelled` without issuing further queries.
    pub async fn wait_for_completion(
        &self,
        backend: &dyn Backend,
        job: &mut Job,
        shutdown: &mut broadcast::Receiver<()>,
    ) -> Result<String> {
        loop {
            match backend.job_status(&job.id).await {
                Ok(status) => {
                    job.observe(&status);
                    if job.state == JobState::Complete {
                        log::info!("job {} complete", job.id);
                        return Ok(job.result.clone().unwrap_or_default());
                    }
                    log::debug!("job {} still processing", job.id);
                }
                Err(e) if e.is_transient() => {
                    log::warn!("status query for job {} failed, will retry: {e}", job.id);
                }
                Err(e) => {
                    return Err(TolmachError::PollFailed {
                        job_id: job.id.clone(),
                        reason: e.to_string(),
                    });
                }
            }

            tokio::select! {
                _ = shutdown.recv() => {
                    return Err(TolmachError::PollCancelled {
                        job_id: job.id.clone(),
                    });
                }
                _ = tokio::time::sleep(self.interval) => {}
            }
        }
    }
}
