//! Tolmach Core Library
//!
//! Core functionality for submitting media to a remote indexing backend,
//! polling the indexing job to completion, pulling captions, and delivering
//! translated text as a downloadable file.

pub mod client;
pub mod deliver;
pub mod error;
pub mod poller;
pub mod session;
pub mod types;
pub mod workflow;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used items at crate root
pub use client::{Backend, HttpBackend};
pub use deliver::{DEFAULT_BASENAME, default_output_dir, deliver};
pub use error::{Result, TolmachError, TransportError};
pub use poller::{DEFAULT_POLL_INTERVAL, JobPoller};
pub use session::{AcquisitionTicket, Session};
pub use types::{Job, JobState, JobStatus, SubmitReceipt, VideoEntry};
pub use workflow::Workflow;
