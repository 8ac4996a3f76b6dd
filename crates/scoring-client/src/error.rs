//! Diagnostic errors for one outbound call.
//!
//! These never reach the user directly. They are logged, then collapsed into
//! a [`SubmissionOutcome`] by [`SubmitError::into_outcome`].

use criteria::{SubmissionOutcome, UNKNOWN_ERROR_MESSAGE};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SubmitError {
    /// No response was obtained (connection refused, DNS, reset, bad URL...)
    #[error("Request to scoring service failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A 2xx response whose body is not a movie
    #[error("Malformed response body (status {status}): {source}")]
    MalformedBody {
        status: u16,
        #[source]
        source: serde_json::Error,
    },

    /// The service declined the request with a readable reason
    #[error("Scoring service rejected the request (status {status}): {detail}")]
    Rejected { status: u16, detail: String },

    /// A non-2xx response without a usable `detail`
    #[error("Unexpected response from scoring service (status {status}): {body}")]
    UnexpectedStatus { status: u16, body: String },
}

impl SubmitError {
    /// Reduce to what the user gets to see.
    pub fn into_outcome(self) -> SubmissionOutcome {
        match self {
            SubmitError::Rejected { detail, .. } => SubmissionOutcome::Rejected(detail),
            SubmitError::Http(_)
            | SubmitError::MalformedBody { .. }
            | SubmitError::UnexpectedStatus { .. } => {
                SubmissionOutcome::TransportError(UNKNOWN_ERROR_MESSAGE.to_string())
            }
        }
    }
}
