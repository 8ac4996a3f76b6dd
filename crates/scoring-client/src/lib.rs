//! Client for the remote movie scoring service.
//!
//! This crate posts a [`MovieRequest`](criteria::MovieRequest) to the
//! service's `find_best_movie` endpoint over HTTP and reduces whatever comes
//! back to a [`SubmissionOutcome`](criteria::SubmissionOutcome):
//! - a movie → `Success`
//! - a non-2xx response with a `detail` message → `Rejected(detail)`
//! - anything else → `TransportError("An unknown error occurred")`
//!
//! Failed cycles are also pushed to an injected [`Notifier`].

pub mod config;
pub mod error;
pub mod notify;
pub mod submitter;

pub use config::{ClientConfig, DEFAULT_SCORING_ENDPOINT};
pub use error::SubmitError;
pub use notify::Notifier;
pub use submitter::{classify_response, RequestSubmitter};
