//! # Best Movie Finder
//!
//! Coordinates one submission cycle:
//! 1. Read the criteria form into a request (or stop on a validation gap)
//! 2. Hand the request to the scoring client
//! 3. Store the resolved outcome in the shared slot
//!
//! The slot is a `watch` channel. Renderers subscribe to it and see `Idle`
//! until the first cycle resolves, then each resolved outcome in turn. Nothing
//! is written while a call is pending.

use std::sync::Arc;
use std::time::Instant;

use criteria::{CriteriaForm, MovieRequest, Result, SubmissionOutcome};
use scoring_client::RequestSubmitter;
use tokio::sync::watch;
use tracing::{debug, info};

/// Submits criteria and keeps the latest outcome.
///
/// Clones share the same slot. Overlapping dispatches are not serialized:
/// each one runs to completion and whichever resolves last is what the slot
/// holds afterwards.
#[derive(Clone)]
pub struct BestMovieFinder {
    submitter: RequestSubmitter,
    outcome: Arc<watch::Sender<SubmissionOutcome>>,
}

impl BestMovieFinder {
    pub fn new(submitter: RequestSubmitter) -> Self {
        let (outcome, _) = watch::channel(SubmissionOutcome::Idle);
        Self {
            submitter,
            outcome: Arc::new(outcome),
        }
    }

    /// Watch the outcome slot
    pub fn subscribe(&self) -> watch::Receiver<SubmissionOutcome> {
        self.outcome.subscribe()
    }

    /// Current contents of the outcome slot
    pub fn outcome(&self) -> SubmissionOutcome {
        self.outcome.borrow().clone()
    }

    /// Handle an explicit submit action on `form`.
    ///
    /// Returns the validation gap without sending anything, and without
    /// touching the slot, when a mandatory field is empty.
    pub async fn submit(&self, form: &CriteriaForm) -> Result<SubmissionOutcome> {
        let request = form.to_request().inspect_err(|e| {
            debug!("Submit refused: {}", e);
        })?;
        Ok(self.dispatch(request).await)
    }

    /// Send an already-built request and store its outcome once it resolves.
    pub async fn dispatch(&self, request: MovieRequest) -> SubmissionOutcome {
        let start = Instant::now();
        info!("Dispatching request to {}", self.submitter.endpoint());

        let outcome = self.submitter.submit(request).await;
        self.outcome.send_replace(outcome.clone());

        info!(
            "Submission cycle resolved in {:.2?} ({})",
            start.elapsed(),
            describe(&outcome)
        );
        outcome
    }
}

fn describe(outcome: &SubmissionOutcome) -> &'static str {
    match outcome {
        SubmissionOutcome::Idle => "idle",
        SubmissionOutcome::Success(_) => "success",
        SubmissionOutcome::Rejected(_) => "rejected",
        SubmissionOutcome::TransportError(_) => "transport error",
    }
}
