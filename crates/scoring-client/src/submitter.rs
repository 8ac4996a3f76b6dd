//! One outbound call per submission, classified into a [`SubmissionOutcome`].

use std::sync::Arc;
use std::time::Instant;

use criteria::{BestMovie, MovieRequest, SubmissionOutcome};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, error, info};

use crate::config::ClientConfig;
use crate::error::SubmitError;
use crate::notify::Notifier;

/// Error body shape produced by the scoring service on non-2xx responses.
#[derive(Deserialize)]
struct ErrorBody {
    detail: Detail,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Detail {
    /// `{"detail": "No movies match"}`
    Message(String),
    /// Request validation failures: `{"detail": [{"loc": [...], "msg": "...", ...}]}`
    Issues(Vec<Issue>),
}

#[derive(Deserialize)]
struct Issue {
    msg: String,
}

impl Detail {
    fn into_message(self) -> Option<String> {
        let message = match self {
            Detail::Message(message) => message,
            Detail::Issues(issues) => issues
                .into_iter()
                .map(|issue| issue.msg)
                .collect::<Vec<_>>()
                .join("; "),
        };
        (!message.is_empty()).then_some(message)
    }
}

/// Decide what a received response means.
///
/// Priority: a 2xx body shaped like a movie wins; a non-2xx body with a
/// readable `detail` is a rejection; everything else is unexpected.
pub fn classify_response(status: StatusCode, body: &[u8]) -> Result<BestMovie, SubmitError> {
    if status.is_success() {
        return serde_json::from_slice(body).map_err(|source| SubmitError::MalformedBody {
            status: status.as_u16(),
            source,
        });
    }

    match serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|err| err.detail.into_message())
    {
        Some(detail) => Err(SubmitError::Rejected {
            status: status.as_u16(),
            detail,
        }),
        None => Err(SubmitError::UnexpectedStatus {
            status: status.as_u16(),
            body: String::from_utf8_lossy(body).into_owned(),
        }),
    }
}

/// Sends criteria to the scoring service and reports how it went.
///
/// No timeout is set and nothing is retried: a call runs until the transport
/// gives up, and a failed cycle needs a new submit from the user.
#[derive(Clone)]
pub struct RequestSubmitter {
    http: Client,
    endpoint: String,
    notifier: Arc<dyn Notifier>,
}

impl RequestSubmitter {
    /// Create a submitter posting to `endpoint`.
    ///
    /// # Arguments
    /// * `endpoint` - Full URL of `find_best_movie` (e.g., "http://localhost:8000/find_best_movie")
    /// * `notifier` - Receives the user-facing message of every failed cycle
    pub fn new(endpoint: impl Into<String>, notifier: impl Notifier + 'static) -> Self {
        Self {
            http: Client::new(),
            endpoint: endpoint.into(),
            notifier: Arc::new(notifier),
        }
    }

    pub fn from_config(config: &ClientConfig, notifier: impl Notifier + 'static) -> Self {
        Self::new(config.scoring_endpoint.clone(), notifier)
    }

    /// URL this submitter posts to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Run one submission cycle.
    ///
    /// Exactly one POST is issued. Failures are passed to the notifier before
    /// this returns; diagnostics go to the log only.
    pub async fn submit(&self, request: MovieRequest) -> SubmissionOutcome {
        let start = Instant::now();
        debug!(
            "Submitting criteria to {}: genre={:?} max_distance={} window={}-{} location={:?}",
            self.endpoint,
            request.genre(),
            request.max_distance(),
            request.start_time(),
            request.end_time(),
            request.user_location()
        );

        let outcome = match self.post(&request).await {
            Ok(movie) => {
                info!(
                    "Best movie found in {:.2?}: {} at {}",
                    start.elapsed(),
                    movie.title,
                    movie.cinema
                );
                SubmissionOutcome::Success(movie)
            }
            Err(e) => {
                error!("Error finding best movie: {}", e);
                e.into_outcome()
            }
        };

        if let Some(message) = outcome.failure_message() {
            self.notifier.notify(message);
        }
        outcome
    }

    async fn post(&self, request: &MovieRequest) -> Result<BestMovie, SubmitError> {
        let response = self.http.post(&self.endpoint).json(request).send().await?;
        let status = response.status();
        let body = response.bytes().await?;
        classify_response(status, &body)
    }
}
