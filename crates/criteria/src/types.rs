//! Core domain types shared by the form, the submitter and the renderer.
//!
//! Wire names are fixed by the scoring service, so every serialized field
//! name here is part of the contract.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Constants
// =============================================================================

/// Lower bound of the distance slider (km)
pub const MIN_DISTANCE_KM: u32 = 1;

/// Upper bound of the distance slider (km)
pub const MAX_DISTANCE_KM: u32 = 50;

/// Slider position when the form is first created (km)
pub const DEFAULT_MAX_DISTANCE_KM: u32 = 10;

/// User-facing text for every failure that is not a structured rejection
pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred";

// =============================================================================
// Request
// =============================================================================

/// A snapshot of the criteria form, built once per submit action.
///
/// The only way to obtain one outside this crate is
/// [`CriteriaForm::to_request`](crate::CriteriaForm::to_request), which
/// refuses to build it while a mandatory field is empty. It is serialized onto
/// the wire but never read back:
///
/// ```compile_fail
/// let body = r#"{"genre":"","max_distance":10,"start_time":"","end_time":"","user_location":""}"#;
/// let _: criteria::MovieRequest = serde_json::from_str(body).unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MovieRequest {
    genre: String,
    max_distance: u32,
    start_time: String,
    end_time: String,
    user_location: String,
}

impl MovieRequest {
    pub(crate) fn new(
        genre: String,
        max_distance: u32,
        start_time: String,
        end_time: String,
        user_location: String,
    ) -> Self {
        Self {
            genre,
            max_distance,
            start_time,
            end_time,
            user_location,
        }
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }

    pub fn max_distance(&self) -> u32 {
        self.max_distance
    }

    pub fn start_time(&self) -> &str {
        &self.start_time
    }

    pub fn end_time(&self) -> &str {
        &self.end_time
    }

    pub fn user_location(&self) -> &str {
        &self.user_location
    }
}

/// The mandatory fields of the criteria form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Genre,
    StartTime,
    EndTime,
    Location,
}

impl Field {
    /// Label shown next to the input
    pub fn label(self) -> &'static str {
        match self {
            Field::Genre => "Genre",
            Field::StartTime => "Start Time",
            Field::EndTime => "End Time",
            Field::Location => "Location",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Response
// =============================================================================

/// The showing picked by the scoring service, carried verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestMovie {
    pub title: String,
    pub cinema: String,
    /// Distance from the user's location in km
    pub distance: f64,
    pub rating: f64,
    /// Ticket price in currency units
    pub price: f64,
}

/// Result of the most recently resolved submission cycle.
///
/// Exactly one variant is active at a time. A new cycle replaces the whole
/// value once it resolves; there is no "pending" or "cleared" variant.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SubmissionOutcome {
    /// Nothing has resolved yet
    #[default]
    Idle,
    /// The service returned a match
    Success(BestMovie),
    /// The service declined the request and said why
    Rejected(String),
    /// The call failed or its response could not be interpreted
    TransportError(String),
}

impl SubmissionOutcome {
    pub fn is_idle(&self) -> bool {
        matches!(self, SubmissionOutcome::Idle)
    }

    /// The movie, if this cycle succeeded
    pub fn best_movie(&self) -> Option<&BestMovie> {
        match self {
            SubmissionOutcome::Success(movie) => Some(movie),
            _ => None,
        }
    }

    /// The user-facing message, if this cycle failed
    pub fn failure_message(&self) -> Option<&str> {
        match self {
            SubmissionOutcome::Rejected(message) | SubmissionOutcome::TransportError(message) => {
                Some(message)
            }
            SubmissionOutcome::Idle | SubmissionOutcome::Success(_) => None,
        }
    }
}
