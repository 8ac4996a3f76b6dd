//! Error types for the criteria crate.
//!
//! Only local, pre-dispatch problems live here. Anything that happens after a
//! request leaves the process is classified into a `SubmissionOutcome` instead.

use thiserror::Error;

use crate::types::Field;

/// Errors raised while collecting criteria into a request
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CriteriaError {
    /// One or more mandatory fields were empty when submit was requested.
    ///
    /// No request is built and nothing is sent when this is returned.
    #[error("Please fill in: {}", join_labels(.missing))]
    ValidationGap { missing: Vec<Field> },

    /// A time input received something that is not a time of day
    #[error("Invalid time of day: {value:?} (expected HH:MM)")]
    InvalidTimeOfDay { value: String },
}

fn join_labels(fields: &[Field]) -> String {
    fields
        .iter()
        .map(|f| f.label())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CriteriaError>;
