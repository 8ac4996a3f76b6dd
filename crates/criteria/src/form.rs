//! Mutable form state that is read atomically into a [`MovieRequest`].
//!
//! Setters store whatever they are given. Range and format constraints belong
//! to the input controls (see [`crate::controls`]); the form only refuses to
//! build a request while a mandatory field is empty.

use crate::error::{CriteriaError, Result};
use crate::types::{DEFAULT_MAX_DISTANCE_KM, Field, MovieRequest};

/// The five user-editable search criteria.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CriteriaForm {
    genre: String,
    max_distance: u32,
    start_time: String,
    end_time: String,
    location: String,
}

impl CriteriaForm {
    /// Create a form with every text field empty and the slider at its default
    pub fn new() -> Self {
        Self {
            genre: String::new(),
            max_distance: DEFAULT_MAX_DISTANCE_KM,
            start_time: String::new(),
            end_time: String::new(),
            location: String::new(),
        }
    }

    pub fn set_genre(&mut self, genre: impl Into<String>) {
        self.genre = genre.into();
    }

    pub fn set_max_distance(&mut self, km: u32) {
        self.max_distance = km;
    }

    pub fn set_start_time(&mut self, time: impl Into<String>) {
        self.start_time = time.into();
    }

    pub fn set_end_time(&mut self, time: impl Into<String>) {
        self.end_time = time.into();
    }

    pub fn set_location(&mut self, location: impl Into<String>) {
        self.location = location.into();
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

    pub fn location(&self) -> &str {
        &self.location
    }

    /// Mandatory fields that are currently empty, in form order.
    pub fn missing_fields(&self) -> Vec<Field> {
        [
            (Field::Genre, &self.genre),
            (Field::StartTime, &self.start_time),
            (Field::EndTime, &self.end_time),
            (Field::Location, &self.location),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(field, _)| field)
        .collect()
    }

    /// Whether the submit action should be enabled
    pub fn can_submit(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Snapshot the current values into a request.
    ///
    /// Start and end times are not compared; an end time before the start
    /// time is passed through for the service to interpret.
    pub fn to_request(&self) -> Result<MovieRequest> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(CriteriaError::ValidationGap { missing });
        }

        Ok(MovieRequest::new(
            self.genre.clone(),
            self.max_distance,
            self.start_time.clone(),
            self.end_time.clone(),
            self.location.clone(),
        ))
    }
}

impl Default for CriteriaForm {
    fn default() -> Self {
        Self::new()
    }
}
