//! # Criteria Crate
//!
//! Collects movie-viewing preferences and turns them into a request for the
//! scoring service.
//!
//! ## Main Components
//!
//! - **types**: Wire contracts (`MovieRequest`, `BestMovie`) and `SubmissionOutcome`
//! - **form**: `CriteriaForm`, the editable state behind the submit action
//! - **controls**: Slider and time-picker constraints applied to raw input
//! - **error**: Error types for criteria collection
//!
//! ## Example Usage
//!
//! ```
//! use criteria::CriteriaForm;
//!
//! let mut form = CriteriaForm::new();
//! form.set_genre("Comedy");
//! form.set_max_distance(15);
//! form.set_start_time("18:00");
//! form.set_end_time("21:00");
//! form.set_location("Downtown");
//!
//! let request = form.to_request().unwrap();
//! assert_eq!(request.user_location(), "Downtown");
//! ```

pub mod controls;
pub mod error;
pub mod form;
pub mod types;

pub use error::{CriteriaError, Result};
pub use form::CriteriaForm;
pub use types::{
    BestMovie, DEFAULT_MAX_DISTANCE_KM, Field, MAX_DISTANCE_KM, MIN_DISTANCE_KM, MovieRequest,
    SubmissionOutcome, UNKNOWN_ERROR_MESSAGE,
};
