//! Finder crate for the showtime client.
//!
//! This crate contains the [`BestMovieFinder`], which connects the criteria
//! form to the scoring client and owns the outcome the display reads from.

pub mod finder;

pub use finder::BestMovieFinder;
