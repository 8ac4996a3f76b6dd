//! Terminal presentation of outcomes and failure notices.

use colored::Colorize;
use criteria::{BestMovie, CriteriaForm, SubmissionOutcome};

/// Failure notice shown the moment a cycle fails
pub fn alert(message: &str) {
    eprintln!("{} {}", "Error:".red().bold(), message);
}

/// Show whatever the outcome slot holds.
///
/// Failures were already announced by [`alert`], so only a movie is drawn.
pub fn render_outcome(outcome: &SubmissionOutcome) {
    if let Some(movie) = outcome.best_movie() {
        println!("{}", "Best Movie:".bold().blue());
        for line in best_movie_lines(movie) {
            println!("{}{}", "• ".green(), line);
        }
    }
}

pub fn best_movie_lines(movie: &BestMovie) -> Vec<String> {
    vec![
        format!("Title: {}", movie.title),
        format!("Cinema: {}", movie.cinema),
        format!("Distance: {} km", movie.distance),
        format!("Rating: {}", movie.rating),
        format!("Price: ${}", movie.price),
    ]
}

/// Print the current form values
pub fn render_form(form: &CriteriaForm) {
    println!("{}", "Find the Best Movie".bold().blue());
    println!("{}Genre: {}", "• ".cyan(), form.genre());
    println!("{}Max Distance: {} km", "• ".cyan(), form.max_distance());
    println!("{}Start Time: {}", "• ".cyan(), form.start_time());
    println!("{}End Time: {}", "• ".cyan(), form.end_time());
    println!("{}Location: {}", "• ".cyan(), form.location());
    if !form.can_submit() {
        let missing = form
            .missing_fields()
            .iter()
            .map(|f| f.label())
            .collect::<Vec<_>>()
            .join(", ");
        println!("{}", format!("(submit disabled, missing: {missing})").dimmed());
    }
}
