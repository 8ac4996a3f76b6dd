//! Line-oriented criteria session.
//!
//! Each line edits one field or triggers a submit. A submit snapshots the form
//! and dispatches on its own task, so editing can continue while the scoring
//! service works. A separate task renders every outcome as it lands. Ending
//! the session never cuts a submission short.

use anyhow::{Context, Result};
use colored::Colorize;
use criteria::controls::{slider_value, time_input};
use criteria::CriteriaForm;
use finder::BestMovieFinder;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::oneshot;
use tokio::task::JoinSet;
use tracing::debug;

use crate::render::{render_form, render_outcome};

/// A parsed input line
#[derive(Debug, PartialEq)]
pub enum Command {
    Genre(String),
    Distance(u32),
    Start(String),
    End(String),
    Location(String),
    Show,
    Submit,
    Help,
    Quit,
}

const HELP: &str = "\
Commands:
  genre <text>        set the genre
  distance <km>       set the maximum distance (1-50)
  start <HH:MM>       set the earliest start time
  end <HH:MM>         set the latest end time
  location <text>     set your location
  show                print the current criteria
  submit              find the best movie
  help                print this message
  quit                leave";

/// Parse one input line.
///
/// Text values are everything after the first space, kept as typed.
pub fn parse_command(line: &str) -> Result<Command, String> {
    let (word, rest) = line.split_once(' ').unwrap_or((line, ""));
    match word {
        "genre" => Ok(Command::Genre(rest.to_string())),
        "location" => Ok(Command::Location(rest.to_string())),
        "distance" => rest
            .trim()
            .parse::<i64>()
            .map(|km| Command::Distance(slider_value(km)))
            .map_err(|_| format!("Not a distance: {rest:?}")),
        "start" => time_input(rest).map(Command::Start).map_err(|e| e.to_string()),
        "end" => time_input(rest).map(Command::End).map_err(|e| e.to_string()),
        "show" => Ok(Command::Show),
        "submit" => Ok(Command::Submit),
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(format!("Unknown command: {other:?} (try 'help')")),
    }
}

/// Run the session until `quit` or end of `input`.
///
/// Submissions still in flight when input stops are awaited, and their
/// outcomes rendered, before this returns.
pub async fn run<R>(finder: BestMovieFinder, input: R) -> Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut form = CriteriaForm::new();

    let mut outcomes = finder.subscribe();
    let (stop, mut stopped) = oneshot::channel::<()>();
    let renderer = tokio::spawn(async move {
        loop {
            tokio::select! {
                changed = outcomes.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    let outcome = outcomes.borrow_and_update().clone();
                    render_outcome(&outcome);
                }
                _ = &mut stopped => {
                    if outcomes.has_changed().unwrap_or(false) {
                        let outcome = outcomes.borrow_and_update().clone();
                        render_outcome(&outcome);
                    }
                    break;
                }
            }
        }
    });

    println!("{}", HELP);
    let mut in_flight = JoinSet::new();
    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await.context("Reading input")? {
        if line.is_empty() {
            continue;
        }
        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(message) => {
                println!("{}", message.yellow());
                continue;
            }
        };
        debug!("Command: {:?}", command);

        match command {
            Command::Genre(genre) => form.set_genre(genre),
            Command::Distance(km) => form.set_max_distance(km),
            Command::Start(time) => form.set_start_time(time),
            Command::End(time) => form.set_end_time(time),
            Command::Location(location) => form.set_location(location),
            Command::Show => render_form(&form),
            Command::Help => println!("{}", HELP),
            Command::Submit => match form.to_request() {
                Ok(request) => {
                    let finder = finder.clone();
                    in_flight.spawn(async move {
                        finder.dispatch(request).await;
                    });
                    println!("{}", "Searching...".dimmed());
                }
                Err(e) => println!("{}", e.to_string().yellow()),
            },
            Command::Quit => break,
        }
    }

    if !in_flight.is_empty() {
        debug!("Waiting for {} submission(s) to resolve", in_flight.len());
    }
    while let Some(joined) = in_flight.join_next().await {
        joined.context("Submission task failed")?;
    }

    let _ = stop.send(());
    renderer.await.context("Renderer task failed")?;
    Ok(())
}
