mod interactive;
mod render;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use criteria::controls::time_input;
use criteria::{CriteriaForm, DEFAULT_MAX_DISTANCE_KM, MAX_DISTANCE_KM, MIN_DISTANCE_KM};
use finder::BestMovieFinder;
use scoring_client::{ClientConfig, RequestSubmitter};
use tokio::io::BufReader;
use tracing::info;

use crate::render::{alert, render_outcome};

/// Showtime - find the best movie showing near you
#[derive(Parser)]
#[command(name = "showtime")]
#[command(about = "Pick the best movie showing for your genre, distance and time window", long_about = None)]
struct Cli {
    /// URL of the scoring service's find_best_movie endpoint
    /// (defaults to $SCORING_ENDPOINT, then http://localhost:8000/find_best_movie)
    #[arg(long, global = true)]
    endpoint: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit one set of criteria
    Find {
        /// Genre to look for
        #[arg(long)]
        genre: Option<String>,

        /// Maximum distance to the cinema in km
        #[arg(
            long,
            default_value_t = DEFAULT_MAX_DISTANCE_KM,
            value_parser = clap::value_parser!(u32).range(MIN_DISTANCE_KM as i64..=MAX_DISTANCE_KM as i64)
        )]
        max_distance: u32,

        /// Earliest start time (HH:MM)
        #[arg(long, value_parser = time_input)]
        start_time: Option<String>,

        /// Latest end time (HH:MM)
        #[arg(long, value_parser = time_input)]
        end_time: Option<String>,

        /// Where you are
        #[arg(long)]
        location: Option<String>,
    },

    /// Edit criteria and submit interactively
    Interactive,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = ClientConfig::from_env().context("Failed to read configuration")?;
    if let Some(endpoint) = cli.endpoint {
        config.scoring_endpoint = endpoint;
    }
    info!("Using scoring service at {}", config.scoring_endpoint);

    let finder = BestMovieFinder::new(RequestSubmitter::from_config(&config, alert));

    match cli.command {
        Commands::Find {
            genre,
            max_distance,
            start_time,
            end_time,
            location,
        } => {
            let mut form = CriteriaForm::new();
            form.set_max_distance(max_distance);
            if let Some(genre) = genre {
                form.set_genre(genre);
            }
            if let Some(start_time) = start_time {
                form.set_start_time(start_time);
            }
            if let Some(end_time) = end_time {
                form.set_end_time(end_time);
            }
            if let Some(location) = location {
                form.set_location(location);
            }
            handle_find(&finder, &form).await
        }
        Commands::Interactive => {
            interactive::run(finder, BufReader::new(tokio::io::stdin())).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Handle the 'find' command
async fn handle_find(finder: &BestMovieFinder, form: &CriteriaForm) -> Result<ExitCode> {
    let outcome = finder.submit(form).await?;
    render_outcome(&outcome);

    if outcome.failure_message().is_some() {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
