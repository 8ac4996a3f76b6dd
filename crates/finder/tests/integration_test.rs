//! Integration tests for full submission cycles.
//!
//! A stub scoring service runs in-process; each test scripts its replies.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use criteria::{CriteriaError, CriteriaForm, Field, SubmissionOutcome};
use finder::BestMovieFinder;
use scoring_client::RequestSubmitter;
use serde_json::{Value, json};

#[derive(Clone)]
struct Stub {
    hits: Arc<AtomicUsize>,
    replies: Arc<Mutex<VecDeque<(StatusCode, Value)>>>,
}

async fn find_best_movie(State(stub): State<Stub>, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    stub.hits.fetch_add(1, Ordering::SeqCst);
    // Requests for the "Slow" genre take a while to score
    if body["genre"] == "Slow" {
        tokio::time::sleep(Duration::from_millis(200)).await;
        return (
            StatusCode::OK,
            Json(json!({"title": "Slowpoke", "cinema": "Odeon", "distance": 9.0, "rating": 6.1, "price": 8.0})),
        );
    }
    let (status, reply) = stub
        .replies
        .lock()
        .unwrap()
        .pop_front()
        .unwrap_or((StatusCode::INTERNAL_SERVER_ERROR, json!(null)));
    (status, Json(reply))
}

async fn spawn_stub(replies: Vec<(StatusCode, Value)>) -> (String, Stub) {
    let stub = Stub {
        hits: Arc::new(AtomicUsize::new(0)),
        replies: Arc::new(Mutex::new(replies.into())),
    };
    let app = Router::new()
        .route("/find_best_movie", post(find_best_movie))
        .with_state(stub.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}/find_best_movie"), stub)
}

fn create_finder(endpoint: &str) -> (BestMovieFinder, Arc<Mutex<Vec<String>>>) {
    let notices = Arc::new(Mutex::new(Vec::new()));
    let sink = notices.clone();
    let submitter = RequestSubmitter::new(endpoint, move |message: &str| {
        sink.lock().unwrap().push(message.to_string())
    });
    (BestMovieFinder::new(submitter), notices)
}

fn filled_form() -> CriteriaForm {
    let mut form = CriteriaForm::new();
    form.set_genre("Comedy");
    form.set_max_distance(15);
    form.set_start_time("18:00");
    form.set_end_time("21:00");
    form.set_location("Downtown");
    form
}

fn inception() -> Value {
    json!({"title": "Inception", "cinema": "Metro", "distance": 3.2, "rating": 8.8, "price": 12.5})
}

#[tokio::test]
async fn test_incomplete_form_sends_nothing() {
    let (endpoint, stub) = spawn_stub(vec![(StatusCode::OK, inception())]).await;
    let (finder, notices) = create_finder(&endpoint);

    let incomplete: Vec<(Field, CriteriaForm)> = vec![
        (Field::Genre, {
            let mut f = filled_form();
            f.set_genre("");
            f
        }),
        (Field::StartTime, {
            let mut f = filled_form();
            f.set_start_time("");
            f
        }),
        (Field::EndTime, {
            let mut f = filled_form();
            f.set_end_time("");
            f
        }),
        (Field::Location, {
            let mut f = filled_form();
            f.set_location("");
            f
        }),
    ];

    for (field, form) in incomplete {
        let result = finder.submit(&form).await;
        assert_eq!(
            result,
            Err(CriteriaError::ValidationGap {
                missing: vec![field]
            })
        );
    }

    assert_eq!(stub.hits.load(Ordering::SeqCst), 0);
    assert!(finder.outcome().is_idle());
    assert!(notices.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_success_cycle_updates_slot() {
    let (endpoint, stub) = spawn_stub(vec![(StatusCode::OK, inception())]).await;
    let (finder, _) = create_finder(&endpoint);
    let mut rx = finder.subscribe();

    let outcome = finder.submit(&filled_form()).await.unwrap();

    let movie = outcome.best_movie().expect("success outcome");
    assert_eq!(movie.title, "Inception");
    assert_eq!(movie.cinema, "Metro");
    assert_eq!(movie.distance, 3.2);
    assert_eq!(movie.rating, 8.8);
    assert_eq!(movie.price, 12.5);

    assert!(rx.has_changed().unwrap());
    assert_eq!(*rx.borrow_and_update(), outcome);
    assert_eq!(finder.outcome(), outcome);
    assert_eq!(stub.hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_resubmit_after_rejection_replaces_outcome() {
    let (endpoint, stub) = spawn_stub(vec![
        (StatusCode::NOT_FOUND, json!({"detail": "No movies match"})),
        (StatusCode::OK, inception()),
    ])
    .await;
    let (finder, notices) = create_finder(&endpoint);
    let form = filled_form();

    let first = finder.submit(&form).await.unwrap();
    assert_eq!(first, SubmissionOutcome::Rejected("No movies match".into()));
    assert_eq!(finder.outcome(), first);
    assert_eq!(*notices.lock().unwrap(), vec!["No movies match".to_string()]);

    let second = finder.submit(&form).await.unwrap();
    assert!(second.best_movie().is_some());
    assert_eq!(finder.outcome(), second);

    assert_eq!(stub.hits.load(Ordering::SeqCst), 2);
    // Success adds no notice
    assert_eq!(notices.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_form_survives_submission() {
    let (endpoint, _) = spawn_stub(vec![(StatusCode::OK, inception())]).await;
    let (finder, _) = create_finder(&endpoint);
    let form = filled_form();

    finder.submit(&form).await.unwrap();

    assert_eq!(form, filled_form());
}

#[tokio::test]
async fn test_overlapping_dispatches_last_resolution_wins() {
    let (endpoint, stub) = spawn_stub(vec![(
        StatusCode::NOT_FOUND,
        json!({"detail": "No cinemas found within the specified distance"}),
    )])
    .await;
    let (finder, notices) = create_finder(&endpoint);

    let mut slow = filled_form();
    slow.set_genre("Slow");
    let slow_request = slow.to_request().unwrap();
    let fast_request = filled_form().to_request().unwrap();

    let (slow_outcome, fast_outcome) =
        tokio::join!(finder.dispatch(slow_request), finder.dispatch(fast_request));

    assert_eq!(
        fast_outcome,
        SubmissionOutcome::Rejected("No cinemas found within the specified distance".into())
    );
    assert_eq!(slow_outcome.best_movie().map(|m| m.title.as_str()), Some("Slowpoke"));
    // The slow call resolved last, so it owns the slot
    assert_eq!(finder.outcome(), slow_outcome);
    assert_eq!(stub.hits.load(Ordering::SeqCst), 2);
    assert_eq!(notices.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_unreachable_service() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let (finder, notices) = create_finder(&format!("http://{addr}/find_best_movie"));

    let outcome = finder.submit(&filled_form()).await.unwrap();

    assert_eq!(
        outcome,
        SubmissionOutcome::TransportError("An unknown error occurred".into())
    );
    assert_eq!(finder.outcome(), outcome);
    assert_eq!(
        *notices.lock().unwrap(),
        vec!["An unknown error occurred".to_string()]
    );
}
