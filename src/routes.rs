// src/routes.rs

use axum::{
    Router,
    http::Method,
    routing::{get, post},
};
use tower_governor::{GovernorLayer, governor::GovernorConfigBuilder};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    handlers::{score, topic},
    state::AppState,
};

/// Assembles the main application router.
///
/// * Merges all sub-routers (levels, quiz-scores).
/// * Applies global middleware (Trace, CORS).
/// * Injects global state (Database Pool + Config).
pub fn create_router(state: AppState) -> Router {
    let origins = [
        "http://localhost:3000".parse().unwrap(),
        "http://127.0.0.1:3000".parse().unwrap(),
    ];

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    // let governor_conf = GovernorConfigBuilder::default()
    //     .per_second(2)
    //     .burst_size(5)
    //     .finish()
    //     .unwrap();

    // let governor_conf = Arc::new(governor_conf);

    let level_routes = Router::new()
        .route("/{level_id}/topics", get(topic::list_topics))
        .route("/{level_id}/topics/{topic_id}", get(topic::get_topic))
        .route(
            "/{level_id}/topics/{topic_id}/grade",
            post(topic::grade_attempt),
        );

    let score_routes = Router::new().route("/submit", post(score::submit_score));

    Router::new()
        .nest("/api/levels", level_routes)
        .nest("/api/quiz-scores", score_routes)
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // .layer(GovernorLayer::new(governor_conf))
        .with_state(state)
}
