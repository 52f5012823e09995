use axum::{
    http::{header, HeaderValue, Method},
    routing::{delete, get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod state;
pub mod words;

use config::AppConfig;
use state::AppState;

/// Build the full router for one service instance.
pub fn app(state: AppState) -> Router {
    let cors = cors_layer(&state.config);

    // Moderator routes sit behind the shared-secret gate
    let moderator = Router::new()
        .route("/api/approve-words", post(handlers::words::approve_words_post))
        .route("/api/reset", delete(handlers::words::reset_delete))
        .route_layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::secret_key_middleware,
        ));

    Router::new()
        // Public
        .route("/api/approved-words", get(handlers::words::approved_words_get))
        .route("/api/new-word", post(handlers::words::new_word_post))
        .route("/api/new-words", get(handlers::words::new_words_get))
        .merge(moderator)
        // Global middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(config: &AppConfig) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]);

    match config.cors_origin.parse::<HeaderValue>() {
        Ok(origin) => cors.allow_origin(origin),
        Err(err) => {
            tracing::warn!(origin = %config.cors_origin, error = %err, "invalid CORS origin, allowing none");
            cors
        }
    }
}
