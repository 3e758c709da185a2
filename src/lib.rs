pub mod api;
pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod services;
pub mod state;

#[cfg(test)]
pub mod testing;

use axum::{
    extract::DefaultBodyLimit,
    http::HeaderValue,
    routing::{delete, get, put},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::config::{AppConfig, Environment};
pub use crate::state::AppState;

/// Build the full router: API routes plus global middleware
pub fn app(state: AppState, config: &AppConfig) -> Router {
    let level = if config.api.enable_request_logging {
        Level::INFO
    } else {
        Level::DEBUG
    };

    Router::new()
        // Public
        .route("/", get(handlers::health::root))
        .route("/health", get(handlers::health::health))
        .merge(course_routes())
        .merge(instructor_routes())
        .with_state(state)
        // Global middleware
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(level))
                        .on_response(DefaultOnResponse::new().level(level)),
                )
                .layer(cors_layer(config))
                .layer(DefaultBodyLimit::max(config.api.max_request_size_bytes)),
        )
}

fn course_routes() -> Router<AppState> {
    use handlers::courses;

    Router::new()
        .route("/v1/courses", get(courses::list).post(courses::create))
        .route("/v1/courses/:id", put(courses::update).delete(courses::delete))
}

fn instructor_routes() -> Router<AppState> {
    use handlers::instructors;

    Router::new()
        .route("/v1/instructors", get(instructors::list).post(instructors::create))
        .route("/v1/instructors/:id", delete(instructors::delete))
}

fn cors_layer(config: &AppConfig) -> CorsLayer {
    if !config.security.enable_cors {
        return CorsLayer::new();
    }
    if config.environment == Environment::Development {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = config
        .security
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(tower_http::cors::Any)
        .allow_headers(tower_http::cors::Any)
}
