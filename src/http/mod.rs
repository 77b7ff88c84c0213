//! Router assembly.

pub mod routes;

use axum::{routing::{get, post}, Router};
use axum::http::{self, header};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::Settings;
use routes::AppState;

/// All API routes over `state`, without the outer layers.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(routes::healthz))
        .route("/api/daily", get(routes::get_daily))
        .route("/api/daily/check", post(routes::check_daily))
        .route("/api/daily/hint", post(routes::hint_daily))
        .route("/api/levels/:difficulty/:level", get(routes::get_level))
        .route("/api/levels/:difficulty/:level/check", post(routes::check_level))
        .route("/api/levels/:difficulty/:level/hint", post(routes::hint_level))
        .route("/api/pools/:difficulty", get(routes::get_pool))
        .with_state(state)
}

/// [`router`] wrapped in CORS and request tracing.
pub fn app(state: AppState, settings: &Settings) -> Router {
    router(state)
        .layer(
            CorsLayer::new()
                .allow_methods([http::Method::GET, http::Method::POST])
                .allow_headers([header::CONTENT_TYPE])
                .allow_origin(settings.allow_origin()),
        )
        .layer(TraceLayer::new_for_http())
}
