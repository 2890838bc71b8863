use axum::{extract::DefaultBodyLimit, http::StatusCode, routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::{middleware, types::Config, AppState};

mod solve;

pub fn routes(config: &Config) -> Router<AppState> {
    Router::new()
        .merge(solve::routes())
        .route("/status", get(status))
        .layer(DefaultBodyLimit::max(config.payload_limit))
        .layer(middleware::cors_layer(config))
        .layer(TraceLayer::new_for_http())
}

async fn status() -> StatusCode {
    StatusCode::OK
}
