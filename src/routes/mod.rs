//! HTTP surface: chat page, JSON API and health check

pub mod chat;
pub mod health;
pub mod page;
pub mod upload;

use std::time::Duration;

use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::timeout::TimeoutLayer;

use crate::config::AppConfig;
use crate::state::AppState;

/// Slack on top of the model timeout so the adapter reports upstream timeouts first
const REQUEST_TIMEOUT_SLACK_SECS: u64 = 10;

/// Routes nested under `/api`
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(chat::router()).merge(upload::router())
}

/// Build the full application router with its middleware stack
pub fn build_router(state: AppState, config: &AppConfig) -> Router {
    Router::new()
        .merge(page::router())
        .merge(health::router())
        .nest("/api", api_routes())
        .layer(DefaultBodyLimit::max(config.upload_limit_bytes))
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(
                config
                    .llm_timeout_secs
                    .saturating_add(REQUEST_TIMEOUT_SLACK_SECS),
            ),
        ))
        .with_state(state)
}
