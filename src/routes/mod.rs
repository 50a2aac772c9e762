//! Route tables.

mod common;
mod student;

pub use common::common_routes;
pub use student::student_routes;

use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, Router};
use tower_http::trace::TraceLayer;

/// Largest request body a handler will buffer; larger bodies fail with a 400 envelope.
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Full application router: student API, health/readiness/version, tracing and body limit layers.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(student_routes(state))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
}
