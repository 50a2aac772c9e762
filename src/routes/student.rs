//! Student routes: `POST /api/student`, `GET /api/student/:id`, `GET /api/students`.

use crate::handlers::student::{create, fetch_all, fetch_by_id};
use crate::state::AppState;
use axum::{routing::get, routing::post, Router};

pub fn student_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/student", post(create))
        .route("/api/student/:id", get(fetch_by_id))
        .route("/api/students", get(fetch_all))
        .with_state(state)
}
