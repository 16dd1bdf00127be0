//! Route definitions for workouts.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::workouts;
use crate::state::AppState;

/// Routes mounted at `/workouts`.
///
/// ```text
/// GET    /          -> list
/// POST   /          -> create
/// POST   /reorder   -> reorder
/// PUT    /{id}      -> update
/// DELETE /{id}      -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(workouts::list).post(workouts::create))
        .route("/reorder", post(workouts::reorder))
        .route("/{id}", put(workouts::update).delete(workouts::delete))
}
