pub mod health;
pub mod workouts;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /workouts                list, create
/// /workouts/reorder        transactional sortOrder batch (POST)
/// /workouts/{id}           update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/workouts", workouts::router())
}
