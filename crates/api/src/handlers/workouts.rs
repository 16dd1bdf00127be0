//! Handlers for the `/api/workouts` resource.
//!
//! Responses carry bare workout objects (or arrays) with camelCase keys,
//! the shape the admin page consumes. Bodies are validated before any
//! storage call is made.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use workouts_core::error::CoreError;
use workouts_core::ordering::validate_moves;
use workouts_core::types::DbId;
use workouts_core::workout::ENTITY;
use workouts_db::models::workout::{CreateWorkout, ReorderWorkouts, UpdateWorkout};
use workouts_db::repositories::workout_repo::ReorderOutcome;
use workouts_db::repositories::WorkoutRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Unwrap a JSON body, turning extractor rejections into JSON error bodies.
fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> AppResult<T> {
    payload
        .map(|Json(value)| value)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}

/// Unwrap the `{id}` path segment, rejecting non-numeric ids with a JSON body.
fn path_id(path: Result<Path<DbId>, PathRejection>) -> AppResult<DbId> {
    path.map(|Path(id)| id)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: ENTITY, id })
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/workouts
///
/// List every workout. Rows come back in `sortOrder` order, but clients
/// sort for themselves.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let workouts = WorkoutRepo::list(&state.pool).await?;
    Ok(Json(workouts))
}

/// POST /api/workouts
///
/// Create a workout at the end of the list.
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateWorkout>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let input = json_body(payload)?;
    input.validate()?;

    let workout = WorkoutRepo::create(&state.pool, &input).await?;

    tracing::info!(
        workout_id = workout.id,
        sort_order = workout.sort_order,
        "Workout created",
    );

    Ok((StatusCode::CREATED, Json(workout)))
}

/// PUT /api/workouts/{id}
///
/// Apply a partial update. Absent fields keep their stored values.
pub async fn update(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
    payload: Result<Json<UpdateWorkout>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let id = path_id(path)?;
    let input = json_body(payload)?;
    input.validate()?;

    let workout = WorkoutRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(workout_id = id, sort_order = ?input.sort_order, "Workout updated");

    Ok(Json(workout))
}

/// DELETE /api/workouts/{id}
///
/// Hard-delete a workout. Other rows keep their `sortOrder`.
pub async fn delete(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let id = path_id(path)?;
    if !WorkoutRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }

    tracing::info!(workout_id = id, "Workout deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/workouts/reorder
///
/// Write several `sortOrder` values atomically. Used for swaps so that a
/// failure never leaves the pair half-updated.
pub async fn reorder(
    State(state): State<AppState>,
    payload: Result<Json<ReorderWorkouts>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let input = json_body(payload)?;
    validate_moves(&input.moves)?;

    match WorkoutRepo::apply_moves(&state.pool, &input.moves).await? {
        ReorderOutcome::Applied(workouts) => {
            tracing::info!(moves = input.moves.len(), "Workouts reordered");
            Ok(Json(workouts))
        }
        ReorderOutcome::Missing(id) => {
            tracing::warn!(workout_id = id, "Reorder rolled back, workout missing");
            Err(not_found(id))
        }
    }
}
