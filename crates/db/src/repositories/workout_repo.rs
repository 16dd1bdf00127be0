//! Repository for the `workouts` table.

use sqlx::PgPool;
use workouts_core::ordering::SortOrderMove;
use workouts_core::types::DbId;

use crate::models::workout::{CreateWorkout, UpdateWorkout, Workout};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, location, maps_url, schedule, event_type, sort_order, \
                       created_at, updated_at";

/// Result of applying a reorder batch.
#[derive(Debug)]
pub enum ReorderOutcome {
    /// Every move was written; rows are returned in request order.
    Applied(Vec<Workout>),
    /// No row exists for this id. The transaction was rolled back.
    Missing(DbId),
}

/// Provides CRUD and reorder operations for workouts.
pub struct WorkoutRepo;

impl WorkoutRepo {
    /// List every workout, ordered by `sort_order` then `id`.
    pub async fn list(pool: &PgPool) -> Result<Vec<Workout>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM workouts ORDER BY sort_order, id");
        sqlx::query_as::<_, Workout>(&query).fetch_all(pool).await
    }

    /// Find a workout by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Workout>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM workouts WHERE id = $1");
        sqlx::query_as::<_, Workout>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a workout at the end of the list.
    ///
    /// `sort_order` is one past the current maximum, or 0 for an empty table,
    /// computed in the same statement as the insert. It saturates at
    /// `i32::MAX` instead of overflowing.
    pub async fn create(pool: &PgPool, input: &CreateWorkout) -> Result<Workout, sqlx::Error> {
        let query = format!(
            "INSERT INTO workouts (name, location, maps_url, schedule, event_type, sort_order) \
             VALUES ($1, $2, $3, $4, $5, \
                     (SELECT COALESCE(LEAST(MAX(sort_order), 2147483646) + 1, 0) FROM workouts)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Workout>(&query)
            .bind(&input.name)
            .bind(&input.location)
            .bind(&input.maps_url)
            .bind(&input.schedule)
            .bind(&input.event_type)
            .fetch_one(pool)
            .await
    }

    /// Update a workout. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateWorkout,
    ) -> Result<Option<Workout>, sqlx::Error> {
        let query = format!(
            "UPDATE workouts SET \
                name = COALESCE($2, name), \
                location = COALESCE($3, location), \
                maps_url = COALESCE($4, maps_url), \
                schedule = COALESCE($5, schedule), \
                event_type = COALESCE($6, event_type), \
                sort_order = COALESCE($7, sort_order) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Workout>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.location)
            .bind(&input.maps_url)
            .bind(&input.schedule)
            .bind(&input.event_type)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete a workout. Remaining rows keep their `sort_order`.
    ///
    /// Returns `true` if a row was deleted, `false` if not found.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM workouts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Assign new `sort_order` values to several rows in one transaction.
    ///
    /// Either every move is committed or none is: the first unknown id
    /// rolls the whole batch back.
    pub async fn apply_moves(
        pool: &PgPool,
        moves: &[SortOrderMove],
    ) -> Result<ReorderOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!("UPDATE workouts SET sort_order = $2 WHERE id = $1 RETURNING {COLUMNS}");
        let mut updated = Vec::with_capacity(moves.len());

        for mv in moves {
            let row = sqlx::query_as::<_, Workout>(&query)
                .bind(mv.id)
                .bind(mv.sort_order)
                .fetch_optional(&mut *tx)
                .await?;

            match row {
                Some(workout) => updated.push(workout),
                None => {
                    tx.rollback().await?;
                    return Ok(ReorderOutcome::Missing(mv.id));
                }
            }
        }

        tx.commit().await?;
        Ok(ReorderOutcome::Applied(updated))
    }

    /// Number of rows in the table.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM workouts")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
