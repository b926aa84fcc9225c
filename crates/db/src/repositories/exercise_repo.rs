//! Repository for the `exercises` table.
//!
//! Every read here excludes soft-deleted rows. Ownership is left to
//! `trainlog_core::exercise`.

use sqlx::{PgConnection, PgPool};
use trainlog_core::types::DbId;

use crate::models::exercise::{Exercise, ExerciseFields, ExerciseFilter};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, user_id, is_preset, name, body_part, exercise_type, deleted_at, created_at, updated_at";

/// Provides CRUD operations for exercises.
pub struct ExerciseRepo;

impl ExerciseRepo {
    /// List presets plus the user's live custom exercises.
    ///
    /// Presets come first, then ascending by name.
    pub async fn list_visible(
        pool: &PgPool,
        user_id: DbId,
        filter: &ExerciseFilter,
    ) -> Result<Vec<Exercise>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM exercises
             WHERE deleted_at IS NULL
               AND (is_preset OR user_id = $1)
               AND ($2::TEXT IS NULL OR starts_with(name, $2))
               AND ($3::SMALLINT IS NULL OR body_part = $3)
             ORDER BY is_preset DESC, name ASC, id ASC"
        );
        sqlx::query_as::<_, Exercise>(&query)
            .bind(user_id)
            .bind(&filter.name)
            .bind(filter.body_part)
            .fetch_all(pool)
            .await
    }

    /// Find a live exercise by ID, whoever owns it.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Exercise>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM exercises WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, Exercise>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a custom exercise owned by `user_id`.
    ///
    /// Takes a connection so the insert can join a caller's transaction.
    pub async fn create(
        conn: &mut PgConnection,
        user_id: DbId,
        fields: &ExerciseFields,
    ) -> Result<Exercise, sqlx::Error> {
        let query = format!(
            "INSERT INTO exercises (user_id, is_preset, name, body_part, exercise_type)
             VALUES ($1, false, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Exercise>(&query)
            .bind(user_id)
            .bind(&fields.name)
            .bind(fields.body_part)
            .bind(fields.exercise_type)
            .fetch_one(conn)
            .await
    }

    /// Replace every editable field of a live custom exercise.
    ///
    /// Returns `None` if no live custom row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        fields: &ExerciseFields,
    ) -> Result<Option<Exercise>, sqlx::Error> {
        let query = format!(
            "UPDATE exercises SET
                name = $2,
                body_part = $3,
                exercise_type = $4
             WHERE id = $1 AND deleted_at IS NULL AND NOT is_preset
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Exercise>(&query)
            .bind(id)
            .bind(&fields.name)
            .bind(fields.body_part)
            .bind(fields.exercise_type)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a custom exercise. Returns `true` if a row was marked deleted.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE exercises SET deleted_at = NOW()
             WHERE id = $1 AND deleted_at IS NULL AND NOT is_preset",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
