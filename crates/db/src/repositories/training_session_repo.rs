//! Repository for the `training_sessions` table.
//!
//! Every query is scoped by `user_id`; a session owned by someone else is
//! indistinguishable from a missing one.

use sqlx::{PgConnection, PgPool};
use trainlog_core::types::{DbId, Timestamp};

use crate::models::training_session::{CreateTrainingSession, TrainingSession};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, user_id, performed_start_at, performed_end_at, place, created_at, updated_at";

/// Provides CRUD operations for training sessions.
pub struct TrainingSessionRepo;

impl TrainingSessionRepo {
    /// Insert a new session, returning the created row.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateTrainingSession,
    ) -> Result<TrainingSession, sqlx::Error> {
        let query = format!(
            "INSERT INTO training_sessions (user_id, performed_start_at)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TrainingSession>(&query)
            .bind(user_id)
            .bind(input.performed_start_at)
            .fetch_one(pool)
            .await
    }

    /// Find a session by ID if it belongs to `user_id`.
    pub async fn find_owned(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<TrainingSession>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM training_sessions WHERE id = $1 AND user_id = $2");
        sqlx::query_as::<_, TrainingSession>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Find and row-lock a session owned by `user_id` for the rest of the
    /// caller's transaction.
    ///
    /// Serialises writers that allocate or renumber the session's workout
    /// indices.
    pub async fn lock_owned(
        conn: &mut PgConnection,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<TrainingSession>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM training_sessions
             WHERE id = $1 AND user_id = $2
             FOR UPDATE"
        );
        sqlx::query_as::<_, TrainingSession>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(conn)
            .await
    }

    /// List one page of a user's sessions, newest start first.
    pub async fn list_by_user(
        pool: &PgPool,
        user_id: DbId,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<TrainingSession>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM training_sessions
             WHERE user_id = $1
             ORDER BY performed_start_at DESC, id DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, TrainingSession>(&query)
            .bind(user_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count all sessions owned by a user.
    pub async fn count_by_user(pool: &PgPool, user_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM training_sessions WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(pool)
            .await
    }

    /// Write the header fields of a session. The caller resolves which values
    /// to keep; every column given here is written.
    pub async fn update(
        conn: &mut PgConnection,
        id: DbId,
        performed_start_at: Timestamp,
        performed_end_at: Option<Timestamp>,
        place: Option<&str>,
    ) -> Result<TrainingSession, sqlx::Error> {
        let query = format!(
            "UPDATE training_sessions SET
                performed_start_at = $2,
                performed_end_at = $3,
                place = $4
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TrainingSession>(&query)
            .bind(id)
            .bind(performed_start_at)
            .bind(performed_end_at)
            .bind(place)
            .fetch_one(conn)
            .await
    }

    /// Delete a session together with its workouts and sets.
    ///
    /// Returns `true` if a row owned by `user_id` was removed.
    pub async fn delete(pool: &PgPool, id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM training_sessions WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
