//! Repository for the `workouts` table.
//!
//! `(training_session_id, order_index)` is unique, so a permutation of
//! indices is written by [`WorkoutRepo::renumber`] in two statements: first
//! every workout moves to its temporary negative index, then to its final
//! one. Both must run in the same transaction.

use std::collections::HashMap;

use sqlx::{PgConnection, PgPool};
use trainlog_core::ordering::IndexAssignment;
use trainlog_core::types::DbId;

use crate::models::workout::{Workout, WorkoutDetail, WorkoutWithExerciseRow};
use crate::models::workout_set::WorkoutSet;
use crate::repositories::WorkoutSetRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, training_session_id, exercise_id, order_index, note, created_at, updated_at";

/// Workout columns joined with the exercise columns of [`WorkoutWithExerciseRow`].
const DETAIL_COLUMNS: &str = "w.id, w.training_session_id, w.exercise_id, w.order_index, w.note, \
     w.created_at, w.updated_at, \
     e.name AS exercise_name, e.body_part AS exercise_body_part, \
     e.exercise_type, e.is_preset AS exercise_is_preset";

/// Provides CRUD and ordering operations for workouts.
pub struct WorkoutRepo;

impl WorkoutRepo {
    /// Find and row-lock a workout for the rest of the caller's transaction,
    /// provided its session belongs to `user_id`.
    pub async fn lock_owned(
        conn: &mut PgConnection,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<Workout>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM workouts
             WHERE id = $1
               AND training_session_id IN (SELECT id FROM training_sessions WHERE user_id = $2)
             FOR UPDATE"
        );
        sqlx::query_as::<_, Workout>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(conn)
            .await
    }

    /// List `(id, order_index)` for every workout in a session, by index.
    pub async fn list_order(
        conn: &mut PgConnection,
        session_id: DbId,
    ) -> Result<Vec<(DbId, i32)>, sqlx::Error> {
        sqlx::query_as::<_, (DbId, i32)>(
            "SELECT id, order_index FROM workouts
             WHERE training_session_id = $1
             ORDER BY order_index ASC",
        )
        .bind(session_id)
        .fetch_all(conn)
        .await
    }

    /// True if the session already holds a workout for this exercise.
    pub async fn exists_for_exercise(
        conn: &mut PgConnection,
        session_id: DbId,
        exercise_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT EXISTS(
                SELECT 1 FROM workouts WHERE training_session_id = $1 AND exercise_id = $2
             )",
        )
        .bind(session_id)
        .bind(exercise_id)
        .fetch_one(conn)
        .await
    }

    /// Highest `order_index` in a session, or `None` when it has no workouts.
    pub async fn max_order_index(
        conn: &mut PgConnection,
        session_id: DbId,
    ) -> Result<Option<i32>, sqlx::Error> {
        sqlx::query_scalar("SELECT MAX(order_index) FROM workouts WHERE training_session_id = $1")
            .bind(session_id)
            .fetch_one(conn)
            .await
    }

    /// Insert a workout at the given index with no note.
    pub async fn create(
        conn: &mut PgConnection,
        session_id: DbId,
        exercise_id: DbId,
        order_index: i32,
    ) -> Result<Workout, sqlx::Error> {
        let query = format!(
            "INSERT INTO workouts (training_session_id, exercise_id, order_index)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Workout>(&query)
            .bind(session_id)
            .bind(exercise_id)
            .bind(order_index)
            .fetch_one(conn)
            .await
    }

    /// Apply a two-pass renumbering plan to a session's workouts.
    ///
    /// Fails with `RowNotFound` if any assignment does not match a workout
    /// of `session_id`; the caller's transaction must then roll back.
    pub async fn renumber(
        conn: &mut PgConnection,
        session_id: DbId,
        plan: &[IndexAssignment],
    ) -> Result<(), sqlx::Error> {
        if plan.is_empty() {
            return Ok(());
        }

        let ids: Vec<DbId> = plan.iter().map(|a| a.workout_id).collect();
        let temporary: Vec<i32> = plan.iter().map(|a| a.temporary_index).collect();
        let finals: Vec<i32> = plan.iter().map(|a| a.final_index).collect();

        for indices in [&temporary, &finals] {
            let result = sqlx::query(
                "UPDATE workouts AS w SET order_index = v.order_index
                 FROM UNNEST($2::BIGINT[], $3::INT[]) AS v(id, order_index)
                 WHERE w.id = v.id AND w.training_session_id = $1",
            )
            .bind(session_id)
            .bind(&ids)
            .bind(indices)
            .execute(&mut *conn)
            .await?;

            if result.rows_affected() != plan.len() as u64 {
                return Err(sqlx::Error::RowNotFound);
            }
        }

        Ok(())
    }

    /// Replace a workout's note.
    pub async fn update_note(
        conn: &mut PgConnection,
        id: DbId,
        note: Option<&str>,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE workouts SET note = $2 WHERE id = $1")
            .bind(id)
            .bind(note)
            .execute(conn)
            .await?;
        Ok(())
    }

    /// Bump `updated_at` after the workout's sets changed.
    pub async fn touch(conn: &mut PgConnection, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE workouts SET updated_at = NOW() WHERE id = $1")
            .bind(id)
            .execute(conn)
            .await?;
        Ok(())
    }

    /// Delete a workout of the given session; its sets cascade.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(
        conn: &mut PgConnection,
        session_id: DbId,
        id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM workouts WHERE id = $1 AND training_session_id = $2")
            .bind(id)
            .bind(session_id)
            .execute(conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Load one workout with its exercise and sets.
    pub async fn find_detail(pool: &PgPool, id: DbId) -> Result<Option<WorkoutDetail>, sqlx::Error> {
        let query = format!(
            "SELECT {DETAIL_COLUMNS} FROM workouts w
             JOIN exercises e ON e.id = w.exercise_id
             WHERE w.id = $1"
        );
        let row = sqlx::query_as::<_, WorkoutWithExerciseRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        match row {
            Some(row) => {
                let sets = WorkoutSetRepo::list_by_workouts(pool, &[row.id]).await?;
                Ok(Some(row.into_detail(sets)))
            }
            None => Ok(None),
        }
    }

    /// Load the workouts of several sessions with their exercises and sets,
    /// keyed by session id. Each list is ordered by `order_index`.
    pub async fn details_by_sessions(
        pool: &PgPool,
        session_ids: &[DbId],
    ) -> Result<HashMap<DbId, Vec<WorkoutDetail>>, sqlx::Error> {
        if session_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let query = format!(
            "SELECT {DETAIL_COLUMNS} FROM workouts w
             JOIN exercises e ON e.id = w.exercise_id
             WHERE w.training_session_id = ANY($1)
             ORDER BY w.training_session_id, w.order_index ASC"
        );
        let rows = sqlx::query_as::<_, WorkoutWithExerciseRow>(&query)
            .bind(session_ids)
            .fetch_all(pool)
            .await?;

        let workout_ids: Vec<DbId> = rows.iter().map(|r| r.id).collect();
        let mut sets_by_workout: HashMap<DbId, Vec<WorkoutSet>> = HashMap::new();
        for set in WorkoutSetRepo::list_by_workouts(pool, &workout_ids).await? {
            sets_by_workout.entry(set.workout_id).or_default().push(set);
        }

        let mut by_session: HashMap<DbId, Vec<WorkoutDetail>> = HashMap::new();
        for row in rows {
            let sets = sets_by_workout.remove(&row.id).unwrap_or_default();
            by_session
                .entry(row.training_session_id)
                .or_default()
                .push(row.into_detail(sets));
        }
        Ok(by_session)
    }
}
