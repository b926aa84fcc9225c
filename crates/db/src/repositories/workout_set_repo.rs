//! Repository for the `workout_sets` table.

use sqlx::{PgConnection, PgPool};
use trainlog_core::set_sync::{SetMeasurements, SetSyncPlan};
use trainlog_core::types::DbId;

use crate::models::workout_set::WorkoutSet;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, workout_id, weight, reps, distance, duration, speed, calories, created_at, updated_at";

/// Provides the set writes behind a workout's differential sync.
pub struct WorkoutSetRepo;

impl WorkoutSetRepo {
    /// Stored set ids of a workout, in creation order.
    pub async fn list_ids(conn: &mut PgConnection, workout_id: DbId) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar("SELECT id FROM workout_sets WHERE workout_id = $1 ORDER BY id ASC")
            .bind(workout_id)
            .fetch_all(conn)
            .await
    }

    /// Sets of several workouts, ordered by workout then creation.
    pub async fn list_by_workouts(
        pool: &PgPool,
        workout_ids: &[DbId],
    ) -> Result<Vec<WorkoutSet>, sqlx::Error> {
        if workout_ids.is_empty() {
            return Ok(vec![]);
        }
        let query = format!(
            "SELECT {COLUMNS} FROM workout_sets
             WHERE workout_id = ANY($1)
             ORDER BY workout_id, id ASC"
        );
        sqlx::query_as::<_, WorkoutSet>(&query)
            .bind(workout_ids)
            .fetch_all(pool)
            .await
    }

    /// Delete the given sets of a workout. Returns the number removed.
    pub async fn delete_many(
        conn: &mut PgConnection,
        workout_id: DbId,
        ids: &[DbId],
    ) -> Result<u64, sqlx::Error> {
        if ids.is_empty() {
            return Ok(0);
        }
        let result = sqlx::query("DELETE FROM workout_sets WHERE workout_id = $1 AND id = ANY($2)")
            .bind(workout_id)
            .bind(ids)
            .execute(conn)
            .await?;
        Ok(result.rows_affected())
    }

    /// Replace every measurement of one set. Returns `true` if it was found.
    pub async fn update(
        conn: &mut PgConnection,
        workout_id: DbId,
        id: DbId,
        m: &SetMeasurements,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE workout_sets SET
                weight = $3,
                reps = $4,
                distance = $5,
                duration = $6,
                speed = $7,
                calories = $8
             WHERE id = $1 AND workout_id = $2",
        )
        .bind(id)
        .bind(workout_id)
        .bind(m.weight)
        .bind(m.reps)
        .bind(m.distance)
        .bind(m.duration)
        .bind(m.speed)
        .bind(m.calories)
        .execute(conn)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Batch-insert new sets for a workout, keeping their input order.
    pub async fn create_many(
        conn: &mut PgConnection,
        workout_id: DbId,
        sets: &[SetMeasurements],
    ) -> Result<Vec<WorkoutSet>, sqlx::Error> {
        if sets.is_empty() {
            return Ok(vec![]);
        }

        let weights: Vec<Option<i32>> = sets.iter().map(|s| s.weight).collect();
        let reps: Vec<Option<i32>> = sets.iter().map(|s| s.reps).collect();
        let distances: Vec<Option<i32>> = sets.iter().map(|s| s.distance).collect();
        let durations: Vec<Option<i32>> = sets.iter().map(|s| s.duration).collect();
        let speeds: Vec<Option<i32>> = sets.iter().map(|s| s.speed).collect();
        let calories: Vec<Option<i32>> = sets.iter().map(|s| s.calories).collect();

        let query = format!(
            "INSERT INTO workout_sets
                (workout_id, weight, reps, distance, duration, speed, calories)
             SELECT $1, v.weight, v.reps, v.distance, v.duration, v.speed, v.calories
             FROM UNNEST($2::INT[], $3::INT[], $4::INT[], $5::INT[], $6::INT[], $7::INT[])
                  WITH ORDINALITY AS v(weight, reps, distance, duration, speed, calories, ord)
             ORDER BY v.ord
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WorkoutSet>(&query)
            .bind(workout_id)
            .bind(&weights)
            .bind(&reps)
            .bind(&distances)
            .bind(&durations)
            .bind(&speeds)
            .bind(&calories)
            .fetch_all(conn)
            .await
    }

    /// Apply a sync plan: deletions, then in-place updates, then creations.
    ///
    /// Fails with `RowNotFound` if a planned update no longer matches a set
    /// of this workout; the caller's transaction must then roll back.
    pub async fn apply_plan(
        conn: &mut PgConnection,
        workout_id: DbId,
        plan: &SetSyncPlan,
    ) -> Result<(), sqlx::Error> {
        Self::delete_many(&mut *conn, workout_id, &plan.delete).await?;
        for (id, measurements) in &plan.update {
            if !Self::update(&mut *conn, workout_id, *id, measurements).await? {
                return Err(sqlx::Error::RowNotFound);
            }
        }
        Self::create_many(&mut *conn, workout_id, &plan.create).await?;
        Ok(())
    }
}
