//! The exercise catalog: shared presets plus each user's custom exercises.

use sqlx::{PgConnection, PgPool};
use trainlog_core::error::CoreError;
use trainlog_core::exercise::{self, ExerciseOwnership};
use trainlog_core::types::DbId;
use trainlog_db::models::exercise::{
    CreateExercise, Exercise, ExerciseFields, ExerciseFilter, UpdateExercise,
};
use trainlog_db::repositories::ExerciseRepo;

use crate::error::AppResult;

/// Catalog operations, scoped to the calling user.
///
/// A custom exercise of another user is reported as not found. Presets are
/// visible to everyone and cannot be changed through the catalog.
#[derive(Clone)]
pub struct ExerciseCatalog {
    pool: PgPool,
}

impl ExerciseCatalog {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Presets first, then the user's custom exercises, each by name.
    pub async fn list(&self, user_id: DbId, filter: &ExerciseFilter) -> AppResult<Vec<Exercise>> {
        exercise::validate_body_part(filter.body_part)?;
        let exercises = ExerciseRepo::list_visible(&self.pool, user_id, filter).await?;
        tracing::debug!(user_id, count = exercises.len(), "Listed exercises");
        Ok(exercises)
    }

    pub async fn get_by_id(&self, id: DbId, user_id: DbId) -> AppResult<Exercise> {
        match ExerciseRepo::find_by_id(&self.pool, id).await? {
            Some(e) if exercise::is_visible_to(&e, user_id) => Ok(e),
            _ => Err(not_found(id)),
        }
    }

    /// Create a custom exercise owned by `user_id`.
    pub async fn create(&self, user_id: DbId, input: &CreateExercise) -> AppResult<Exercise> {
        let mut conn = self.pool.acquire().await?;
        Self::create_on(&mut conn, user_id, input).await
    }

    /// [`Self::create`] on a caller-provided connection, typically an open
    /// transaction.
    pub async fn create_on(
        conn: &mut PgConnection,
        user_id: DbId,
        input: &CreateExercise,
    ) -> AppResult<Exercise> {
        let fields = ExerciseFields::try_from(input)?;
        let created = ExerciseRepo::create(conn, user_id, &fields).await?;
        tracing::info!(user_id, exercise_id = created.id, "Exercise created");
        Ok(created)
    }

    /// Replace the name, body part, and type of a custom exercise.
    pub async fn update(
        &self,
        id: DbId,
        user_id: DbId,
        input: &UpdateExercise,
    ) -> AppResult<Exercise> {
        let current = self.get_by_id(id, user_id).await?;
        exercise::ensure_not_preset(&current, "edited")?;

        let fields = ExerciseFields::try_from(input)?;
        let updated = ExerciseRepo::update(&self.pool, id, &fields)
            .await?
            .ok_or_else(|| not_found(id))?;
        tracing::info!(user_id, exercise_id = id, "Exercise updated");
        Ok(updated)
    }

    /// Soft-delete a custom exercise. Workouts already using it keep it.
    pub async fn soft_delete(&self, id: DbId, user_id: DbId) -> AppResult<()> {
        let current = self.get_by_id(id, user_id).await?;
        exercise::ensure_not_preset(&current, "deleted")?;

        if !ExerciseRepo::soft_delete(&self.pool, id).await? {
            return Err(not_found(id));
        }
        tracing::info!(user_id, exercise_id = id, "Exercise deleted");
        Ok(())
    }

    /// Look up an exercise to attach to one of `user_id`'s sessions.
    ///
    /// A missing or deleted exercise is NOT_FOUND; another user's custom
    /// exercise is FORBIDDEN.
    pub async fn find_for_use(&self, id: DbId, user_id: DbId) -> AppResult<Exercise> {
        let found = ExerciseRepo::find_by_id(&self.pool, id)
            .await?
            .filter(|e| !e.is_deleted())
            .ok_or_else(|| not_found(id))?;
        exercise::ensure_usable_by(&found, user_id)?;
        Ok(found)
    }
}

fn not_found(id: DbId) -> crate::error::AppError {
    CoreError::NotFound {
        entity: "Exercise",
        id,
    }
    .into()
}
