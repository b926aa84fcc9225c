//! Training sessions and their ordered workouts and sets.
//!
//! Every write that touches a session's workout indices locks the session
//! row first (`SELECT ... FOR UPDATE`), so index allocation and renumbering
//! never interleave for the same session. Multi-statement writes run in one
//! transaction; an early return drops it and rolls back.

use sqlx::PgPool;
use trainlog_core::error::CoreError;
use trainlog_core::ordering::{is_contiguous, next_order_index, renumber_plan, validate_reorder};
use trainlog_core::paging::{resolve_offset, Paging, PAGE_SIZE};
use trainlog_core::set_sync::plan_set_sync;
use trainlog_core::training_session::validate_time_range;
use trainlog_core::types::DbId;
use trainlog_db::models::training_session::{
    CreateTrainingSession, TrainingSession, TrainingSessionDetail, TrainingSessionPage,
    UpdateTrainingSession,
};
use trainlog_db::models::workout::{ExerciseRef, UpdateWorkout, WorkoutDetail};
use trainlog_db::repositories::{TrainingSessionRepo, WorkoutRepo, WorkoutSetRepo};

use crate::error::{AppError, AppResult};
use crate::services::ExerciseCatalog;

/// The training session aggregate, scoped to the calling user.
///
/// Sessions of other users are reported as not found.
#[derive(Clone)]
pub struct TrainingLog {
    pool: PgPool,
    catalog: ExerciseCatalog,
}

impl TrainingLog {
    pub fn new(pool: PgPool, catalog: ExerciseCatalog) -> Self {
        Self { pool, catalog }
    }

    // -----------------------------------------------------------------------
    // Sessions
    // -----------------------------------------------------------------------

    pub async fn create_session(
        &self,
        user_id: DbId,
        input: &CreateTrainingSession,
    ) -> AppResult<TrainingSessionDetail> {
        let session = TrainingSessionRepo::create(&self.pool, user_id, input).await?;
        tracing::info!(user_id, session_id = session.id, "Training session created");
        Ok(TrainingSessionDetail {
            session,
            workouts: vec![],
        })
    }

    /// One page of the user's sessions, newest start first.
    pub async fn list_sessions(
        &self,
        user_id: DbId,
        offset: Option<i64>,
    ) -> AppResult<TrainingSessionPage> {
        let offset = resolve_offset(offset)?;
        let total = TrainingSessionRepo::count_by_user(&self.pool, user_id).await?;
        let sessions =
            TrainingSessionRepo::list_by_user(&self.pool, user_id, PAGE_SIZE, offset).await?;
        tracing::debug!(user_id, offset, count = sessions.len(), total, "Listed training sessions");

        Ok(TrainingSessionPage {
            training_sessions: self.with_workouts(sessions).await?,
            paging: Paging::new(total, offset),
        })
    }

    pub async fn get_session(&self, id: DbId, user_id: DbId) -> AppResult<TrainingSessionDetail> {
        let session = TrainingSessionRepo::find_owned(&self.pool, id, user_id)
            .await?
            .ok_or_else(|| session_not_found(id))?;
        self.with_workouts(vec![session])
            .await?
            .pop()
            .ok_or_else(|| session_not_found(id))
    }

    /// Update the session header. `performedEndAt` and `place` may be
    /// cleared with an explicit `null`.
    pub async fn update_session(
        &self,
        id: DbId,
        user_id: DbId,
        input: &UpdateTrainingSession,
    ) -> AppResult<TrainingSessionDetail> {
        let mut tx = self.pool.begin().await?;

        let current = TrainingSessionRepo::lock_owned(&mut tx, id, user_id)
            .await?
            .ok_or_else(|| session_not_found(id))?;

        let (start, end) = input.resulting_range(&current);
        validate_time_range(start, end)?;
        let place = match &input.place {
            Some(place) => place.as_deref(),
            None => current.place.as_deref(),
        };

        TrainingSessionRepo::update(&mut tx, id, start, end, place).await?;
        tx.commit().await?;

        tracing::info!(user_id, session_id = id, "Training session updated");
        self.get_session(id, user_id).await
    }

    /// Delete a session with all of its workouts and sets.
    pub async fn delete_session(&self, id: DbId, user_id: DbId) -> AppResult<()> {
        if !TrainingSessionRepo::delete(&self.pool, id, user_id).await? {
            return Err(session_not_found(id));
        }
        tracing::info!(user_id, session_id = id, "Training session deleted");
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Workouts
    // -----------------------------------------------------------------------

    /// Append a workout for `exercise` to the end of the session.
    ///
    /// Checked in order: the session is the caller's (NOT_FOUND), the
    /// exercise exists (NOT_FOUND) and may be used (FORBIDDEN), and the
    /// session does not already hold it (CONFLICT). A new exercise is
    /// created in the same transaction as the workout, so a failed add
    /// leaves no exercise behind.
    pub async fn add_workout(
        &self,
        session_id: DbId,
        user_id: DbId,
        exercise: &ExerciseRef,
    ) -> AppResult<WorkoutDetail> {
        TrainingSessionRepo::find_owned(&self.pool, session_id, user_id)
            .await?
            .ok_or_else(|| session_not_found(session_id))?;

        if let ExerciseRef::Existing { id } = exercise {
            self.catalog.find_for_use(*id, user_id).await?;
        }

        let mut tx = self.pool.begin().await?;

        TrainingSessionRepo::lock_owned(&mut tx, session_id, user_id)
            .await?
            .ok_or_else(|| session_not_found(session_id))?;

        let exercise_id = match exercise {
            ExerciseRef::Existing { id } => *id,
            ExerciseRef::New { exercise } => {
                ExerciseCatalog::create_on(&mut tx, user_id, exercise).await?.id
            }
        };

        if WorkoutRepo::exists_for_exercise(&mut tx, session_id, exercise_id).await? {
            return Err(CoreError::Conflict(
                "This exercise has already been added to the training session".into(),
            )
            .into());
        }

        let max = WorkoutRepo::max_order_index(&mut tx, session_id).await?;
        let workout =
            WorkoutRepo::create(&mut tx, session_id, exercise_id, next_order_index(max)).await?;
        tx.commit().await?;

        tracing::info!(
            user_id,
            session_id,
            workout_id = workout.id,
            exercise_id,
            order_index = workout.order_index,
            "Workout added",
        );
        self.load_workout(workout.id).await
    }

    /// Reassign indices so `ordered_ids[i]` sits at `i`.
    ///
    /// `ordered_ids` must be exactly a permutation of the session's current
    /// workout ids.
    pub async fn reorder_workouts(
        &self,
        session_id: DbId,
        user_id: DbId,
        ordered_ids: &[DbId],
    ) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        TrainingSessionRepo::lock_owned(&mut tx, session_id, user_id)
            .await?
            .ok_or_else(|| session_not_found(session_id))?;

        let existing: Vec<DbId> = WorkoutRepo::list_order(&mut tx, session_id)
            .await?
            .into_iter()
            .map(|(id, _)| id)
            .collect();
        validate_reorder(&existing, ordered_ids)?;

        WorkoutRepo::renumber(&mut tx, session_id, &renumber_plan(ordered_ids)).await?;
        tx.commit().await?;

        tracing::info!(user_id, session_id, count = ordered_ids.len(), "Workouts reordered");
        Ok(())
    }

    pub async fn get_workout(&self, id: DbId, user_id: DbId) -> AppResult<WorkoutDetail> {
        let detail = self.load_workout(id).await?;
        // Ownership is decided by the parent session.
        TrainingSessionRepo::find_owned(&self.pool, detail.training_session_id, user_id)
            .await?
            .ok_or_else(|| workout_not_found(id))?;
        Ok(detail)
    }

    /// Update a workout's note and, when `sets` is given, synchronise its
    /// sets to exactly that list.
    pub async fn update_workout(
        &self,
        id: DbId,
        user_id: DbId,
        input: &UpdateWorkout,
    ) -> AppResult<WorkoutDetail> {
        let mut tx = self.pool.begin().await?;

        WorkoutRepo::lock_owned(&mut tx, id, user_id)
            .await?
            .ok_or_else(|| workout_not_found(id))?;

        let plan = match &input.sets {
            Some(incoming) => {
                let existing = WorkoutSetRepo::list_ids(&mut tx, id).await?;
                Some(plan_set_sync(&existing, incoming)?)
            }
            None => None,
        };

        if let Some(note) = &input.note {
            WorkoutRepo::update_note(&mut tx, id, note.as_deref()).await?;
        }

        if let Some(plan) = &plan {
            WorkoutSetRepo::apply_plan(&mut tx, id, plan).await?;
            if input.note.is_none() && !plan.is_empty() {
                WorkoutRepo::touch(&mut tx, id).await?;
            }
            tracing::info!(
                user_id,
                workout_id = id,
                deleted = plan.delete.len(),
                updated = plan.update.len(),
                created = plan.create.len(),
                "Workout sets synchronised",
            );
        }

        tx.commit().await?;
        self.load_workout(id).await
    }

    /// Delete a workout and close the gap it leaves in the session order.
    pub async fn delete_workout(
        &self,
        session_id: DbId,
        workout_id: DbId,
        user_id: DbId,
    ) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        TrainingSessionRepo::lock_owned(&mut tx, session_id, user_id)
            .await?
            .ok_or_else(|| session_not_found(session_id))?;

        if !WorkoutRepo::delete(&mut tx, session_id, workout_id).await? {
            return Err(workout_not_found(workout_id));
        }

        let remaining = WorkoutRepo::list_order(&mut tx, session_id).await?;
        let indices: Vec<i32> = remaining.iter().map(|(_, idx)| *idx).collect();
        if !is_contiguous(&indices) {
            let ids: Vec<DbId> = remaining.iter().map(|(id, _)| *id).collect();
            WorkoutRepo::renumber(&mut tx, session_id, &renumber_plan(&ids)).await?;
        }
        tx.commit().await?;

        tracing::info!(user_id, session_id, workout_id, "Workout deleted");
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Read helpers
    // -----------------------------------------------------------------------

    async fn with_workouts(
        &self,
        sessions: Vec<TrainingSession>,
    ) -> AppResult<Vec<TrainingSessionDetail>> {
        let ids: Vec<DbId> = sessions.iter().map(|s| s.id).collect();
        let mut workouts = WorkoutRepo::details_by_sessions(&self.pool, &ids).await?;

        Ok(sessions
            .into_iter()
            .map(|session| TrainingSessionDetail {
                workouts: workouts.remove(&session.id).unwrap_or_default(),
                session,
            })
            .collect())
    }

    async fn load_workout(&self, id: DbId) -> AppResult<WorkoutDetail> {
        WorkoutRepo::find_detail(&self.pool, id)
            .await?
            .ok_or_else(|| workout_not_found(id))
    }
}

fn session_not_found(id: DbId) -> AppError {
    CoreError::NotFound {
        entity: "TrainingSession",
        id,
    }
    .into()
}

fn workout_not_found(id: DbId) -> AppError {
    CoreError::NotFound {
        entity: "Workout",
        id,
    }
    .into()
}
