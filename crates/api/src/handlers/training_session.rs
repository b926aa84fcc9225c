//! Handlers for the `/training-sessions` resource and the workouts nested
//! under it.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use trainlog_core::types::DbId;
use trainlog_db::models::training_session::{
    CreateTrainingSession, TrainingSessionDetail, TrainingSessionPage, UpdateTrainingSession,
};
use trainlog_db::models::workout::{ExerciseRef, ReorderWorkouts, WorkoutDetail};

use crate::error::AppResult;
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::middleware::auth::AuthUser;
use crate::query::OffsetParams;
use crate::response::MessageResponse;
use crate::state::AppState;

/// GET /api/v1/training-sessions?offset=N
pub async fn list(
    auth: AuthUser,
    State(state): State<AppState>,
    AppQuery(params): AppQuery<OffsetParams>,
) -> AppResult<Json<TrainingSessionPage>> {
    let page = state.training.list_sessions(auth.user_id, params.offset).await?;
    Ok(Json(page))
}

/// POST /api/v1/training-sessions
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateTrainingSession>,
) -> AppResult<(StatusCode, Json<TrainingSessionDetail>)> {
    let session = state.training.create_session(auth.user_id, &input).await?;
    Ok((StatusCode::CREATED, Json(session)))
}

/// GET /api/v1/training-sessions/{id}
pub async fn get_by_id(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<TrainingSessionDetail>> {
    let session = state.training.get_session(id, auth.user_id).await?;
    Ok(Json(session))
}

/// PUT /api/v1/training-sessions/{id}
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateTrainingSession>,
) -> AppResult<Json<TrainingSessionDetail>> {
    let session = state.training.update_session(id, auth.user_id, &input).await?;
    Ok(Json(session))
}

/// DELETE /api/v1/training-sessions/{id}
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    state.training.delete_session(id, auth.user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Workouts nested under a session
// ---------------------------------------------------------------------------

/// POST /api/v1/training-sessions/{id}/workouts
///
/// Body is either `{"exerciseId": n}` or `{"exercise": {...}}` to create a
/// custom exercise on the fly.
pub async fn add_workout(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(session_id): AppPath<DbId>,
    AppJson(exercise): AppJson<ExerciseRef>,
) -> AppResult<(StatusCode, Json<WorkoutDetail>)> {
    let workout = state
        .training
        .add_workout(session_id, auth.user_id, &exercise)
        .await?;
    Ok((StatusCode::CREATED, Json(workout)))
}

/// PATCH /api/v1/training-sessions/{id}/workouts/reorder
pub async fn reorder_workouts(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(session_id): AppPath<DbId>,
    AppJson(input): AppJson<ReorderWorkouts>,
) -> AppResult<Json<MessageResponse>> {
    state
        .training
        .reorder_workouts(session_id, auth.user_id, &input.workout_ids)
        .await?;
    Ok(Json(MessageResponse {
        message: "Workouts reordered",
    }))
}

/// DELETE /api/v1/training-sessions/{id}/workouts/{workout_id}
pub async fn delete_workout(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath((session_id, workout_id)): AppPath<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    state
        .training
        .delete_workout(session_id, workout_id, auth.user_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
