//! Handlers for the `/workouts` resource.

use axum::extract::State;
use axum::Json;
use trainlog_core::types::DbId;
use trainlog_db::models::workout::{UpdateWorkout, WorkoutDetail};

use crate::error::AppResult;
use crate::extract::{AppJson, AppPath};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /api/v1/workouts/{id}
pub async fn get_by_id(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<WorkoutDetail>> {
    let workout = state.training.get_workout(id, auth.user_id).await?;
    Ok(Json(workout))
}

/// PUT /api/v1/workouts/{id}
///
/// `note` absent leaves it alone, `null` clears it. `sets`, when present,
/// is the complete list the workout should hold afterwards.
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateWorkout>,
) -> AppResult<Json<WorkoutDetail>> {
    let workout = state.training.update_workout(id, auth.user_id, &input).await?;
    Ok(Json(workout))
}
