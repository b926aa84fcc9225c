//! Handlers for the `/exercises` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use trainlog_core::types::DbId;
use trainlog_db::models::exercise::{CreateExercise, Exercise, ExerciseFilter, UpdateExercise};

use crate::error::AppResult;
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /api/v1/exercises?name=&bodyPart=
pub async fn list(
    auth: AuthUser,
    State(state): State<AppState>,
    AppQuery(filter): AppQuery<ExerciseFilter>,
) -> AppResult<Json<Vec<Exercise>>> {
    let exercises = state.catalog.list(auth.user_id, &filter).await?;
    Ok(Json(exercises))
}

/// POST /api/v1/exercises
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateExercise>,
) -> AppResult<(StatusCode, Json<Exercise>)> {
    let exercise = state.catalog.create(auth.user_id, &input).await?;
    Ok((StatusCode::CREATED, Json(exercise)))
}

/// GET /api/v1/exercises/{id}
pub async fn get_by_id(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Exercise>> {
    let exercise = state.catalog.get_by_id(id, auth.user_id).await?;
    Ok(Json(exercise))
}

/// PUT /api/v1/exercises/{id}
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateExercise>,
) -> AppResult<Json<Exercise>> {
    let exercise = state.catalog.update(id, auth.user_id, &input).await?;
    Ok(Json(exercise))
}

/// DELETE /api/v1/exercises/{id}
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    state.catalog.soft_delete(id, auth.user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
