pub mod exercise;
pub mod health;
pub mod training_session;
pub mod user;
pub mod workout;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /user                                            current user
///
/// /exercises                                       list (?name=&bodyPart=), create
/// /exercises/{id}                                  get, update, soft delete
///
/// /training-sessions                               list (?offset=), create
/// /training-sessions/{id}                          get, update, delete
/// /training-sessions/{id}/workouts                 add workout
/// /training-sessions/{id}/workouts/reorder         reorder workouts (PATCH)
/// /training-sessions/{id}/workouts/{workout_id}    delete workout
///
/// /workouts/{id}                                   get, update note + sets
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/user", user::router())
        .nest("/exercises", exercise::router())
        .nest("/training-sessions", training_session::router())
        .nest("/workouts", workout::router())
}
