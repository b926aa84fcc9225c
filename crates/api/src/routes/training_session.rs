//! Route definitions for the `/training-sessions` resource.
//!
//! Also nests the workout collection of a session under
//! `/training-sessions/{id}/workouts`.

use axum::routing::{delete, get, patch, post};
use axum::Router;

use crate::handlers::training_session;
use crate::state::AppState;

/// Routes mounted at `/training-sessions`.
///
/// ```text
/// GET    /                                  -> list
/// POST   /                                  -> create
/// GET    /{id}                              -> get_by_id
/// PUT    /{id}                              -> update
/// DELETE /{id}                              -> delete
///
/// POST   /{id}/workouts                     -> add_workout
/// PATCH  /{id}/workouts/reorder             -> reorder_workouts
/// DELETE /{id}/workouts/{workout_id}        -> delete_workout
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(training_session::list).post(training_session::create),
        )
        .route(
            "/{id}",
            get(training_session::get_by_id)
                .put(training_session::update)
                .delete(training_session::delete),
        )
        .route("/{id}/workouts", post(training_session::add_workout))
        .route(
            "/{id}/workouts/reorder",
            patch(training_session::reorder_workouts),
        )
        .route(
            "/{id}/workouts/{workout_id}",
            delete(training_session::delete_workout),
        )
}
