//! Route definitions for the `/workouts` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::workout;
use crate::state::AppState;

/// Routes mounted at `/workouts`.
///
/// ```text
/// GET    /{id}                              -> get_by_id
/// PUT    /{id}                              -> update
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{id}", get(workout::get_by_id).put(workout::update))
}
