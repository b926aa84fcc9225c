//! Route definitions for the `/exercises` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::exercise;
use crate::state::AppState;

/// Routes mounted at `/exercises`.
///
/// ```text
/// GET    /                                  -> list
/// POST   /                                  -> create
/// GET    /{id}                              -> get_by_id
/// PUT    /{id}                              -> update
/// DELETE /{id}                              -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(exercise::list).post(exercise::create))
        .route(
            "/{id}",
            get(exercise::get_by_id)
                .put(exercise::update)
                .delete(exercise::delete),
        )
}
