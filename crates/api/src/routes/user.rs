//! Route definitions for the `/user` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::user;
use crate::state::AppState;

/// Routes mounted at `/user`.
///
/// ```text
/// GET    /                                  -> me
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(user::me))
}
