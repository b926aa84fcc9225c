use axum::Json;
use trainlog_db::models::user::User;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;

/// GET /api/v1/user
///
/// Returns the caller, provisioning the user row on first sight.
pub async fn me(auth: AuthUser) -> AppResult<Json<User>> {
    Ok(Json(auth.user))
}
