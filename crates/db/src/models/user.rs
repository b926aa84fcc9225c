//! User entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use trainlog_core::types::{DbId, Timestamp};

/// A user row from the `users` table.
///
/// Users are provisioned lazily the first time a verified identity with an
/// unseen `external_auth_id` makes a request.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: DbId,
    pub external_auth_id: String,
    pub email: Option<String>,
    pub name: Option<String>,
    pub image_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for provisioning a user from a verified identity.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub external_auth_id: String,
    pub email: Option<String>,
    pub name: Option<String>,
    pub image_url: Option<String>,
}
