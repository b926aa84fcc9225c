//! Repository for the `users` table.

use sqlx::PgPool;

use crate::models::user::{CreateUser, User};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, external_auth_id, email, name, image_url, created_at, updated_at";

/// Provides lookup and lazy provisioning for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a user for a newly seen external identity, returning the row.
    ///
    /// If a concurrent request provisioned the same `external_auth_id` first,
    /// that row is returned untouched.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (external_auth_id, email, name, image_url)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT ON CONSTRAINT uq_users_external_auth_id DO NOTHING
             RETURNING {COLUMNS}"
        );
        let inserted = sqlx::query_as::<_, User>(&query)
            .bind(&input.external_auth_id)
            .bind(&input.email)
            .bind(&input.name)
            .bind(&input.image_url)
            .fetch_optional(pool)
            .await?;

        match inserted {
            Some(user) => Ok(user),
            None => Self::find_by_external_auth_id(pool, &input.external_auth_id)
                .await?
                .ok_or(sqlx::Error::RowNotFound),
        }
    }

    /// Find a user by the identity provider's subject id.
    pub async fn find_by_external_auth_id(
        pool: &PgPool,
        external_auth_id: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE external_auth_id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(external_auth_id)
            .fetch_optional(pool)
            .await
    }
}
