//! Maps identity-provider tokens to local users.

use std::sync::Arc;

use sqlx::PgPool;
use trainlog_db::models::user::{CreateUser, User};
use trainlog_db::repositories::UserRepo;

use crate::auth::identity::{IdentityVerifier, VerifiedIdentity};
use crate::error::AppResult;

/// Display name given to a user whose identity carries neither a name nor
/// an email.
const FALLBACK_NAME: &str = "Unknown";

/// Resolves bearer tokens to users, creating the user the first time an
/// external identity is seen.
pub struct IdentityResolver {
    pool: PgPool,
    verifier: Arc<dyn IdentityVerifier>,
}

impl IdentityResolver {
    pub fn new(pool: PgPool, verifier: Arc<dyn IdentityVerifier>) -> Self {
        Self { pool, verifier }
    }

    /// Verify `token` and return the matching local user.
    pub async fn resolve_user(&self, token: &str) -> AppResult<User> {
        let identity = self.verifier.verify(token).await?;

        if let Some(user) =
            UserRepo::find_by_external_auth_id(&self.pool, &identity.external_auth_id).await?
        {
            return Ok(user);
        }

        let user = UserRepo::create(&self.pool, &new_user(identity)).await?;
        tracing::info!(user_id = user.id, "Provisioned user for new identity");
        Ok(user)
    }
}

fn new_user(identity: VerifiedIdentity) -> CreateUser {
    let name = identity
        .name
        .clone()
        .or_else(|| identity.email.clone())
        .unwrap_or_else(|| FALLBACK_NAME.to_string());

    CreateUser {
        external_auth_id: identity.external_auth_id,
        email: identity.email,
        name: Some(name),
        image_url: identity.image_url,
    }
}
