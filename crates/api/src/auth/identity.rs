//! Identity-provider token verification.
//!
//! The server never issues tokens. Clients sign in with the identity
//! provider and send its HS256-signed ID token as a Bearer credential; the
//! `sub` claim is the stable external id a local user is keyed on.

use async_trait::async_trait;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::Deserialize;
use trainlog_core::error::CoreError;

/// Configuration for identity token verification.
#[derive(Debug, Clone)]
pub struct IdentityConfig {
    /// HMAC-SHA256 secret shared with the identity provider.
    pub secret: String,
    /// Required `iss` claim, if set.
    pub issuer: Option<String>,
    /// Required `aud` claim, if set.
    pub audience: Option<String>,
}

impl IdentityConfig {
    /// Load identity configuration from environment variables.
    ///
    /// | Env Var             | Required | Default |
    /// |---------------------|----------|---------|
    /// | `AUTH_JWT_SECRET`   | **yes**  | --      |
    /// | `AUTH_JWT_ISSUER`   | no       | unset   |
    /// | `AUTH_JWT_AUDIENCE` | no       | unset   |
    ///
    /// # Panics
    ///
    /// Panics if `AUTH_JWT_SECRET` is not set or is empty.
    pub fn from_env() -> Self {
        let secret = std::env::var("AUTH_JWT_SECRET")
            .expect("AUTH_JWT_SECRET must be set in the environment");
        assert!(!secret.is_empty(), "AUTH_JWT_SECRET must not be empty");

        let optional = |key: &str| std::env::var(key).ok().filter(|v| !v.is_empty());

        Self {
            secret,
            issuer: optional("AUTH_JWT_ISSUER"),
            audience: optional("AUTH_JWT_AUDIENCE"),
        }
    }
}

/// The profile an identity provider vouches for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedIdentity {
    pub external_auth_id: String,
    pub email: Option<String>,
    pub name: Option<String>,
    pub image_url: Option<String>,
}

/// Verifies a bearer token and returns the identity it carries.
///
/// Fails with [`CoreError::Unauthorized`] for any token it does not accept.
#[async_trait]
pub trait IdentityVerifier: Send + Sync {
    async fn verify(&self, token: &str) -> Result<VerifiedIdentity, CoreError>;
}

/// Claims read from an identity-provider ID token.
#[derive(Debug, Deserialize)]
struct IdTokenClaims {
    sub: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    picture: Option<String>,
}

/// [`IdentityVerifier`] for HS256-signed ID tokens.
pub struct JwtIdentityVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl JwtIdentityVerifier {
    pub fn new(config: &IdentityConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        match &config.issuer {
            Some(issuer) => validation.set_issuer(&[issuer]),
            None => validation.iss = None,
        }
        match &config.audience {
            Some(audience) => validation.set_audience(&[audience]),
            None => validation.validate_aud = false,
        }

        Self {
            key: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
        }
    }
}

#[async_trait]
impl IdentityVerifier for JwtIdentityVerifier {
    async fn verify(&self, token: &str) -> Result<VerifiedIdentity, CoreError> {
        let data = decode::<IdTokenClaims>(token, &self.key, &self.validation).map_err(|e| {
            tracing::debug!(error = %e, "Identity token rejected");
            CoreError::Unauthorized("Invalid or expired token".into())
        })?;

        let claims = data.claims;
        if claims.sub.is_empty() {
            return Err(CoreError::Unauthorized("Token has no subject".into()));
        }

        Ok(VerifiedIdentity {
            external_auth_id: claims.sub,
            email: claims.email,
            name: claims.name,
            image_url: claims.picture,
        })
    }
}
