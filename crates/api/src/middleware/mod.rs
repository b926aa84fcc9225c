//! Request extractors enforcing authentication.
//!
//! - [`auth::AuthUser`] -- resolves the Bearer token to a local user.

pub mod auth;
