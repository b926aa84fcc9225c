//! Request handlers.
//!
//! Each submodule maps one resource's HTTP requests onto the domain
//! services in [`crate::services`]. Every handler requires an [`AuthUser`]
//! and passes its id down; the services decide ownership.
//!
//! [`AuthUser`]: crate::middleware::auth::AuthUser

pub mod exercise;
pub mod training_session;
pub mod user;
pub mod workout;
