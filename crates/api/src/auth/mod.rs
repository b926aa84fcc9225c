//! Authentication primitives.
//!
//! - [`identity`] -- verifying identity-provider tokens.
//! - [`resolver`] -- mapping a verified identity to a local user.

pub mod identity;
pub mod resolver;
