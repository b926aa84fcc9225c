//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - `Deserialize` request DTOs for inserts and updates
//! - Enriched read models assembled by the repositories where a response
//!   nests related rows

pub mod exercise;
pub mod training_session;
pub mod user;
pub mod workout;
pub mod workout_set;
