//! Domain services.
//!
//! Each service owns a pool handle and enforces the ownership, visibility,
//! and ordering rules around the repository calls. Handlers only translate
//! HTTP to service calls.

pub mod catalog;
pub mod training;

pub use catalog::ExerciseCatalog;
pub use training::TrainingLog;
