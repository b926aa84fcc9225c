//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods.
//! Plain reads take `&PgPool`; steps of a multi-statement write take
//! `&mut PgConnection` so the caller can run them inside one transaction
//! (`&mut *tx`).

pub mod exercise_repo;
pub mod training_session_repo;
pub mod user_repo;
pub mod workout_repo;
pub mod workout_set_repo;

pub use exercise_repo::ExerciseRepo;
pub use training_session_repo::TrainingSessionRepo;
pub use user_repo::UserRepo;
pub use workout_repo::WorkoutRepo;
pub use workout_set_repo::WorkoutSetRepo;
