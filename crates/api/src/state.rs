use std::sync::Arc;

use crate::auth::resolver::IdentityResolver;
use crate::services::{ExerciseCatalog, TrainingLog};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: trainlog_db::DbPool,
    /// Maps bearer tokens to local users, provisioning them on first sight.
    pub identity: Arc<IdentityResolver>,
    /// Preset and custom exercise catalog.
    pub catalog: ExerciseCatalog,
    /// Training sessions, their workouts, and sets.
    pub training: TrainingLog,
}

impl AppState {
    /// Wire the domain services onto a pool and an identity resolver.
    pub fn new(pool: trainlog_db::DbPool, identity: Arc<IdentityResolver>) -> Self {
        let catalog = ExerciseCatalog::new(pool.clone());
        let training = TrainingLog::new(pool.clone(), catalog.clone());
        Self {
            pool,
            identity,
            catalog,
            training,
        }
    }
}
