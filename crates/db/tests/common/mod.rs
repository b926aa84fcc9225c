//! Fixtures shared by the repository integration tests.

#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use sqlx::PgPool;
use trainlog_db::models::exercise::{Exercise, ExerciseFields};
use trainlog_db::models::training_session::{CreateTrainingSession, TrainingSession};
use trainlog_db::models::user::{CreateUser, User};
use trainlog_db::models::workout::Workout;
use trainlog_db::repositories::{ExerciseRepo, TrainingSessionRepo, UserRepo, WorkoutRepo};

pub async fn user(pool: &PgPool, sub: &str) -> User {
    UserRepo::create(
        pool,
        &CreateUser {
            external_auth_id: sub.to_string(),
            email: Some(format!("{sub}@example.com")),
            name: Some(sub.to_string()),
            image_url: None,
        },
    )
    .await
    .unwrap()
}

pub fn strength(name: &str) -> ExerciseFields {
    ExerciseFields {
        name: name.to_string(),
        body_part: Some(0),
        exercise_type: 0,
    }
}

pub async fn exercise(pool: &PgPool, user_id: i64, name: &str) -> Exercise {
    let mut conn = pool.acquire().await.unwrap();
    ExerciseRepo::create(&mut conn, user_id, &strength(name)).await.unwrap()
}

pub async fn session(pool: &PgPool, user_id: i64) -> TrainingSession {
    let input = CreateTrainingSession {
        performed_start_at: Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap(),
    };
    TrainingSessionRepo::create(pool, user_id, &input).await.unwrap()
}

/// Append a workout the way the service does: at `max + 1`.
pub async fn workout(pool: &PgPool, session_id: i64, exercise_id: i64) -> Workout {
    let mut conn = pool.acquire().await.unwrap();
    let max = WorkoutRepo::max_order_index(&mut conn, session_id).await.unwrap();
    let index = trainlog_core::ordering::next_order_index(max);
    WorkoutRepo::create(&mut conn, session_id, exercise_id, index)
        .await
        .unwrap()
}

pub async fn order(pool: &PgPool, session_id: i64) -> Vec<(i64, i32)> {
    let mut conn = pool.acquire().await.unwrap();
    WorkoutRepo::list_order(&mut conn, session_id).await.unwrap()
}
