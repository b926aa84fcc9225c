//! Integration tests for applying a set sync plan.

mod common;

use sqlx::PgPool;
use trainlog_core::set_sync::{plan_set_sync, IncomingSet, SetMeasurements};
use trainlog_db::repositories::{WorkoutRepo, WorkoutSetRepo};

fn strength(weight: i32, reps: i32) -> SetMeasurements {
    SetMeasurements {
        weight: Some(weight),
        reps: Some(reps),
        ..Default::default()
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn test_plan_updates_creates_and_deletes(pool: PgPool) {
    let alice = common::user(&pool, "alice").await;
    let session = common::session(&pool, alice.id).await;
    let exercise = common::exercise(&pool, alice.id, "Bench").await;
    let workout = common::workout(&pool, session.id, exercise.id).await;

    let mut tx = pool.begin().await.unwrap();
    let created = WorkoutSetRepo::create_many(&mut tx, workout.id, &[strength(60_000, 10), strength(60_000, 9)])
        .await
        .unwrap();
    tx.commit().await.unwrap();
    let (s1, s2) = (created[0].id, created[1].id);
    assert!(s1 < s2);

    let incoming = [
        IncomingSet { id: Some(s1), measurements: strength(70_000, 8) },
        IncomingSet { id: None, measurements: strength(80_000, 5) },
    ];
    let mut tx = pool.begin().await.unwrap();
    let existing = WorkoutSetRepo::list_ids(&mut tx, workout.id).await.unwrap();
    let plan = plan_set_sync(&existing, &incoming).unwrap();
    WorkoutSetRepo::apply_plan(&mut tx, workout.id, &plan).await.unwrap();
    tx.commit().await.unwrap();

    let detail = WorkoutRepo::find_detail(&pool, workout.id).await.unwrap().unwrap();
    assert_eq!(detail.sets.len(), 2);
    assert_eq!(detail.sets[0].id, s1);
    assert_eq!(detail.sets[0].measurements(), strength(70_000, 8));
    assert_eq!(detail.sets[1].measurements(), strength(80_000, 5));
    assert!(detail.sets.iter().all(|s| s.id != s2));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_replaces_every_field(pool: PgPool) {
    let alice = common::user(&pool, "alice").await;
    let session = common::session(&pool, alice.id).await;
    let exercise = common::exercise(&pool, alice.id, "Bike").await;
    let workout = common::workout(&pool, session.id, exercise.id).await;

    let cardio = SetMeasurements {
        distance: Some(5000),
        duration: Some(1800),
        speed: Some(100),
        calories: Some(300),
        ..Default::default()
    };
    let mut conn = pool.acquire().await.unwrap();
    let created = WorkoutSetRepo::create_many(&mut conn, workout.id, &[cardio]).await.unwrap();

    let only_distance = SetMeasurements { distance: Some(6000), ..Default::default() };
    assert!(WorkoutSetRepo::update(&mut conn, workout.id, created[0].id, &only_distance)
        .await
        .unwrap());

    let detail = WorkoutRepo::find_detail(&pool, workout.id).await.unwrap().unwrap();
    assert_eq!(detail.sets[0].measurements(), only_distance);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_negative_measurement_violates_check(pool: PgPool) {
    let alice = common::user(&pool, "alice").await;
    let session = common::session(&pool, alice.id).await;
    let exercise = common::exercise(&pool, alice.id, "Bench").await;
    let workout = common::workout(&pool, session.id, exercise.id).await;

    let mut conn = pool.acquire().await.unwrap();
    let result = WorkoutSetRepo::create_many(&mut conn, workout.id, &[strength(-1, 5)]).await;
    assert!(result.is_err());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_of_foreign_set_is_rejected(pool: PgPool) {
    let alice = common::user(&pool, "alice").await;
    let session = common::session(&pool, alice.id).await;
    let a = common::exercise(&pool, alice.id, "A").await;
    let b = common::exercise(&pool, alice.id, "B").await;
    let wa = common::workout(&pool, session.id, a.id).await;
    let wb = common::workout(&pool, session.id, b.id).await;

    let mut conn = pool.acquire().await.unwrap();
    let foreign = WorkoutSetRepo::create_many(&mut conn, wb.id, &[strength(1, 1)]).await.unwrap();
    assert!(!WorkoutSetRepo::update(&mut conn, wa.id, foreign[0].id, &strength(2, 2))
        .await
        .unwrap());
}
