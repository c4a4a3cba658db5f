//! Integration tests for the category and user repositories.

use fusteria_db::models::category::CreateCategory;
use fusteria_db::models::project::CreateProject;
use fusteria_db::models::user::CreateUser;
use fusteria_db::repositories::{CategoryRepo, ProjectRepo, UserRepo};
use sqlx::PgPool;

fn category(name: &str) -> CreateCategory {
    CreateCategory {
        name: name.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn category_resolves_by_exact_name(pool: PgPool) {
    let created = CategoryRepo::create(&pool, &category("Outdoor")).await.unwrap();

    let found = CategoryRepo::find_by_name(&pool, "Outdoor")
        .await
        .unwrap()
        .expect("category should resolve");
    assert_eq!(found.id, created.id);

    // Exact match only; no fuzzy resolution.
    assert!(CategoryRepo::find_by_name(&pool, "outdoor")
        .await
        .unwrap()
        .is_none());
    assert!(CategoryRepo::find_by_name(&pool, "Out")
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn duplicate_category_name_is_rejected(pool: PgPool) {
    CategoryRepo::create(&pool, &category("Kitchens")).await.unwrap();

    let err = CategoryRepo::create(&pool, &category("Kitchens"))
        .await
        .unwrap_err();
    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(db_err.constraint(), Some("uq_categories_name"));
        }
        other => panic!("expected a database error, got {other:?}"),
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn category_list_is_ordered_by_name(pool: PgPool) {
    CategoryRepo::create(&pool, &category("Stairs")).await.unwrap();
    CategoryRepo::create(&pool, &category("Doors")).await.unwrap();
    CategoryRepo::create(&pool, &category("Kitchens")).await.unwrap();

    let names: Vec<_> = CategoryRepo::list(&pool)
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(names, vec!["Doors", "Kitchens", "Stairs"]);
}

#[sqlx::test(migrations = "./migrations")]
async fn referenced_category_cannot_be_deleted(pool: PgPool) {
    let cat = CategoryRepo::create(&pool, &category("Furniture")).await.unwrap();

    ProjectRepo::create(
        &pool,
        &CreateProject {
            title: "Table".to_string(),
            description: "d".to_string(),
            full_description: "fd".to_string(),
            completion_date: "2024".to_string(),
            duration: "1 week".to_string(),
            category_id: cat.id,
            updated_by: "Anna".to_string(),
            features: vec![],
            images: vec![],
        },
    )
    .await
    .unwrap();

    let err = CategoryRepo::delete(&pool, cat.id).await.unwrap_err();
    assert!(matches!(err, sqlx::Error::Database(_)));

    // An unreferenced category deletes fine; a second delete reports false.
    let empty = CategoryRepo::create(&pool, &category("Unused")).await.unwrap();
    assert!(CategoryRepo::delete(&pool, empty.id).await.unwrap());
    assert!(!CategoryRepo::delete(&pool, empty.id).await.unwrap());
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn user_lookup_by_email(pool: PgPool) {
    let created = UserRepo::create(
        &pool,
        &CreateUser {
            name: "Anna".to_string(),
            email: "anna@example.com".to_string(),
            password_hash: "$argon2id$fake".to_string(),
        },
    )
    .await
    .unwrap();

    let found = UserRepo::find_by_email(&pool, "anna@example.com")
        .await
        .unwrap()
        .expect("user should exist");
    assert_eq!(found.id, created.id);
    assert_eq!(found.name, "Anna");

    assert!(UserRepo::find_by_email(&pool, "nobody@example.com")
        .await
        .unwrap()
        .is_none());
    assert!(UserRepo::find_by_id(&pool, created.id).await.unwrap().is_some());
}
