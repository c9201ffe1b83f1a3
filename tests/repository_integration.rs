//! Integration tests for the PostgreSQL repositories
//!
//! These need a disposable database reachable through `DATABASE_URL`;
//! they wipe the `questions` and `categories` tables. Run with
//! `cargo test -- --ignored`.

use std::sync::OnceLock;

use sqlx::{Executor, PgPool};
use tokio::sync::{Mutex, MutexGuard};
use trivia_api::domain::repositories::{CategoryRepository, QuestionRepository, RepositoryError};
use trivia_api::domain::NewQuestion;
use trivia_api::infrastructure::repositories::{
    PostgresCategoryRepository, PostgresQuestionRepository,
};

/// Every test truncates the same tables, so they take turns
fn db_lock() -> &'static Mutex<()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
}

/// Set up a clean test database
///
/// Hold the returned guard for the whole test.
async fn setup_test_db() -> (MutexGuard<'static, ()>, PgPool) {
    let guard = db_lock().lock().await;

    let database_url = std::env::var("DATABASE_URL")
        .expect("DATABASE_URL must be set for integration tests");

    let pool = PgPool::connect(&database_url)
        .await
        .expect("Failed to connect to test database");

    pool.execute(include_str!("../schema.sql"))
        .await
        .expect("Failed to create schema");
    pool.execute("TRUNCATE questions, categories RESTART IDENTITY")
        .await
        .expect("Failed to clean tables");

    (guard, pool)
}

async fn insert_category(pool: &PgPool, kind: &str) -> i32 {
    sqlx::query_scalar("INSERT INTO categories (type) VALUES ($1) RETURNING id")
        .bind(kind)
        .fetch_one(pool)
        .await
        .expect("Failed to insert category")
}

fn new_question(question: &str, category: i32) -> NewQuestion {
    NewQuestion {
        question: question.to_string(),
        answer: "answer".to_string(),
        category,
        difficulty: 3,
    }
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_question_create_find_and_delete() {
    let (_guard, pool) = setup_test_db().await;
    let repo = PostgresQuestionRepository::new(pool.clone());

    let id = repo
        .create(new_question("What is the largest lake in Africa?", 3))
        .await
        .expect("Failed to create question");

    let found = repo
        .find_by_id(id)
        .await
        .expect("Failed to find question")
        .expect("Question should exist");
    assert_eq!(found.question, "What is the largest lake in Africa?");
    assert_eq!(found.category, 3);

    repo.delete(id).await.expect("Failed to delete question");
    assert!(repo.find_by_id(id).await.unwrap().is_none());

    let again = repo.delete(id).await;
    assert!(matches!(again, Err(RepositoryError::NotFound(missing)) if missing == id));
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_questions_are_ordered_and_filtered() {
    let (_guard, pool) = setup_test_db().await;
    let repo = PostgresQuestionRepository::new(pool.clone());

    let a = repo.create(new_question("Who painted the Mona Lisa?", 2)).await.unwrap();
    let b = repo.create(new_question("What is the heaviest organ?", 1)).await.unwrap();
    let c = repo.create(new_question("Which Dutch artist cut off his ear?", 2)).await.unwrap();

    let all: Vec<i32> = repo.find_all().await.unwrap().iter().map(|q| q.id).collect();
    assert_eq!(all, vec![a, b, c]);

    let art: Vec<i32> = repo.find_by_category(2).await.unwrap().iter().map(|q| q.id).collect();
    assert_eq!(art, vec![a, c]);

    let candidates: Vec<i32> = repo
        .find_quiz_candidates(Some(2), &[a])
        .await
        .unwrap()
        .iter()
        .map(|q| q.id)
        .collect();
    assert_eq!(candidates, vec![c]);

    let candidates = repo.find_quiz_candidates(None, &[]).await.unwrap();
    assert_eq!(candidates.len(), 3);
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_search_is_case_insensitive_and_literal() {
    let (_guard, pool) = setup_test_db().await;
    let repo = PostgresQuestionRepository::new(pool.clone());

    repo.create(new_question("What was the TITLE of the film?", 5)).await.unwrap();
    repo.create(new_question("Is 100% of the moon visible?", 1)).await.unwrap();
    repo.create(new_question("Is 1000 a round number?", 1)).await.unwrap();

    assert_eq!(repo.search("title").await.unwrap().len(), 1);
    assert_eq!(repo.search("100%").await.unwrap().len(), 1);
    assert!(repo.search("no_such").await.unwrap().is_empty());
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_tables_are_clean_at_start_of_each_test() {
    let (guard, pool) = setup_test_db().await;
    let repo = PostgresQuestionRepository::new(pool.clone());

    let first = repo.create(new_question("Leftover?", 1)).await.unwrap();
    drop(guard);

    let (_guard, pool) = setup_test_db().await;
    let repo = PostgresQuestionRepository::new(pool.clone());

    assert!(repo.find_all().await.unwrap().is_empty());
    let second = repo.create(new_question("Fresh?", 1)).await.unwrap();
    assert_eq!(first, second, "identity restarts with the tables");
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_categories_ordered_by_type() {
    let (_guard, pool) = setup_test_db().await;
    let repo = PostgresCategoryRepository::new(pool.clone());

    let science = insert_category(&pool, "Science").await;
    insert_category(&pool, "Art").await;
    insert_category(&pool, "Geography").await;

    let kinds: Vec<String> = repo.find_all().await.unwrap().into_iter().map(|c| c.kind).collect();
    assert_eq!(kinds, vec!["Art", "Geography", "Science"]);

    let found = repo.find_by_id(science).await.unwrap().expect("category exists");
    assert_eq!(found.kind, "Science");
    assert!(repo.find_by_id(science + 100).await.unwrap().is_none());
}
