//! Integration tests for the question and category repositories.

use sqlx::PgPool;
use trivia_core::pagination::{page_window, QUESTIONS_PER_PAGE};
use trivia_core::search::like_pattern;
use trivia_db::models::question::{NewQuestion, Question};
use trivia_db::repositories::{CategoryRepo, QuestionRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_question(text: &str, category: i64) -> NewQuestion {
    NewQuestion {
        question: text.to_string(),
        answer: format!("answer to {text}"),
        category,
        difficulty: 1,
    }
}

async fn stored(pool: &PgPool, id: i64) -> Option<Question> {
    sqlx::query_as("SELECT id, question, answer, category, difficulty FROM questions WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
        .unwrap()
}

async fn stored_count(pool: &PgPool) -> i64 {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM questions")
        .fetch_one(pool)
        .await
        .unwrap();
    count
}

async fn insert_many(pool: &PgPool, n: usize) -> Vec<i64> {
    let mut ids = Vec::with_capacity(n);
    for i in 0..n {
        let q = QuestionRepo::create(pool, &new_question(&format!("Question {i}"), 1 + (i as i64 % 3)))
            .await
            .unwrap();
        ids.push(q.id);
    }
    ids
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_category_lookup(pool: PgPool) {
    let categories = CategoryRepo::list(&pool).await.unwrap();
    assert_eq!(categories.len(), 6);
    assert_eq!(categories[0].kind, "Science");
    assert_eq!(CategoryRepo::count(&pool).await.unwrap(), 6);

    assert!(CategoryRepo::exists(&pool, 1).await.unwrap());
    assert!(!CategoryRepo::exists(&pool, 101).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_category_count_empty_store(pool: PgPool) {
    sqlx::query("DELETE FROM categories").execute(&pool).await.unwrap();
    assert_eq!(CategoryRepo::count(&pool).await.unwrap(), 0);
}

// ---------------------------------------------------------------------------
// Create / delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_and_find(pool: PgPool) {
    let created = QuestionRepo::create(&pool, &new_question("What is H2O?", 1))
        .await
        .unwrap();
    assert_eq!(created.question, "What is H2O?");
    assert_eq!(created.category, 1);

    assert_eq!(stored(&pool, created.id).await, Some(created));
    assert_eq!(stored_count(&pool).await, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_keeps_negative_difficulty(pool: PgPool) {
    let mut input = new_question("Below the scale", 3);
    input.difficulty = -2;

    let created = QuestionRepo::create(&pool, &input).await.unwrap();
    assert_eq!(created.difficulty, -2);
    assert_eq!(stored(&pool, created.id).await, Some(created));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_with_unknown_category_fails(pool: PgPool) {
    let result = QuestionRepo::create(&pool, &new_question("Orphan", 9999)).await;
    assert!(result.is_err());
    assert_eq!(stored_count(&pool).await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_removes_row(pool: PgPool) {
    let created = QuestionRepo::create(&pool, &new_question("Delete me", 2))
        .await
        .unwrap();

    assert!(QuestionRepo::delete(&pool, created.id).await.unwrap());
    assert!(stored(&pool, created.id).await.is_none());

    // Second delete finds nothing.
    assert!(!QuestionRepo::delete(&pool, created.id).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_missing_returns_false(pool: PgPool) {
    assert!(!QuestionRepo::delete(&pool, 5000).await.unwrap());
}

// ---------------------------------------------------------------------------
// Pagination
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_pages_reconstruct_full_set(pool: PgPool) {
    let mut ids = insert_many(&pool, 23).await;
    ids.sort_unstable();

    let last_page = (ids.len() as i64 + QUESTIONS_PER_PAGE - 1) / QUESTIONS_PER_PAGE;
    assert_eq!(last_page, 3);

    let mut collected = Vec::new();
    for page in 1..=last_page {
        let (offset, limit) = page_window(page);
        let listing = QuestionRepo::list_page(&pool, offset, limit).await.unwrap();
        assert_eq!(listing.total, 23);
        assert!(listing.questions.len() <= 10);
        collected.extend(listing.questions.into_iter().map(|q| q.id));
    }
    assert_eq!(collected, ids);

    let (offset, limit) = page_window(last_page + 1);
    let beyond = QuestionRepo::list_page(&pool, offset, limit).await.unwrap();
    assert!(beyond.questions.is_empty());
    assert_eq!(beyond.total, 23);
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_by_category(pool: PgPool) {
    insert_many(&pool, 9).await;

    let rows = QuestionRepo::list_by_category(&pool, 2).await.unwrap();
    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|q| q.category == 2));

    assert!(QuestionRepo::list_by_category(&pool, 6).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_search_is_case_insensitive_substring(pool: PgPool) {
    for text in [
        "What is the title of the 1990 fantasy film?",
        "Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?",
        "Which is the only team to play in every World Cup?",
        "What TITLE was given to Napoleon?",
    ] {
        QuestionRepo::create(&pool, &new_question(text, 4)).await.unwrap();
    }

    let rows = QuestionRepo::search(&pool, &like_pattern("title")).await.unwrap();
    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|q| q.question.to_lowercase().contains("title")));

    let all = QuestionRepo::search(&pool, &like_pattern("")).await.unwrap();
    assert_eq!(all.len(), 4);

    let none = QuestionRepo::search(&pool, &like_pattern("xyzzy")).await.unwrap();
    assert!(none.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_search_treats_wildcards_literally(pool: PgPool) {
    QuestionRepo::create(&pool, &new_question("What is 50% of 10?", 1))
        .await
        .unwrap();
    QuestionRepo::create(&pool, &new_question("What is 500 of 10?", 1))
        .await
        .unwrap();

    let rows = QuestionRepo::search(&pool, &like_pattern("50%")).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].question, "What is 50% of 10?");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_quiz_candidates_exclude_previous(pool: PgPool) {
    let a = QuestionRepo::create(&pool, &new_question("A", 1)).await.unwrap();
    let b = QuestionRepo::create(&pool, &new_question("B", 1)).await.unwrap();
    let c = QuestionRepo::create(&pool, &new_question("C", 1)).await.unwrap();
    let d = QuestionRepo::create(&pool, &new_question("D", 2)).await.unwrap();

    let scoped = QuestionRepo::list_quiz_candidates(&pool, Some(1), &[a.id, b.id])
        .await
        .unwrap();
    assert_eq!(scoped, vec![c.clone()]);

    let any = QuestionRepo::list_quiz_candidates(&pool, None, &[a.id])
        .await
        .unwrap();
    let ids: Vec<i64> = any.iter().map(|q| q.id).collect();
    assert_eq!(ids, vec![b.id, c.id, d.id]);

    let exhausted = QuestionRepo::list_quiz_candidates(&pool, Some(1), &[a.id, b.id, c.id])
        .await
        .unwrap();
    assert!(exhausted.is_empty());
}
