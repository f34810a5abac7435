//! Repository for the `questions` table.

use sqlx::PgPool;
use trivia_core::types::DbId;

use crate::models::question::{NewQuestion, Question, QuestionPage};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, question, answer, category, difficulty";

/// Provides listing, search, insert, and delete for questions.
pub struct QuestionRepo;

impl QuestionRepo {
    /// One page of questions ordered by ascending id, plus the total count.
    ///
    /// Both reads run in one `REPEATABLE READ` transaction so the total and
    /// the page come from the same snapshot. An offset past the end yields
    /// an empty page.
    pub async fn list_page(
        pool: &PgPool,
        offset: i64,
        limit: i64,
    ) -> Result<QuestionPage, sqlx::Error> {
        let mut tx = pool.begin().await?;
        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
            .execute(&mut *tx)
            .await?;

        let (total,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM questions")
            .fetch_one(&mut *tx)
            .await?;

        let query =
            format!("SELECT {COLUMNS} FROM questions ORDER BY id ASC LIMIT $1 OFFSET $2");
        let questions = sqlx::query_as::<_, Question>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(QuestionPage { total, questions })
    }

    /// All questions in one category, ordered by ascending id.
    pub async fn list_by_category(
        pool: &PgPool,
        category_id: DbId,
    ) -> Result<Vec<Question>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM questions WHERE category = $1 ORDER BY id ASC");
        sqlx::query_as::<_, Question>(&query)
            .bind(category_id)
            .fetch_all(pool)
            .await
    }

    /// Questions whose lower-cased text matches `pattern`.
    ///
    /// `pattern` must come from `trivia_core::search::like_pattern`.
    pub async fn search(pool: &PgPool, pattern: &str) -> Result<Vec<Question>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM questions WHERE LOWER(question) LIKE $1 ORDER BY id ASC");
        sqlx::query_as::<_, Question>(&query)
            .bind(pattern)
            .fetch_all(pool)
            .await
    }

    /// Questions eligible for the next quiz round.
    ///
    /// Restricted to `category_id` when given, and never includes an id from
    /// `exclude`.
    pub async fn list_quiz_candidates(
        pool: &PgPool,
        category_id: Option<DbId>,
        exclude: &[DbId],
    ) -> Result<Vec<Question>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM questions
             WHERE ($1::BIGINT IS NULL OR category = $1)
               AND id <> ALL($2)
             ORDER BY id ASC"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(category_id)
            .bind(exclude)
            .fetch_all(pool)
            .await
    }

    /// Insert a question in its own transaction, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewQuestion) -> Result<Question, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO questions (question, answer, category, difficulty)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        let question = sqlx::query_as::<_, Question>(&query)
            .bind(&input.question)
            .bind(&input.answer)
            .bind(input.category)
            .bind(input.difficulty)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        tracing::debug!(question_id = question.id, "Question row inserted");
        Ok(question)
    }

    /// Permanently delete a question in its own transaction.
    ///
    /// Returns `false` if no row with the given id exists. An error before
    /// commit drops the transaction, which rolls it back.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let found: Option<(DbId,)> =
            sqlx::query_as("SELECT id FROM questions WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;
        if found.is_none() {
            tx.rollback().await?;
            return Ok(false);
        }

        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        tracing::debug!(question_id = id, "Question row deleted");
        Ok(result.rows_affected() > 0)
    }
}
