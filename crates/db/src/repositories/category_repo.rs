//! Repository for the `categories` table.

use sqlx::PgPool;
use trivia_core::types::DbId;

use crate::models::category::Category;

const COLUMNS: &str = "id, type";

/// Read access to categories. Categories are seed data and never written here.
pub struct CategoryRepo;

impl CategoryRepo {
    /// List all categories ordered by ascending id.
    pub async fn list(pool: &PgPool) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories ORDER BY id ASC");
        sqlx::query_as::<_, Category>(&query).fetch_all(pool).await
    }

    /// Number of categories.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM categories")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    /// Whether a category with the given id exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS (SELECT 1 FROM categories WHERE id = $1)")
                .bind(id)
                .fetch_one(pool)
                .await?;
        Ok(exists)
    }
}
