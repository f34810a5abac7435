//! Category entity model.

use std::collections::BTreeMap;

use serde::Serialize;
use sqlx::FromRow;
use trivia_core::types::DbId;

/// A category row from the `categories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Category {
    pub id: DbId,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: String,
}

/// Categories keyed by id, serialized as `{"1": "Science", ...}`.
pub type CategoryMap = BTreeMap<DbId, String>;

/// Collapse a category list into the id -> label mapping the API returns.
pub fn to_category_map(categories: Vec<Category>) -> CategoryMap {
    categories.into_iter().map(|c| (c.id, c.kind)).collect()
}
