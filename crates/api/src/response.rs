//! Response envelope types for API handlers.
//!
//! Every successful response except the quiz pick carries `success: true`.

use serde::Serialize;
use trivia_core::types::DbId;
use trivia_db::models::category::CategoryMap;
use trivia_db::models::question::Question;

/// `GET /categories`.
#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: CategoryMap,
}

/// `GET /questions?page=N`.
#[derive(Debug, Serialize)]
pub struct QuestionPageResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: i64,
    /// Always `null` for the unfiltered listing.
    pub current_category: Option<DbId>,
    pub categories: CategoryMap,
}

/// Search results and category-scoped listings.
#[derive(Debug, Serialize)]
pub struct QuestionListResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: i64,
    pub current_category: Option<DbId>,
}

impl QuestionListResponse {
    pub fn new(questions: Vec<Question>, current_category: Option<DbId>) -> Self {
        Self {
            success: true,
            total_questions: questions.len() as i64,
            questions,
            current_category,
        }
    }
}

/// `DELETE /questions/{id}`.
#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub success: bool,
    pub deleted_question: DbId,
}

/// Bare `{ "success": true }` acknowledgement.
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}
