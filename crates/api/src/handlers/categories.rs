//! Handlers for the `/categories` resource.

use axum::extract::State;
use axum::Json;
use trivia_core::error::CoreError;
use trivia_core::types::DbId;
use trivia_db::models::category::to_category_map;
use trivia_db::repositories::{CategoryRepo, QuestionRepo};

use crate::error::AppResult;
use crate::extract::AppPath;
use crate::response::{CategoriesResponse, QuestionListResponse};
use crate::state::AppState;

/// GET /api/categories
///
/// All categories as an id -> label mapping.
pub async fn list_categories(State(state): State<AppState>) -> AppResult<Json<CategoriesResponse>> {
    let categories = CategoryRepo::list(&state.pool).await?;

    Ok(Json(CategoriesResponse {
        success: true,
        categories: to_category_map(categories),
    }))
}

/// GET /api/categories/{id}/questions
///
/// Every question in one category. 404 when the category does not exist,
/// regardless of whether any question references the id.
pub async fn list_category_questions(
    State(state): State<AppState>,
    AppPath(category_id): AppPath<DbId>,
) -> AppResult<Json<QuestionListResponse>> {
    if !CategoryRepo::exists(&state.pool, category_id).await? {
        return Err(CoreError::NotFound {
            entity: "Category",
            id: category_id,
        }
        .into());
    }

    let questions = QuestionRepo::list_by_category(&state.pool, category_id).await?;

    Ok(Json(QuestionListResponse::new(questions, Some(category_id))))
}
