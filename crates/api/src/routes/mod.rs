pub mod categories;
pub mod health;
pub mod questions;
pub mod quizzes;

use axum::Router;

use crate::error::AppError;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /categories                         list categories
/// /categories/{id}/questions          questions in one category
///
/// /questions                          paginated list, search or create
/// /questions/{id}                     delete
///
/// /quizzes                            next quiz question
/// ```
///
/// Unknown paths and wrong methods answer with the JSON error envelope.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/categories", categories::router())
        .nest("/questions", questions::router())
        .nest("/quizzes", quizzes::router())
        .method_not_allowed_fallback(|| async { AppError::MethodNotAllowed })
        .fallback(|| async { AppError::RouteNotFound })
}
