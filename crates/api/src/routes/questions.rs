use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::questions;
use crate::state::AppState;

/// Question routes mounted at `/questions`.
///
/// ```text
/// GET    /                    -> list_questions
/// POST   /                    -> search_or_create_question
/// DELETE /{id}                -> delete_question
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(questions::list_questions).post(questions::search_or_create_question),
        )
        .route("/{id}", delete(questions::delete_question))
}
