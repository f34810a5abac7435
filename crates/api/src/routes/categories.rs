use axum::routing::get;
use axum::Router;

use crate::handlers::categories;
use crate::state::AppState;

/// Category routes mounted at `/categories`.
///
/// ```text
/// GET    /                    -> list_categories
/// GET    /{id}/questions      -> list_category_questions
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(categories::list_categories))
        .route("/{id}/questions", get(categories::list_category_questions))
}
