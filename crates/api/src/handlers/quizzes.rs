//! Handler for the quiz engine.

use axum::extract::State;
use axum::Json;
use trivia_core::error::CoreError;
use trivia_core::quiz::{category_filter, pick_random};
use trivia_db::models::question::{Question, QuizRequest};
use trivia_db::repositories::{CategoryRepo, QuestionRepo};

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::state::AppState;

/// POST /api/quizzes
///
/// Pick a random question the player has not seen yet, optionally limited to
/// one category. Responds with the bare question object, or `null` once every
/// candidate has been asked.
pub async fn next_question(
    State(state): State<AppState>,
    AppJson(request): AppJson<QuizRequest>,
) -> AppResult<Json<Option<Question>>> {
    let category = category_filter(request.category_id());

    if let Some(category_id) = category {
        if !CategoryRepo::exists(&state.pool, category_id).await? {
            return Err(CoreError::NotFound {
                entity: "Category",
                id: category_id,
            }
            .into());
        }
    }

    let previous = request.previous_ids();
    let candidates = QuestionRepo::list_quiz_candidates(&state.pool, category, previous).await?;
    let remaining = candidates.len();

    let picked = pick_random(candidates, &mut rand::rng());

    tracing::debug!(
        category = ?category,
        asked = previous.len(),
        remaining,
        picked = ?picked.as_ref().map(|q| q.id),
        "Quiz question selected",
    );

    Ok(Json(picked))
}
