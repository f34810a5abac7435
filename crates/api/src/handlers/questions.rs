//! Handlers for the `/questions` resource.
//!
//! `POST /questions` is shared by search and create: the body shape decides
//! which one runs.

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use trivia_core::error::CoreError;
use trivia_core::pagination::page_window;
use trivia_core::search::like_pattern;
use trivia_core::types::DbId;
use trivia_db::models::category::to_category_map;
use trivia_db::models::question::{CreateQuestion, QuestionsBody};
use trivia_db::repositories::{CategoryRepo, QuestionRepo};

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::query::Page;
use crate::response::{DeletedResponse, QuestionListResponse, QuestionPageResponse, SuccessResponse};
use crate::state::AppState;

/// GET /api/questions?page=N
///
/// One page of questions plus the total count and the category mapping.
/// Pages past the end return an empty list.
pub async fn list_questions(
    State(state): State<AppState>,
    Page(page): Page,
) -> AppResult<Json<QuestionPageResponse>> {
    let (offset, limit) = page_window(page);

    let listing = QuestionRepo::list_page(&state.pool, offset, limit).await?;
    let categories = CategoryRepo::list(&state.pool).await?;

    Ok(Json(QuestionPageResponse {
        success: true,
        questions: listing.questions,
        total_questions: listing.total,
        current_category: None,
        categories: to_category_map(categories),
    }))
}

/// POST /api/questions
///
/// Search when the body carries `searchTerm`, otherwise create.
pub async fn search_or_create_question(
    State(state): State<AppState>,
    AppJson(body): AppJson<QuestionsBody>,
) -> AppResult<Response> {
    match body {
        QuestionsBody::Search { search_term } => {
            let questions = QuestionRepo::search(&state.pool, &like_pattern(&search_term)).await?;
            tracing::debug!(term = %search_term, hits = questions.len(), "Question search");
            Ok(Json(QuestionListResponse::new(questions, None)).into_response())
        }
        QuestionsBody::Create(input) => {
            create_question(&state, input).await?;
            Ok(Json(SuccessResponse::ok()).into_response())
        }
    }
}

async fn create_question(state: &AppState, input: CreateQuestion) -> AppResult<()> {
    let new = input.into_new()?;

    if !CategoryRepo::exists(&state.pool, new.category).await? {
        return Err(CoreError::Validation(format!(
            "category {} does not exist",
            new.category
        ))
        .into());
    }

    let question = QuestionRepo::create(&state.pool, &new).await?;

    tracing::info!(
        question_id = question.id,
        category = question.category,
        "Question created",
    );
    Ok(())
}

/// DELETE /api/questions/{id}
///
/// Permanently remove a question. 404 when it does not exist.
pub async fn delete_question(
    State(state): State<AppState>,
    AppPath(question_id): AppPath<DbId>,
) -> AppResult<Json<DeletedResponse>> {
    let deleted = QuestionRepo::delete(&state.pool, question_id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Question",
            id: question_id,
        }));
    }

    tracing::info!(question_id, "Question deleted");

    Ok(Json(DeletedResponse {
        success: true,
        deleted_question: question_id,
    }))
}
