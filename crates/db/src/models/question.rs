//! Question entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use trivia_core::error::CoreError;
use trivia_core::quiz::ANY_CATEGORY;
use trivia_core::types::DbId;
use trivia_core::validation::{fields_error, invalid_fields};
use validator::Validate;

/// A question row from the `questions` table.
///
/// Serializes as `{id, question, answer, category, difficulty}`.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Question {
    pub id: DbId,
    pub question: String,
    pub answer: String,
    pub category: DbId,
    pub difficulty: i32,
}

/// Raw create payload for `POST /questions`.
///
/// Every field is optional at the wire level so a missing field is reported
/// as a validation failure instead of a deserialization error. Falsy values
/// (empty text, a zero category or difficulty) are rejected too. Use
/// [`CreateQuestion::into_new`] to obtain an insertable [`NewQuestion`].
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateQuestion {
    #[validate(required, length(min = 1))]
    pub question: Option<String>,
    #[validate(required, length(min = 1))]
    pub answer: Option<String>,
    #[validate(required)]
    pub category: Option<DbId>,
    #[validate(required)]
    pub difficulty: Option<i32>,
}

/// A validated question ready for insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: DbId,
    pub difficulty: i32,
}

impl CreateQuestion {
    /// Validate the payload and convert it into a [`NewQuestion`].
    pub fn into_new(self) -> Result<NewQuestion, CoreError> {
        let mut invalid = invalid_fields(&self);
        if self.category == Some(0) {
            invalid.push("category".into());
        }
        if self.difficulty == Some(0) {
            invalid.push("difficulty".into());
        }
        if !invalid.is_empty() {
            return Err(fields_error(invalid));
        }

        match (self.question, self.answer, self.category, self.difficulty) {
            (Some(question), Some(answer), Some(category), Some(difficulty)) => Ok(NewQuestion {
                question,
                answer,
                category,
                difficulty,
            }),
            _ => Err(CoreError::Validation("missing required fields".into())),
        }
    }
}

/// Body of `POST /questions`, which either searches or creates.
///
/// A body carrying `searchTerm` is a search; anything else is treated as a
/// create request.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum QuestionsBody {
    Search {
        #[serde(rename = "searchTerm")]
        search_term: String,
    },
    Create(CreateQuestion),
}

/// One page of questions together with the table total it was cut from.
#[derive(Debug, Clone)]
pub struct QuestionPage {
    pub total: i64,
    pub questions: Vec<Question>,
}

/// Category selector inside a quiz request.
///
/// A missing or `null` id is treated like `0`, meaning every category.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuizCategory {
    #[serde(default)]
    pub id: Option<DbId>,
}

/// Body of `POST /quizzes`.
///
/// `previous_questions` may be absent or `null`; both mean nothing asked yet.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub previous_questions: Option<Vec<DbId>>,
    #[serde(default)]
    pub quiz_category: Option<QuizCategory>,
}

impl QuizRequest {
    /// Requested category id; `ANY_CATEGORY` when none was given.
    pub fn category_id(&self) -> DbId {
        self.quiz_category
            .as_ref()
            .and_then(|c| c.id)
            .unwrap_or(ANY_CATEGORY)
    }

    /// Ids the player has already been asked.
    pub fn previous_ids(&self) -> &[DbId] {
        self.previous_questions.as_deref().unwrap_or_default()
    }
}
