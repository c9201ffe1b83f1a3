use std::collections::BTreeMap;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_option_number_from_string;

use crate::api::deserializers::PageQuery;
use crate::api::errors::ApiError;
use crate::api::extract::{JsonBody, PathParam};
use crate::api::state::AppState;
use crate::domain::{format_categories, paginate, NewQuestion, Question};

/// Body accepted by `POST /questions`
///
/// The same endpoint searches or creates depending on `searchTerm`.
/// `category` and `difficulty` may arrive as numbers or numeric strings.
#[derive(Debug, Default, Deserialize)]
pub struct QuestionsRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
    pub question: Option<String>,
    pub answer: Option<String>,
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    pub category: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    pub difficulty: Option<i32>,
}

/// What a `POST /questions` call asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionIntent {
    Search(String),
    Create(NewQuestion),
}

impl QuestionsRequest {
    /// Resolves the body into a search or a creation
    ///
    /// A missing or empty `searchTerm` means creation, which needs every
    /// question field.
    ///
    /// # Returns
    /// * `Err(String)` - Names the first missing field of a creation
    pub fn into_intent(self) -> Result<QuestionIntent, String> {
        if let Some(term) = self.search_term.filter(|term| !term.is_empty()) {
            return Ok(QuestionIntent::Search(term));
        }

        let question = self.question.ok_or("question is required")?;
        let answer = self.answer.ok_or("answer is required")?;
        let category = self.category.ok_or("category is required")?;
        let difficulty = self.difficulty.ok_or("difficulty is required")?;

        Ok(QuestionIntent::Create(NewQuestion {
            question,
            answer,
            category,
            difficulty,
        }))
    }
}

/// One page of questions plus listing metadata
#[derive(Debug, Serialize)]
pub struct QuestionPageResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<BTreeMap<i32, String>>,
    pub current_category: Option<String>,
}

/// Bare `{"success": true}` acknowledgement
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

/// Response to `POST /questions`, shaped by the resolved intent
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum QuestionsPostResponse {
    Search(QuestionPageResponse),
    Created(SuccessResponse),
}

/// List one page of all questions
///
/// GET /questions?page=N
pub async fn list_questions(
    State(state): State<AppState>,
    query: PageQuery,
) -> Result<Json<QuestionPageResponse>, ApiError> {
    let questions = state.questions.find_all().await?;
    let categories = state.categories.find_all().await?;

    let page = paginate(&questions, query.page);
    if page.is_empty() {
        tracing::debug!(page = query.page, total = questions.len(), "empty question page");
        return Err(ApiError::not_found());
    }

    Ok(Json(QuestionPageResponse {
        success: true,
        questions: page,
        total_questions: questions.len(),
        categories: Some(format_categories(&categories)),
        current_category: None,
    }))
}

/// Delete a question
///
/// DELETE /questions/:id
///
/// Every failure, including an unknown id, is reported as unprocessable.
pub async fn delete_question(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let question = state.questions.find_by_id(id).await?;

    if question.is_none() {
        tracing::debug!(id, "question to delete does not exist");
        return Err(ApiError::unprocessable());
    }

    state.questions.delete(id).await?;
    tracing::info!(id, "question deleted");

    Ok(Json(SuccessResponse { success: true }))
}

/// Search questions or create a new one
///
/// POST /questions
pub async fn create_or_search_questions(
    State(state): State<AppState>,
    query: PageQuery,
    JsonBody(req): JsonBody<QuestionsRequest>,
) -> Result<Json<QuestionsPostResponse>, ApiError> {
    let intent = req.into_intent().map_err(|reason| {
        tracing::debug!(%reason, "invalid question body");
        ApiError::unprocessable()
    })?;

    match intent {
        QuestionIntent::Search(term) => {
            let matches = state.questions.search(&term).await?;
            tracing::debug!(%term, total = matches.len(), "question search");

            Ok(Json(QuestionsPostResponse::Search(QuestionPageResponse {
                success: true,
                questions: paginate(&matches, query.page),
                total_questions: matches.len(),
                categories: None,
                current_category: None,
            })))
        }
        QuestionIntent::Create(new_question) => {
            let id = state.questions.create(new_question).await?;
            tracing::info!(id, "question created");

            Ok(Json(QuestionsPostResponse::Created(SuccessResponse {
                success: true,
            })))
        }
    }
}
