use std::collections::BTreeMap;

use axum::{extract::State, Json};
use serde::Serialize;

use crate::api::deserializers::PageQuery;
use crate::api::errors::ApiError;
use crate::api::extract::PathParam;
use crate::api::handlers::questions::QuestionPageResponse;
use crate::api::state::AppState;
use crate::domain::{format_categories, paginate};

/// Response listing every category
#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: BTreeMap<i32, String>,
}

/// List all categories as an `{id: type}` mapping
///
/// GET /categories
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<CategoriesResponse>, ApiError> {
    let categories = state.categories.find_all().await?;

    if categories.is_empty() {
        return Err(ApiError::not_found());
    }

    Ok(Json(CategoriesResponse {
        success: true,
        categories: format_categories(&categories),
    }))
}

/// List one page of the questions in a category
///
/// GET /categories/:id/questions?page=N
pub async fn list_questions_by_category(
    State(state): State<AppState>,
    PathParam(category_id): PathParam<i32>,
    query: PageQuery,
) -> Result<Json<QuestionPageResponse>, ApiError> {
    let questions = state.questions.find_by_category(category_id).await?;

    if questions.is_empty() {
        tracing::debug!(category_id, "no questions in category");
        return Err(ApiError::not_found());
    }

    let current_category = state
        .categories
        .find_by_id(category_id)
        .await?
        .map(|category| category.kind);

    Ok(Json(QuestionPageResponse {
        success: true,
        questions: paginate(&questions, query.page),
        total_questions: questions.len(),
        categories: None,
        current_category,
    }))
}
