use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_number_from_string;

use crate::api::errors::ApiError;
use crate::api::extract::JsonBody;
use crate::api::state::AppState;
use crate::domain::quiz::{category_filter, pick_next_question};
use crate::domain::Question;

/// Category chosen for the quiz; id 0 means every category
#[derive(Debug, Clone, Deserialize)]
pub struct QuizCategory {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub id: i32,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// Request body for `POST /quizzes`
///
/// Both fields are required; they are optional here so a missing one
/// is reported through the error envelope instead of a serde rejection.
#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    pub previous_questions: Option<Vec<i32>>,
    pub quiz_category: Option<QuizCategory>,
}

/// Next quiz question, or `null` once the pool is exhausted
#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Option<Question>,
}

/// Serve a random question the player has not seen yet
///
/// POST /quizzes
pub async fn next_quiz_question(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<QuizRequest>,
) -> Result<Json<QuizResponse>, ApiError> {
    let (Some(previous_questions), Some(quiz_category)) =
        (req.previous_questions, req.quiz_category)
    else {
        tracing::debug!("quiz request without previous_questions or quiz_category");
        return Err(ApiError::unprocessable());
    };

    let candidates = state
        .questions
        .find_quiz_candidates(category_filter(quiz_category.id), &previous_questions)
        .await?;

    let question = pick_next_question(&candidates, &mut rand::thread_rng());
    tracing::debug!(
        category = quiz_category.id,
        category_type = quiz_category.kind.as_deref().unwrap_or("all"),
        asked = previous_questions.len(),
        remaining = candidates.len(),
        "quiz question picked"
    );

    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn category_id_accepts_numeric_string() {
        let req: QuizRequest = serde_json::from_value(json!({
            "previous_questions": [],
            "quiz_category": {"type": "Science", "id": "1"}
        }))
        .unwrap();

        assert_eq!(req.quiz_category.unwrap().id, 1);
    }

    #[test]
    fn missing_fields_deserialize_as_none() {
        let req: QuizRequest =
            serde_json::from_value(json!({"previous_questions": [4]})).unwrap();
        assert_eq!(req.previous_questions, Some(vec![4]));
        assert!(req.quiz_category.is_none());
    }
}
