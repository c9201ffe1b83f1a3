use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api::errors::route_not_found;
use crate::api::handlers::{categories, questions, quizzes};
use crate::api::state::AppState;

/// Builds the full application router over the given store handles
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Category routes
        .route("/categories", get(categories::list_categories))
        .route(
            "/categories/:id/questions",
            get(categories::list_questions_by_category),
        )
        // Question routes
        .route(
            "/questions",
            get(questions::list_questions).post(questions::create_or_search_questions),
        )
        .route("/questions/:id", delete(questions::delete_question))
        // Quiz routes
        .route("/quizzes", post(quizzes::next_quiz_question))
        .fallback(route_not_found)
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // Shared state
        .with_state(state)
}
