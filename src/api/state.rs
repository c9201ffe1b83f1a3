use std::sync::Arc;

use sqlx::PgPool;

use crate::domain::repositories::{CategoryRepository, QuestionRepository};
use crate::infrastructure::repositories::{
    InMemoryTriviaRepository, PostgresCategoryRepository, PostgresQuestionRepository,
};

/// Store handles shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub questions: Arc<dyn QuestionRepository>,
    pub categories: Arc<dyn CategoryRepository>,
}

impl AppState {
    pub fn new(
        questions: Arc<dyn QuestionRepository>,
        categories: Arc<dyn CategoryRepository>,
    ) -> Self {
        Self {
            questions,
            categories,
        }
    }

    /// State backed by PostgreSQL through a shared pool
    pub fn postgres(pool: PgPool) -> Self {
        Self::new(
            Arc::new(PostgresQuestionRepository::new(pool.clone())),
            Arc::new(PostgresCategoryRepository::new(pool)),
        )
    }

    /// State backed by a single in-memory store
    pub fn in_memory(store: Arc<InMemoryTriviaRepository>) -> Self {
        Self::new(store.clone(), store)
    }
}
