use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::question::{NewQuestion, Question};

/// Repository trait for questions
///
/// Every listing method returns questions ordered by id.
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// All questions
    async fn find_all(&self) -> Result<Vec<Question>, RepositoryError>;

    /// Find a question by its ID
    async fn find_by_id(&self, id: i32) -> Result<Option<Question>, RepositoryError>;

    /// All questions whose category is `category_id`
    async fn find_by_category(&self, category_id: i32) -> Result<Vec<Question>, RepositoryError>;

    /// Questions whose text contains `term`, ignoring case
    ///
    /// `term` is matched literally; `%` and `_` carry no pattern meaning.
    async fn search(&self, term: &str) -> Result<Vec<Question>, RepositoryError>;

    /// Questions eligible for the next quiz pick
    ///
    /// # Arguments
    /// * `category_id` - Restrict to one category, or `None` for all
    /// * `exclude` - IDs already asked in this game
    async fn find_quiz_candidates(
        &self,
        category_id: Option<i32>,
        exclude: &[i32],
    ) -> Result<Vec<Question>, RepositoryError>;

    /// Insert a question and return the id the store assigned
    async fn create(&self, question: NewQuestion) -> Result<i32, RepositoryError>;

    /// Delete a question by ID
    ///
    /// Fails with [`RepositoryError::NotFound`] if no row was removed.
    async fn delete(&self, id: i32) -> Result<(), RepositoryError>;
}
