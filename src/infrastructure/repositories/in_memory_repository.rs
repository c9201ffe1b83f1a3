use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::category::Category;
use crate::domain::question::{NewQuestion, Question};
use crate::domain::repositories::{CategoryRepository, QuestionRepository, RepositoryError};

/// In-process store implementing both repository traits
///
/// Questions are keyed by id in a `BTreeMap`, so iteration is already in
/// id order. Ids are assigned sequentially and never reused.
#[derive(Debug, Default)]
pub struct InMemoryTriviaRepository {
    state: RwLock<State>,
}

#[derive(Debug, Default)]
struct State {
    questions: BTreeMap<i32, Question>,
    categories: BTreeMap<i32, Category>,
    last_question_id: i32,
}

impl InMemoryTriviaRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with categories
    pub fn with_categories(categories: impl IntoIterator<Item = Category>) -> Self {
        let categories = categories
            .into_iter()
            .map(|category| (category.id, category))
            .collect();

        Self {
            state: RwLock::new(State {
                categories,
                ..State::default()
            }),
        }
    }

    fn select<F>(state: &State, predicate: F) -> Vec<Question>
    where
        F: Fn(&Question) -> bool,
    {
        state
            .questions
            .values()
            .filter(|question| predicate(*question))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl QuestionRepository for InMemoryTriviaRepository {
    async fn find_all(&self) -> Result<Vec<Question>, RepositoryError> {
        let state = self.state.read().await;
        Ok(state.questions.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Question>, RepositoryError> {
        let state = self.state.read().await;
        Ok(state.questions.get(&id).cloned())
    }

    async fn find_by_category(&self, category_id: i32) -> Result<Vec<Question>, RepositoryError> {
        let state = self.state.read().await;
        Ok(Self::select(&state, |q| q.category == category_id))
    }

    async fn search(&self, term: &str) -> Result<Vec<Question>, RepositoryError> {
        let needle = term.to_lowercase();
        let state = self.state.read().await;
        Ok(Self::select(&state, |q| {
            q.question.to_lowercase().contains(&needle)
        }))
    }

    async fn find_quiz_candidates(
        &self,
        category_id: Option<i32>,
        exclude: &[i32],
    ) -> Result<Vec<Question>, RepositoryError> {
        let state = self.state.read().await;
        Ok(Self::select(&state, |q| {
            category_id.map_or(true, |id| q.category == id) && !exclude.contains(&q.id)
        }))
    }

    async fn create(&self, question: NewQuestion) -> Result<i32, RepositoryError> {
        let mut state = self.state.write().await;
        state.last_question_id += 1;
        let id = state.last_question_id;
        state.questions.insert(id, question.into_question(id));
        Ok(id)
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        let mut state = self.state.write().await;
        state
            .questions
            .remove(&id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound(id))
    }
}

#[async_trait]
impl CategoryRepository for InMemoryTriviaRepository {
    async fn find_all(&self) -> Result<Vec<Category>, RepositoryError> {
        let state = self.state.read().await;
        let mut categories: Vec<Category> = state.categories.values().cloned().collect();
        categories.sort_by(|a, b| a.kind.cmp(&b.kind));
        Ok(categories)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Category>, RepositoryError> {
        let state = self.state.read().await;
        Ok(state.categories.get(&id).cloned())
    }
}
