use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::category::Category;

/// Repository trait for categories (read-only)
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// All categories ordered by type
    async fn find_all(&self) -> Result<Vec<Category>, RepositoryError>;

    /// Find a category by its ID
    async fn find_by_id(&self, id: i32) -> Result<Option<Category>, RepositoryError>;
}
