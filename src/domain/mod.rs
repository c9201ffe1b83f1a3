// Domain layer module exports
// Entities, pure helpers, and the repository ports the adapters implement

pub mod category;
pub mod pagination;
pub mod question;
pub mod quiz;
pub mod repositories;

pub use category::{format_categories, Category};
pub use pagination::paginate;
pub use question::{NewQuestion, Question};
