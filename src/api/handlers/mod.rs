// HTTP handlers, one module per resource

pub mod categories;
pub mod questions;
pub mod quizzes;
