//! Trivia API Library
//!
//! JSON API behind the trivia game: paginated questions, categories,
//! question search, creation and deletion, and random quiz questions.

pub mod api;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod server;
pub mod telemetry;
