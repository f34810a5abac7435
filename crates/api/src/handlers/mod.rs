//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers delegate to the repositories in `trivia_db` and map errors via
//! [`AppError`](crate::error::AppError).

pub mod categories;
pub mod questions;
pub mod quizzes;
