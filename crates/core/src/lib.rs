//! Domain rules for the trivia backend.
//!
//! This crate performs no I/O. It holds the id types, the domain error
//! taxonomy, and the small pieces of logic (pagination, search patterns,
//! quiz selection, input validation) shared by the repository and HTTP layers.

pub mod error;
pub mod pagination;
pub mod quiz;
pub mod search;
pub mod types;
pub mod validation;
