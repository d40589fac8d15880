//! Application services layer - Use cases and business logic.
//!
//! Services depend on repository traits so they can be exercised
//! against mocks.

mod book_service;

pub use book_service::{BookManager, BookService};
