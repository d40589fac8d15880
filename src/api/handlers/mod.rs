//! HTTP request handlers.

pub mod book_handler;
pub mod health_handler;

pub use book_handler::book_routes;
pub use health_handler::health_routes;
