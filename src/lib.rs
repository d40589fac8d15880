//! Books Service - backend-for-frontend for the book catalogue
//!
//! Serves CRUD-style endpoints for books kept in memory and announces each
//! newly created book on a Redis pub/sub channel.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Book entity and transfer objects
//! - **services**: Application use cases
//! - **infra**: In-memory store, Redis publisher, counters
//! - **api**: HTTP handlers, middleware, and routes
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Override the bind address
//! cargo run -- serve --host 127.0.0.1 --port 8080
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::{Config, ErrorStatusMode};
pub use domain::{Book, BookResponse, CreateBookCommand};
pub use errors::{AppError, AppResult};
