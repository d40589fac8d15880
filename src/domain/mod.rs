//! Domain layer - Core business entities
//!
//! Contains the book entity and the transfer objects the API exchanges.

pub mod book;

pub use book::{Book, BookResponse, CreateBookCommand};
