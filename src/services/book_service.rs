//! Book service - Handles book-related business logic.
//!
//! Currently a pass-through over the repository; no field validation.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{Book, CreateBookCommand};
use crate::errors::{AppResult, OptionExt};
use crate::infra::BookRepository;

/// Book service trait for dependency injection.
#[async_trait]
pub trait BookService: Send + Sync {
    /// Create a book under a freshly generated ID
    async fn create(&self, command: CreateBookCommand) -> AppResult<Book>;

    /// List all books
    async fn get_books(&self) -> AppResult<Vec<Book>>;

    /// Find book by ID, `None` when absent
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Book>>;

    /// Get book by ID, `NotFound` when absent
    async fn get_book(&self, id: Uuid) -> AppResult<Book> {
        self.find_by_id(id).await?.ok_or_not_found("Book")
    }
}

/// Concrete implementation of BookService over a repository.
pub struct BookManager<R: BookRepository> {
    repository: Arc<R>,
}

impl<R: BookRepository> BookManager<R> {
    /// Create new book service instance
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: BookRepository> BookService for BookManager<R> {
    async fn create(&self, command: CreateBookCommand) -> AppResult<Book> {
        let book = Book::from(command);
        tracing::debug!(book_id = %book.id, "Storing new book");
        self.repository.insert(book).await
    }

    async fn get_books(&self) -> AppResult<Vec<Book>> {
        Ok(self.repository.list_all().await)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Book>> {
        Ok(self.repository.find_by_id(id).await)
    }
}
