//! Book domain entity and related types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Book domain entity
///
/// Fields are fixed once the book is created; there is no update path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: Uuid,
    /// Reference to an author owned by another service
    pub author_id: Uuid,
    pub title: String,
    pub pages: i32,
}

impl Book {
    /// Assemble a book under a freshly generated identifier.
    pub fn new(author_id: Uuid, title: String, pages: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            author_id,
            title,
            pages,
        }
    }
}

impl From<CreateBookCommand> for Book {
    fn from(command: CreateBookCommand) -> Self {
        Book::new(command.author_id, command.title, command.pages)
    }
}

/// Book creation command
///
/// Accepted as-is: no bounds are enforced on `title` or `pages`. Every field
/// must be present, though; a body missing one is rejected as a bad request
/// rather than filled with a default.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookCommand {
    /// Author identifier
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub author_id: Uuid,
    /// Book title
    #[schema(example = "The Rust Programming Language")]
    pub title: String,
    /// Page count
    #[schema(example = 560)]
    pub pages: i32,
}

/// Book response (client-facing projection, also the notification payload)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookResponse {
    /// Unique book identifier
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: Uuid,
    /// Author identifier
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub author_id: Uuid,
    /// Book title
    #[schema(example = "The Rust Programming Language")]
    pub title: String,
    /// Page count
    #[schema(example = 560)]
    pub pages: i32,
}

impl From<Book> for BookResponse {
    fn from(book: Book) -> Self {
        Self {
            id: book.id,
            author_id: book.author_id,
            title: book.title,
            pages: book.pages,
        }
    }
}
