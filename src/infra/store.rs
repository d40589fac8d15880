//! In-memory book store.
//!
//! Holds every book for the lifetime of the process. Nothing is persisted.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::Book;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Book repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Add a new book; fails with `Conflict` if the id is already taken
    async fn insert(&self, book: Book) -> AppResult<Book>;

    /// Find a book by ID; absence is not an error
    async fn find_by_id(&self, id: Uuid) -> Option<Book>;

    /// List every stored book
    async fn list_all(&self) -> Vec<Book>;
}

#[derive(Default)]
struct Records {
    books: Vec<Book>,
    index: HashMap<Uuid, usize>,
}

/// Concurrency-safe in-memory implementation of [`BookRepository`].
///
/// Lists come back in insertion order, though callers should not depend on it.
#[derive(Default)]
pub struct BookStore {
    records: RwLock<Records>,
}

impl BookStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookRepository for BookStore {
    async fn insert(&self, book: Book) -> AppResult<Book> {
        let mut records = self.records.write().await;

        if records.index.contains_key(&book.id) {
            tracing::warn!(book_id = %book.id, "Duplicate book id rejected");
            return Err(AppError::conflict(format!("Book {}", book.id)));
        }

        let position = records.books.len();
        records.index.insert(book.id, position);
        records.books.push(book.clone());

        Ok(book)
    }

    async fn find_by_id(&self, id: Uuid) -> Option<Book> {
        let records = self.records.read().await;
        records
            .index
            .get(&id)
            .and_then(|&position| records.books.get(position))
            .cloned()
    }

    async fn list_all(&self) -> Vec<Book> {
        self.records.read().await.books.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(title: &str) -> Book {
        Book::new(Uuid::new_v4(), title.to_string(), 100)
    }

    #[tokio::test]
    async fn test_insert_then_find() {
        let store = BookStore::new();
        let inserted = store.insert(book("Dune")).await.unwrap();

        let found = store.find_by_id(inserted.id).await;
        assert_eq!(found, Some(inserted));
    }

    #[tokio::test]
    async fn test_find_missing_returns_none() {
        let store = BookStore::new();
        store.insert(book("Dune")).await.unwrap();

        assert!(store.find_by_id(Uuid::new_v4()).await.is_none());
    }

    #[tokio::test]
    async fn test_duplicate_id_is_rejected() {
        let store = BookStore::new();
        let original = store.insert(book("Dune")).await.unwrap();

        let mut copy = book("Dune Messiah");
        copy.id = original.id;
        let result = store.insert(copy).await;

        assert!(matches!(result, Err(AppError::Conflict(_))));
        assert_eq!(store.list_all().await.len(), 1);
        assert_eq!(store.find_by_id(original.id).await.unwrap().title, "Dune");
    }

    #[tokio::test]
    async fn test_list_all_keeps_every_record() {
        let store = BookStore::new();
        assert!(store.list_all().await.is_empty());

        for title in ["A", "B", "C"] {
            store.insert(book(title)).await.unwrap();
        }

        let titles: Vec<String> = store.list_all().await.into_iter().map(|b| b.title).collect();
        assert_eq!(titles, vec!["A", "B", "C"]);
    }
}
