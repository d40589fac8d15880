//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and infrastructure.

use std::sync::Arc;

use redis::RedisError;

use crate::config::{Config, ErrorStatusMode};
use crate::infra::{BookStore, NotificationPublisher, RedisPublisher, RequestMetrics};
use crate::services::{BookManager, BookService};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// Book service
    pub book_service: Arc<dyn BookService>,
    /// Creation notification publisher
    pub publisher: Arc<dyn NotificationPublisher>,
    /// Request and error counters
    pub metrics: Arc<RequestMetrics>,
    /// Status code policy for handled failures
    pub error_status: ErrorStatusMode,
}

impl AppState {
    /// Create application state from config: a fresh in-memory store and a
    /// Redis publisher on the configured channel.
    ///
    /// Fails only on a malformed Redis URL; no connection is opened here.
    pub fn from_config(config: &Config) -> Result<Self, RedisError> {
        let publisher = Arc::new(RedisPublisher::new(config)?);
        Ok(Self::in_memory(publisher, config.error_status))
    }

    /// Create state over a fresh in-memory store with the given publisher.
    pub fn in_memory(
        publisher: Arc<dyn NotificationPublisher>,
        error_status: ErrorStatusMode,
    ) -> Self {
        let store = Arc::new(BookStore::new());
        let book_service = Arc::new(BookManager::new(store));
        Self::new(book_service, publisher, error_status)
    }

    /// Create new application state with manually injected services.
    pub fn new(
        book_service: Arc<dyn BookService>,
        publisher: Arc<dyn NotificationPublisher>,
        error_status: ErrorStatusMode,
    ) -> Self {
        Self {
            book_service,
            publisher,
            metrics: Arc::new(RequestMetrics::new()),
            error_status,
        }
    }
}
