//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - In-memory book storage
//! - Redis pub/sub notifications
//! - Request counters

pub mod metrics;
pub mod notifier;
pub mod store;

pub use metrics::{MetricsSnapshot, RequestMetrics};
pub use notifier::{encode_payload, NotificationPublisher, PublishError, RedisPublisher};
pub use store::{BookRepository, BookStore};

#[cfg(any(test, feature = "test-utils"))]
pub use store::MockBookRepository;
