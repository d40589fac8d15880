//! Book creation notifications over Redis pub/sub.
//!
//! Publishing is best-effort: one attempt, bounded by a timeout, and any
//! failure is logged and dropped. Callers never observe a publish error.

use std::time::Duration;

use async_trait::async_trait;
use redis::{
    aio::{ConnectionManager, ConnectionManagerConfig},
    AsyncCommands, Client, RedisError,
};
use thiserror::Error;
use tokio::sync::OnceCell;

use crate::config::Config;
use crate::domain::BookResponse;

/// Reasons a single publish attempt can fail.
#[derive(Error, Debug)]
pub enum PublishError {
    #[error("Payload serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Redis error: {0}")]
    Redis(#[from] RedisError),

    #[error("Publish timed out after {0:?}")]
    Timeout(Duration),
}

/// Broadcasts newly created books to external subscribers.
#[async_trait]
pub trait NotificationPublisher: Send + Sync {
    /// Fire a notification for `book`. Never fails from the caller's side.
    async fn publish(&self, book: &BookResponse);

    /// Verify the channel backend is reachable.
    async fn check(&self) -> Result<(), PublishError> {
        Ok(())
    }
}

/// Serialize a book into the human-readable notification payload.
pub fn encode_payload(book: &BookResponse) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(book)
}

/// Redis-backed [`NotificationPublisher`].
///
/// The connection is opened on first use so the service starts even while
/// Redis is down; [`ConnectionManager`] handles reconnects afterwards.
pub struct RedisPublisher {
    client: Client,
    connection: OnceCell<ConnectionManager>,
    channel: String,
    timeout: Duration,
}

impl RedisPublisher {
    /// Create a publisher from configuration. Only the URL is validated here.
    pub fn new(config: &Config) -> Result<Self, RedisError> {
        Self::with_channel(&config.redis_url(), &config.redis_topic, config.publish_timeout())
    }

    pub fn with_channel(url: &str, channel: &str, timeout: Duration) -> Result<Self, RedisError> {
        let client = Client::open(url)?;
        Ok(Self {
            client,
            connection: OnceCell::new(),
            channel: channel.to_string(),
            timeout,
        })
    }

    async fn connection(&self) -> Result<ConnectionManager, RedisError> {
        let connection = self
            .connection
            .get_or_try_init(|| async {
                // One connect attempt; a refused connection surfaces immediately.
                let config = ConnectionManagerConfig::new()
                    .set_number_of_retries(0)
                    .set_connection_timeout(self.timeout);
                let manager = ConnectionManager::new_with_config(self.client.clone(), config).await?;
                tracing::info!("Redis publisher connected");
                Ok::<_, RedisError>(manager)
            })
            .await?;
        Ok(connection.clone())
    }

    /// Single publish attempt. Returns the number of subscribers that got it.
    pub async fn try_publish(&self, book: &BookResponse) -> Result<i64, PublishError> {
        let payload = encode_payload(book)?;

        let attempt = async {
            let mut conn = self.connection().await?;
            let receivers: i64 = conn.publish(&self.channel, payload).await?;
            Ok::<_, RedisError>(receivers)
        };

        match tokio::time::timeout(self.timeout, attempt).await {
            Ok(result) => Ok(result?),
            Err(_) => Err(PublishError::Timeout(self.timeout)),
        }
    }
}

#[async_trait]
impl NotificationPublisher for RedisPublisher {
    async fn publish(&self, book: &BookResponse) {
        match self.try_publish(book).await {
            Ok(receivers) => tracing::debug!(
                channel = %self.channel,
                book_id = %book.id,
                receivers,
                "Push notification sent"
            ),
            Err(e) => tracing::error!(
                channel = %self.channel,
                book_id = %book.id,
                error = %e,
                "Push notification error"
            ),
        }
    }

    async fn check(&self) -> Result<(), PublishError> {
        let attempt = async {
            let mut conn = self.connection().await?;
            let _: String = redis::cmd("PING").query_async(&mut conn).await?;
            Ok::<_, RedisError>(())
        };

        match tokio::time::timeout(self.timeout, attempt).await {
            Ok(result) => Ok(result?),
            Err(_) => Err(PublishError::Timeout(self.timeout)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;
    use uuid::Uuid;

    fn sample() -> BookResponse {
        BookResponse {
            id: Uuid::new_v4(),
            author_id: Uuid::new_v4(),
            title: "Dune".to_string(),
            pages: 412,
        }
    }

    #[test]
    fn test_payload_is_pretty_json_with_wire_names() {
        let book = sample();
        let payload = encode_payload(&book).unwrap();

        assert!(payload.contains('\n'));
        assert!(payload.contains("\"authorId\""));

        let decoded: BookResponse = serde_json::from_str(&payload).unwrap();
        assert_eq!(decoded, book);
    }

    #[test]
    fn test_invalid_url_is_rejected_up_front() {
        let result = RedisPublisher::with_channel("not a url", "books", Duration::from_millis(10));
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_refused_connection_fails_without_retrying() {
        // Port 1 is never a Redis server, so the connect is refused.
        let timeout = Duration::from_secs(5);
        let publisher =
            RedisPublisher::with_channel("redis://127.0.0.1:1/", "books", timeout).unwrap();

        let started = Instant::now();
        let result = publisher.try_publish(&sample()).await;
        let elapsed = started.elapsed();

        assert!(matches!(result, Err(PublishError::Redis(_))), "got {:?}", result);
        assert!(elapsed < Duration::from_secs(2), "took {:?}", elapsed);
    }

    #[tokio::test]
    async fn test_unreachable_redis_fails_health_check() {
        let publisher =
            RedisPublisher::with_channel("redis://127.0.0.1:1/", "books", Duration::from_secs(5))
                .unwrap();

        let started = Instant::now();
        assert!(matches!(publisher.check().await, Err(PublishError::Redis(_))));
        assert!(started.elapsed() < Duration::from_secs(2));
    }
}
