//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 3000;

// =============================================================================
// Pub/Sub (Redis)
// =============================================================================

/// Default Redis host (for development)
pub const DEFAULT_REDIS_HOST: &str = "127.0.0.1";

/// Default Redis port
pub const DEFAULT_REDIS_PORT: u16 = 6379;

/// Default channel that book creation events are published to
pub const DEFAULT_REDIS_TOPIC: &str = "books";

/// Upper bound for a single publish attempt, connection included
pub const DEFAULT_PUBLISH_TIMEOUT_MS: u64 = 2000;

// =============================================================================
// Book API
// =============================================================================

/// Base path of the book endpoints
pub const BOOKS_BASE_PATH: &str = "/api/v1/books";

/// Prefix of every error body produced by the uniform failure handler
pub const ERROR_BODY_PREFIX: &str = "Some error occurred ";

// =============================================================================
// Metrics
// =============================================================================

/// Counter tag naming the HTTP-facing component
pub const METRIC_TAG_CONTROLLER: &str = "BookController";

/// Counter tag naming the backing service
pub const METRIC_TAG_SERVICE: &str = "BookService";
