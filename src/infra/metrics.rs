//! Request and error counters for the book endpoints.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

use crate::config::{METRIC_TAG_CONTROLLER, METRIC_TAG_SERVICE};

/// Monotonic counters shared by every request handler.
#[derive(Debug, Default)]
pub struct RequestMetrics {
    request_count: AtomicU64,
    error_count: AtomicU64,
}

/// Counter tags, fixed for this service
#[derive(Debug, Clone, Serialize)]
pub struct MetricTags {
    #[serde(rename = "ControllerName")]
    pub controller_name: &'static str,
    #[serde(rename = "ServiceName")]
    pub service_name: &'static str,
}

/// Point-in-time view of the counters
#[derive(Debug, Clone, Serialize)]
pub struct MetricsSnapshot {
    pub request_count: u64,
    pub error_count: u64,
    pub tags: MetricTags,
}

impl RequestMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_request(&self) {
        self.request_count.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_error(&self) {
        self.error_count.fetch_add(1, Ordering::Relaxed);
    }

    pub fn request_count(&self) -> u64 {
        self.request_count.load(Ordering::Relaxed)
    }

    pub fn error_count(&self) -> u64 {
        self.error_count.load(Ordering::Relaxed)
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            request_count: self.request_count(),
            error_count: self.error_count(),
            tags: MetricTags {
                controller_name: METRIC_TAG_CONTROLLER,
                service_name: METRIC_TAG_SERVICE,
            },
        }
    }
}
