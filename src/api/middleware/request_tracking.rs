//! Request tracking middleware for the book endpoints.
//!
//! Counts every request, counts every handled failure, and applies the
//! configured [`ErrorStatusMode`] to failure responses.

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::Response,
};

use crate::api::AppState;
use crate::config::ErrorStatusMode;
use crate::errors::HandledFailure;

/// Tracking middleware
///
/// Failures are recognized by the [`HandledFailure`] marker that every
/// `AppError` response carries, so statuses set by handlers on purpose
/// are left alone.
pub async fn track_requests(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    state.metrics.record_request();

    let mut response = next.run(request).await;

    if let Some(failure) = response.extensions().get::<HandledFailure>().copied() {
        state.metrics.record_error();

        if state.error_status == ErrorStatusMode::Legacy {
            tracing::debug!(code = failure.code, "Reporting failure as server error");
            *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
        }
    }

    response
}
