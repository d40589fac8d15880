//! Centralized error handling.
//!
//! Provides a unified error type for the entire application,
//! with automatic HTTP response conversion. Every failure reaching the
//! HTTP layer is rendered the same way: a plain-text body made of
//! [`ERROR_BODY_PREFIX`] followed by the error message.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::config::ERROR_BODY_PREFIX;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Resource errors
    #[error("{0} isn't found")]
    NotFound(&'static str),

    /// Duplicate key on insert
    #[error("{0} already exists")]
    Conflict(String),

    // Input
    #[error("Invalid input: {0}")]
    BadRequest(String),

    // Internal
    #[error("{0}")]
    Internal(String),
}

/// Marker attached to every response built from an [`AppError`].
///
/// The request tracking middleware uses it to count failures and to apply
/// the configured status mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandledFailure {
    pub code: &'static str,
}

impl AppError {
    /// Get error code for logs and the failure marker
    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Conflict(_) => "CONFLICT",
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get the precise HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Body text returned to the client
    pub fn body(&self) -> String {
        format!("{}{}", ERROR_BODY_PREFIX, self)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Internal(msg) => tracing::error!(code = self.code(), "Internal error: {}", msg),
            _ => tracing::warn!(code = self.code(), "Request failed: {}", self),
        }

        let mut response = (self.status(), self.body()).into_response();
        response
            .extensions_mut()
            .insert(HandledFailure { code: self.code() });
        response
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self, entity: &'static str) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self, entity: &'static str) -> AppResult<T> {
        self.ok_or(AppError::NotFound(entity))
    }
}

/// Convenience constructors
impl AppError {
    pub fn conflict(entity: impl Into<String>) -> Self {
        AppError::Conflict(entity.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
