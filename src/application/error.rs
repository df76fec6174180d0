use axum::response::Response;
use thiserror::Error;

use crate::infra::error::InfraError;

/// Diagnostic attached to error responses for the request-tracing middleware.
#[derive(Debug, Clone)]
pub struct ErrorReport {
    pub source: &'static str,
    pub detail: String,
}

impl ErrorReport {
    pub fn new(source: &'static str, detail: impl Into<String>) -> Self {
        Self {
            source,
            detail: detail.into(),
        }
    }

    pub fn attach(self, response: &mut Response) {
        response.extensions_mut().insert(self);
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Infra(#[from] InfraError),
    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl AppError {
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected(message.into())
    }
}

