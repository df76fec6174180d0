use crate::application::error::ErrorReport;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use super::models::ErrorBody;

pub mod codes {
    pub const INVALID_INPUT: &str = "invalid_input";
    pub const INVALID_SORT: &str = "invalid_sort";
    pub const INVALID_DIRECTION: &str = "invalid_direction";
    pub const INVALID_QUERY: &str = "invalid_query";
    pub const MALFORMED_BODY: &str = "malformed_body";
    pub const NOT_FOUND: &str = "not_found";
}

/// Request-local API failure rendered as `{"Error": message}`.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    code: &'static str,
    message: String,
    detail: Option<String>,
}

impl ApiError {
    pub fn new(
        status: StatusCode,
        code: &'static str,
        message: impl Into<String>,
        detail: Option<String>,
    ) -> Self {
        Self {
            status,
            code,
            message: message.into(),
            detail,
        }
    }

    pub fn bad_request(code: &'static str, message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, code, message, None)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, codes::NOT_FOUND, message, None)
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let detail = format!(
            "{}: {}",
            self.code,
            self.detail.as_deref().unwrap_or(&self.message)
        );
        let body = ErrorBody {
            error: self.message,
        };
        let mut response = (self.status, Json(body)).into_response();
        ErrorReport::new("infra::http::api", detail).attach(&mut response);
        response
    }
}
