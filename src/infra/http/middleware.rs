use std::time::Instant;

use axum::{
    body::Body,
    http::{HeaderName, HeaderValue, Request},
    middleware::Next,
    response::Response,
};
use tracing::{debug, error, warn};
use uuid::Uuid;

use crate::application::error::ErrorReport;

pub const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Tag each request with a fresh id, echo it as `x-request-id` and log the
/// outcome. Failures are logged with the `ErrorReport` the handler attached.
pub async fn trace_requests(request: Request<Body>, next: Next) -> Response {
    let request_id = Uuid::new_v4();
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = Instant::now();

    let mut response = next.run(request).await;
    let status = response.status();
    let elapsed_ms = start.elapsed().as_millis();

    if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    if !(status.is_client_error() || status.is_server_error()) {
        debug!(
            target = "masterblog::http::response",
            status = status.as_u16(),
            method = %method,
            path = %uri.path(),
            elapsed_ms = elapsed_ms,
            request_id = %request_id,
            "request completed",
        );
        return response;
    }

    let (source, detail) = match response.extensions_mut().remove::<ErrorReport>() {
        Some(report) => (report.source, report.detail),
        None => ("unknown", "no diagnostic available".to_string()),
    };

    if status.is_server_error() {
        error!(
            target = "masterblog::http::response",
            status = status.as_u16(),
            method = %method,
            path = %uri.path(),
            query = uri.query().unwrap_or(""),
            elapsed_ms = elapsed_ms,
            source = source,
            detail = %detail,
            request_id = %request_id,
            "request failed",
        );
    } else {
        warn!(
            target = "masterblog::http::response",
            status = status.as_u16(),
            method = %method,
            path = %uri.path(),
            query = uri.query().unwrap_or(""),
            elapsed_ms = elapsed_ms,
            source = source,
            detail = %detail,
            request_id = %request_id,
            "client request error",
        );
    }

    response
}
