pub mod api;
mod middleware;

pub use api::{ApiState, build_api_router};
pub use middleware::REQUEST_ID_HEADER;

use axum::{Router, http::StatusCode, middleware as axum_middleware, routing::get};
use tower_http::cors::CorsLayer;

use crate::infra::assets;
use middleware::trace_requests;

/// Assemble the full HTTP surface: posts API, health probe and, when
/// enabled, the embedded API documentation. CORS is open to every origin.
pub fn build_router(state: ApiState, docs_enabled: bool) -> Router {
    let mut router = build_api_router(state).route("/_health", get(health));

    if docs_enabled {
        router = router.merge(build_docs_router());
    }

    router
        .layer(axum_middleware::from_fn(trace_requests))
        .layer(CorsLayer::permissive())
}

fn build_docs_router() -> Router {
    Router::new()
        .route("/api/docs", get(assets::serve_docs_index))
        .route("/api/docs/", get(assets::serve_docs_index))
        .route("/static/{*path}", get(assets::serve_static))
}

async fn health() -> StatusCode {
    StatusCode::NO_CONTENT
}
