//! Posts handlers

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use super::{not_found_message, post_to_api};
use crate::infra::http::api::error::{ApiError, codes};
use crate::infra::http::api::models::*;
use crate::infra::http::api::state::ApiState;

pub async fn list_posts(
    State(state): State<ApiState>,
    query: Result<Query<PostListQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(query) = query.map_err(query_to_api)?;

    let posts = state
        .posts
        .list_posts(query.sort.as_deref(), query.direction.as_deref())
        .await
        .map_err(post_to_api)?;

    Ok(Json(records(posts)))
}

pub async fn search_posts(
    State(state): State<ApiState>,
    query: Result<Query<PostSearchQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(query) = query.map_err(query_to_api)?;

    let posts = state
        .posts
        .search_posts(search_query(query))
        .await
        .map_err(post_to_api)?;

    Ok(Json(records(posts)))
}

pub async fn create_post(
    State(state): State<ApiState>,
    payload: Result<Json<PostWriteRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(payload) = payload.map_err(body_to_api)?;

    let post = state
        .posts
        .create_post(create_command(payload))
        .await
        .map_err(post_to_api)?;

    Ok((StatusCode::CREATED, Json(PostRecord::from(post))))
}

pub async fn update_post(
    State(state): State<ApiState>,
    Path(raw_id): Path<String>,
    payload: Result<Json<PostWriteRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_post_id(&raw_id)?;
    let Json(payload) = payload.map_err(body_to_api)?;

    let post = state
        .posts
        .update_post(update_command(id, payload))
        .await
        .map_err(post_to_api)?;

    Ok(Json(PostRecord::from(post)))
}

pub async fn delete_post(
    State(state): State<ApiState>,
    Path(raw_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_post_id(&raw_id)?;

    let post = state.posts.delete_post(id).await.map_err(post_to_api)?;

    Ok(Json(DeleteResponse {
        message: format!("Post with id {} has been deleted successfully.", post.id),
    }))
}

/// Ids are plain decimal digits; signs or anything else cannot name a stored post.
fn parse_post_id(raw: &str) -> Result<u64, ApiError> {
    if raw.is_empty() || !raw.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(ApiError::not_found(not_found_message(raw))
            .with_detail(format!("`{raw}` is not a decimal post id")));
    }

    raw.parse::<u64>()
        .map_err(|err| ApiError::not_found(not_found_message(raw)).with_detail(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_id_accepts_only_decimal_digits() {
        assert_eq!(parse_post_id("1").expect("plain id"), 1);
        assert_eq!(parse_post_id("007").expect("leading zeros"), 7);

        for raw in ["+1", "-1", " 1", "1.0", "abc", "", "99999999999999999999"] {
            assert!(parse_post_id(raw).is_err(), "{raw:?} should not parse");
        }
    }
}

fn body_to_api(rejection: JsonRejection) -> ApiError {
    ApiError::bad_request(codes::MALFORMED_BODY, rejection.body_text())
}

fn query_to_api(rejection: QueryRejection) -> ApiError {
    ApiError::bad_request(codes::INVALID_QUERY, rejection.body_text())
}
