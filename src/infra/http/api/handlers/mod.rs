//! API handlers organized by resource type.
//!
//! Error conversion helpers shared across resources live here.

mod posts;

pub use posts::*;

// ----- Shared error conversions -----

use crate::application::posts::PostServiceError;
use crate::application::repos::RepoError;
use crate::domain::error::DomainError;

use super::error::{ApiError, codes};

pub(crate) const MISSING_FIELDS_MESSAGE: &str = "Title and content needed!";
pub(crate) const INVALID_SORT_MESSAGE: &str =
    "Invalid sort field. Use 'title', 'content', 'author' or 'date'.";
pub(crate) const INVALID_DIRECTION_MESSAGE: &str = "Invalid direction. Use 'asc' or 'desc'.";

pub(crate) fn not_found_message(id: impl std::fmt::Display) -> String {
    format!("Post with id {id} not found.")
}

pub(crate) fn domain_to_api(err: DomainError) -> ApiError {
    let detail = err.to_string();
    match err {
        DomainError::Validation { .. } => {
            ApiError::bad_request(codes::INVALID_INPUT, MISSING_FIELDS_MESSAGE)
        }
        DomainError::InvalidArgument {
            argument: "direction",
            ..
        } => ApiError::bad_request(codes::INVALID_DIRECTION, INVALID_DIRECTION_MESSAGE),
        DomainError::InvalidArgument { .. } => {
            ApiError::bad_request(codes::INVALID_SORT, INVALID_SORT_MESSAGE)
        }
    }
    .with_detail(detail)
}

pub(crate) fn repo_to_api(err: RepoError) -> ApiError {
    match err {
        RepoError::NotFound { id } => ApiError::not_found(not_found_message(id)),
    }
}

pub(crate) fn post_to_api(err: PostServiceError) -> ApiError {
    match err {
        PostServiceError::Domain(domain) => domain_to_api(domain),
        PostServiceError::Repo(repo) => repo_to_api(repo),
    }
}
