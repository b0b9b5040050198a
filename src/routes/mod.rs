//! HTTP handlers grouped per router, plus shared response helpers.

pub mod characters;
pub mod episodes;
pub mod notifications;
pub mod seasons;
pub mod tokens;
pub mod users;

use actix_web::HttpResponse;
use serde_json::json;

use crate::repository::errors::RepositoryError;
use crate::services::ServiceError;

/// Maps a service failure onto the status code the API contract promises.
pub fn error_response(err: &ServiceError) -> HttpResponse {
    match err {
        ServiceError::Unauthorized => {
            HttpResponse::Unauthorized().json(json!({"detail": "Not authenticated"}))
        }
        ServiceError::NotFound | ServiceError::Repository(RepositoryError::NotFound) => {
            HttpResponse::NotFound().json(json!({"detail": "Not found"}))
        }
        ServiceError::Validation(message) => {
            HttpResponse::UnprocessableEntity().json(json!({"detail": message}))
        }
        ServiceError::Repository(
            repo_err @ (RepositoryError::InvalidSortField(_)
            | RepositoryError::InvalidPageNumber(_)
            | RepositoryError::UnsupportedFilter(_)),
        ) => HttpResponse::UnprocessableEntity().json(json!({"detail": repo_err.to_string()})),
        ServiceError::Repository(RepositoryError::ConstraintViolation(message)) => {
            HttpResponse::Conflict().json(json!({"detail": message}))
        }
        ServiceError::Repository(RepositoryError::ConnectionError(message)) => {
            log::error!("Storage unavailable: {message}");
            HttpResponse::ServiceUnavailable().json(json!({"detail": "Storage unavailable"}))
        }
        err => {
            log::error!("Unhandled service error: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
