// src/presentation/http/error.rs
use crate::application::{ApplicationResult, error::ApplicationError, validation::FieldErrors};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    message: String,
    details: Option<FieldErrors>,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Validation(errors) => Self {
                status: StatusCode::BAD_REQUEST,
                message: "validation failed".into(),
                details: Some(errors),
            },
            ApplicationError::SlugConflict(slug) => {
                tracing::debug!(%slug, "slug collision rejected");
                Self {
                    status: StatusCode::BAD_REQUEST,
                    message: "validation failed".into(),
                    details: Some(FieldErrors::single("slug", "slug is already in use")),
                }
            }
            ApplicationError::Conflict(msg) => Self::status(StatusCode::BAD_REQUEST, msg),
            ApplicationError::Unauthorized(msg) => Self::status(StatusCode::UNAUTHORIZED, msg),
            ApplicationError::NotFound(msg) => Self::status(StatusCode::NOT_FOUND, msg),
            ApplicationError::Store(msg) => {
                tracing::error!(error = %msg, "request failed in the store layer");
                Self::internal()
            }
        }
    }

    pub fn status(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            details: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::status(StatusCode::BAD_REQUEST, message)
    }

    pub fn internal() -> Self {
        Self::status(StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
    }
}

impl From<ApplicationError> for HttpError {
    fn from(err: ApplicationError) -> Self {
        Self::from_error(err)
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let payload = ErrorResponse {
            error: self.message,
            details: self.details,
        };
        (self.status, Json(payload)).into_response()
    }
}

/// Body of every non-2xx response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    /// Field name to messages, present for validation failures.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub details: Option<FieldErrors>,
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: ApplicationError) -> StatusCode {
        HttpError::from_error(err).status
    }

    #[test]
    fn maps_application_errors_to_statuses() {
        assert_eq!(
            status_of(ApplicationError::validation("title", "title is required")),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(ApplicationError::SlugConflict("hello".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(ApplicationError::conflict("email is already registered")),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(ApplicationError::unauthorized("nope")),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            status_of(ApplicationError::not_found("post not found")),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(ApplicationError::store("pool closed")),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn slug_conflicts_report_the_slug_field() {
        let err = HttpError::from_error(ApplicationError::SlugConflict("hello".into()));
        let details = err.details.expect("details");
        assert_eq!(details.get("slug"), Some(&["slug is already in use".to_string()][..]));
    }

    #[test]
    fn store_failures_hide_their_cause() {
        let err = HttpError::from_error(ApplicationError::store("password authentication failed"));
        assert_eq!(err.message, "internal server error");
        assert!(err.details.is_none());
    }
}
