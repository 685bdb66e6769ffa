// src/presentation/http/extractors.rs
use crate::{application::dto::AuthenticatedUser, presentation::http::state::HttpState};
use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::{StatusCode, request::Parts},
};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};
use serde::de::DeserializeOwned;

use super::error::HttpError;

/// A caller with a valid bearer token.
#[derive(Debug, Clone)]
pub struct Authenticated(pub AuthenticatedUser);

/// Anonymous callers are allowed; a token that is present must be valid.
#[derive(Debug, Clone)]
pub struct MaybeAuthenticated(pub Option<AuthenticatedUser>);

impl MaybeAuthenticated {
    pub fn user(&self) -> Option<&AuthenticatedUser> {
        self.0.as_ref()
    }
}

async fn resolve_bearer(parts: &Parts) -> Result<Option<AuthenticatedUser>, HttpError> {
    let Some(header) = parts.headers.typed_get::<Authorization<Bearer>>() else {
        return Ok(None);
    };
    let state = parts.extensions.get::<HttpState>().ok_or_else(|| {
        tracing::error!("HttpState extension is not installed on the router");
        HttpError::internal()
    })?;

    let user = state.services.authenticate(header.token()).await?;
    Ok(Some(user))
}

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        resolve_bearer(parts).await?.map(Self).ok_or_else(|| {
            HttpError::status(StatusCode::UNAUTHORIZED, "missing Authorization header")
        })
    }
}

impl<S> FromRequestParts<S> for MaybeAuthenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        resolve_bearer(parts).await.map(Self)
    }
}

/// `Json` whose rejections use the `{error}` body instead of plain text.
#[derive(Debug, Clone)]
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(HttpError::bad_request(rejection.body_text())),
        }
    }
}

/// `Path` whose rejections use the `{error}` body.
#[derive(Debug, Clone)]
pub struct ApiPath<T>(pub T);

impl<T, S> FromRequestParts<S> for ApiPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(Self(value)),
            Err(rejection) => Err(HttpError::status(rejection.status(), rejection.body_text())),
        }
    }
}

/// `Query` whose rejections use the `{error}` body.
#[derive(Debug, Clone)]
pub struct ApiQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(Query(value)) => Ok(Self(value)),
            Err(rejection) => Err(HttpError::status(rejection.status(), rejection.body_text())),
        }
    }
}
