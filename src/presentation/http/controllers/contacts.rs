// src/presentation/http/controllers/contacts.rs
use crate::application::commands::contacts::{
    DeleteContactCommand, SubmitContactCommand, UpdateContactStatusCommand,
};
use crate::application::dto::ContactDto;
use crate::application::queries::contacts::ListContactsQuery;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{ApiJson, ApiPath, ApiQuery, Authenticated};
use crate::presentation::http::openapi::{ContactListResponse, StatusResponse};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitContactRequest {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    pub phone: Option<String>,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateContactStatusRequest {
    /// `UNREAD`, `READ`, `REPLIED` or `ARCHIVED`.
    #[serde(default)]
    #[schema(example = "READ")]
    pub status: String,
}

#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ContactListParams {
    pub status: Option<String>,
    /// Matches names, email and subject.
    pub search: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

#[utoipa::path(
    post,
    path = "/api/contact",
    request_body = SubmitContactRequest,
    responses(
        (status = 201, description = "Message received.", body = ContactDto),
        (status = 400, description = "Invalid payload.", body = crate::presentation::http::error::ErrorResponse),
        (status = 429, description = "Too many submissions from this address.")
    ),
    tag = "Contacts"
)]
pub async fn submit(
    Extension(state): Extension<HttpState>,
    ApiJson(payload): ApiJson<SubmitContactRequest>,
) -> HttpResult<(StatusCode, Json<ContactDto>)> {
    let command = SubmitContactCommand {
        first_name: payload.first_name,
        last_name: payload.last_name,
        email: payload.email,
        phone: payload.phone,
        subject: payload.subject,
        message: payload.message,
    };

    let contact = state
        .services
        .contact_commands
        .submit(command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(contact)))
}

#[utoipa::path(
    get,
    path = "/api/admin/contacts",
    params(ContactListParams),
    responses(
        (status = 200, description = "Contact messages, newest first.", body = ContactListResponse),
        (status = 401, description = "Editor role required.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Contacts"
)]
pub async fn list_contacts(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    ApiQuery(params): ApiQuery<ContactListParams>,
) -> HttpResult<Json<ContactListResponse>> {
    let query = ListContactsQuery {
        status: params.status,
        search: params.search,
        page: params.page,
        limit: params.limit,
    };

    state
        .services
        .contact_queries
        .list_contacts(Some(&user), query)
        .await
        .into_http()
        .map(|page| Json(page.into()))
}

#[utoipa::path(
    get,
    path = "/api/admin/contacts/{id}",
    params(("id" = i64, Path, description = "Contact message identifier")),
    responses(
        (status = 200, description = "Contact message.", body = ContactDto),
        (status = 401, description = "Editor role required.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Contact message not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Contacts"
)]
pub async fn get_contact(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    ApiPath(id): ApiPath<i64>,
) -> HttpResult<Json<ContactDto>> {
    state
        .services
        .contact_queries
        .get_contact(Some(&user), id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/admin/contacts/{id}",
    params(("id" = i64, Path, description = "Contact message identifier")),
    request_body = UpdateContactStatusRequest,
    responses(
        (status = 200, description = "Status updated.", body = ContactDto),
        (status = 400, description = "Unknown status.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Editor role required.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Contact message not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Contacts"
)]
pub async fn update_status(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    ApiPath(id): ApiPath<i64>,
    ApiJson(payload): ApiJson<UpdateContactStatusRequest>,
) -> HttpResult<Json<ContactDto>> {
    let command = UpdateContactStatusCommand {
        id,
        status: payload.status,
    };

    state
        .services
        .contact_commands
        .update_status(Some(&user), command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/admin/contacts/{id}",
    params(("id" = i64, Path, description = "Contact message identifier")),
    responses(
        (status = 200, description = "Contact message deleted.", body = StatusResponse),
        (status = 401, description = "Administrator role required.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Contact message not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Contacts"
)]
pub async fn delete_contact(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    ApiPath(id): ApiPath<i64>,
) -> HttpResult<Json<StatusResponse>> {
    state
        .services
        .contact_commands
        .delete(Some(&user), DeleteContactCommand { id })
        .await
        .into_http()?;

    Ok(Json(StatusResponse::deleted()))
}
