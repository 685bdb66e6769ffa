// src/presentation/http/controllers/users.rs
use crate::application::{
    commands::users::{DeleteUserCommand, UpdateUserCommand},
    dto::UserDto,
    queries::users::ListUsersQuery,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{ApiJson, ApiPath, ApiQuery, Authenticated};
use crate::presentation::http::openapi::{StatusResponse, UserListResponse};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListUsersParams {
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    #[schema(example = "EDITOR")]
    pub role: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/admin/users",
    params(ListUsersParams),
    responses(
        (status = 200, description = "Registered users.", body = UserListResponse),
        (status = 401, description = "Administrator role required.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Users"
)]
pub async fn list_users(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    ApiQuery(params): ApiQuery<ListUsersParams>,
) -> HttpResult<Json<UserListResponse>> {
    let query = ListUsersQuery {
        page: params.page,
        limit: params.limit,
    };

    state
        .services
        .user_queries
        .list_users(Some(&user), query)
        .await
        .into_http()
        .map(|page| Json(page.into()))
}

#[utoipa::path(
    put,
    path = "/api/admin/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated.", body = UserDto),
        (status = 400, description = "Invalid payload.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Administrator role required.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "User not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Users"
)]
pub async fn update_user(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    ApiPath(id): ApiPath<i64>,
    ApiJson(payload): ApiJson<UpdateUserRequest>,
) -> HttpResult<Json<UserDto>> {
    let command = UpdateUserCommand {
        user_id: id,
        name: payload.name,
        role: payload.role,
    };

    state
        .services
        .user_commands
        .update_user(Some(&user), command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/admin/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User deleted.", body = StatusResponse),
        (status = 400, description = "Self-deletion or the user still authors content.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Administrator role required.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "User not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Users"
)]
pub async fn delete_user(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    ApiPath(id): ApiPath<i64>,
) -> HttpResult<Json<StatusResponse>> {
    state
        .services
        .user_commands
        .delete_user(Some(&user), DeleteUserCommand { user_id: id })
        .await
        .into_http()?;

    Ok(Json(StatusResponse::deleted()))
}
