// src/presentation/http/controllers/posts.rs
use crate::application::commands::posts::{CreatePostCommand, DeletePostCommand, UpdatePostCommand};
use crate::application::dto::PostDto;
use crate::presentation::http::controllers::blog::ContentListParams;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{ApiJson, ApiPath, ApiQuery, Authenticated};
use crate::presentation::http::openapi::{PostListResponse, StatusResponse};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    #[serde(default)]
    pub title: String,
    /// Derived from the title when omitted.
    pub slug: Option<String>,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub content: String,
    pub image: Option<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[schema(example = "DRAFT")]
    pub status: Option<String>,
    /// Estimated from the content when omitted.
    pub read_time: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub image: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    #[schema(example = "PUBLISHED")]
    pub status: Option<String>,
    pub read_time: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/admin/posts",
    params(ContentListParams),
    responses(
        (status = 200, description = "Posts of every status, newest first.", body = PostListResponse),
        (status = 401, description = "Editor role required.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Posts"
)]
pub async fn list_posts(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    ApiQuery(params): ApiQuery<ContentListParams>,
) -> HttpResult<Json<PostListResponse>> {
    state
        .services
        .post_queries
        .list_posts_for_admin(Some(&user), params.into())
        .await
        .into_http()
        .map(|page| Json(page.into()))
}

#[utoipa::path(
    post,
    path = "/api/admin/posts",
    request_body = CreatePostRequest,
    responses(
        (status = 201, description = "Post created.", body = PostDto),
        (status = 400, description = "Invalid payload or slug already in use.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Editor role required.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Posts"
)]
pub async fn create_post(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    ApiJson(payload): ApiJson<CreatePostRequest>,
) -> HttpResult<(StatusCode, Json<PostDto>)> {
    let command = CreatePostCommand {
        title: payload.title,
        slug: payload.slug,
        excerpt: payload.excerpt,
        content: payload.content,
        image: payload.image,
        category: payload.category,
        tags: payload.tags,
        status: payload.status,
        read_time: payload.read_time,
    };

    let post = state
        .services
        .post_commands
        .create_post(Some(&user), command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(post)))
}

#[utoipa::path(
    get,
    path = "/api/admin/posts/{id}",
    params(("id" = i64, Path, description = "Post identifier")),
    responses(
        (status = 200, description = "Post of any status.", body = PostDto),
        (status = 401, description = "Editor role required.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Post not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Posts"
)]
pub async fn get_post(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    ApiPath(id): ApiPath<i64>,
) -> HttpResult<Json<PostDto>> {
    state
        .services
        .post_queries
        .get_post_by_id(Some(&user), id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/admin/posts/{id}",
    params(("id" = i64, Path, description = "Post identifier")),
    request_body = UpdatePostRequest,
    responses(
        (status = 200, description = "Post updated.", body = PostDto),
        (status = 400, description = "Invalid payload or slug already in use.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Editor role required.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Post not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Posts"
)]
pub async fn update_post(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    ApiPath(id): ApiPath<i64>,
    ApiJson(payload): ApiJson<UpdatePostRequest>,
) -> HttpResult<Json<PostDto>> {
    let command = UpdatePostCommand {
        id,
        title: payload.title,
        slug: payload.slug,
        excerpt: payload.excerpt,
        content: payload.content,
        image: payload.image,
        category: payload.category,
        tags: payload.tags,
        status: payload.status,
        read_time: payload.read_time,
    };

    state
        .services
        .post_commands
        .update_post(Some(&user), command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/admin/posts/{id}",
    params(("id" = i64, Path, description = "Post identifier")),
    responses(
        (status = 200, description = "Post deleted.", body = StatusResponse),
        (status = 401, description = "Administrator role required.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Post not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Posts"
)]
pub async fn delete_post(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    ApiPath(id): ApiPath<i64>,
) -> HttpResult<Json<StatusResponse>> {
    state
        .services
        .post_commands
        .delete_post(Some(&user), DeletePostCommand { id })
        .await
        .into_http()?;

    Ok(Json(StatusResponse::deleted()))
}
