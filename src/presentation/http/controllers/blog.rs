// src/presentation/http/controllers/blog.rs
use crate::application::{dto::PostDto, listing::ListContentQuery};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{ApiPath, ApiQuery};
use crate::presentation::http::openapi::PostListResponse;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

/// Query string shared by the content listing endpoints.
#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ContentListParams {
    /// `DRAFT`, `PUBLISHED`, `ARCHIVED` or `all`.
    pub status: Option<String>,
    pub category: Option<String>,
    pub search: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl From<ContentListParams> for ListContentQuery {
    fn from(params: ContentListParams) -> Self {
        Self {
            status: params.status,
            category: params.category,
            search: params.search,
            page: params.page,
            limit: params.limit,
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/blog",
    params(ContentListParams),
    responses(
        (status = 200, description = "Published posts, newest first.", body = PostListResponse),
        (status = 400, description = "Unknown status value.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Only PUBLISHED posts are listed here.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Blog"
)]
pub async fn list_posts(
    Extension(state): Extension<HttpState>,
    ApiQuery(params): ApiQuery<ContentListParams>,
) -> HttpResult<Json<PostListResponse>> {
    state
        .services
        .post_queries
        .list_published_posts(params.into())
        .await
        .into_http()
        .map(|page| Json(page.into()))
}

#[utoipa::path(
    get,
    path = "/api/blog/{slug}",
    params(("slug" = String, Path, description = "Post slug")),
    responses(
        (status = 200, description = "Published post.", body = PostDto),
        (status = 404, description = "No published post with this slug.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Blog"
)]
pub async fn get_post_by_slug(
    Extension(state): Extension<HttpState>,
    ApiPath(slug): ApiPath<String>,
) -> HttpResult<Json<PostDto>> {
    state
        .services
        .post_queries
        .get_published_post(&slug)
        .await
        .into_http()
        .map(Json)
}
