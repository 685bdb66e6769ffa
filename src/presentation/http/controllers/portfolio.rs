// src/presentation/http/controllers/portfolio.rs
use crate::application::commands::portfolio::{
    CreatePortfolioItemCommand, DeletePortfolioItemCommand, UpdatePortfolioItemCommand,
};
use crate::application::dto::PortfolioItemDto;
use crate::presentation::http::controllers::blog::ContentListParams;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{ApiJson, ApiPath, ApiQuery, Authenticated};
use crate::presentation::http::openapi::{PortfolioListResponse, StatusResponse};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePortfolioItemRequest {
    #[serde(default)]
    pub title: String,
    pub slug: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub full_description: String,
    pub image: Option<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub client: Option<String>,
    pub duration: Option<String>,
    /// Display label such as "Spring 2024".
    #[serde(default)]
    pub date: String,
    pub link: Option<String>,
    #[serde(default)]
    pub challenges: Vec<String>,
    #[serde(default)]
    pub solutions: Vec<String>,
    #[serde(default)]
    pub results: Vec<String>,
    #[serde(default)]
    pub gallery: Vec<String>,
    #[schema(example = "PUBLISHED")]
    pub status: Option<String>,
    pub order: Option<i32>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePortfolioItemRequest {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub full_description: Option<String>,
    pub image: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub client: Option<String>,
    pub duration: Option<String>,
    pub date: Option<String>,
    pub link: Option<String>,
    pub challenges: Option<Vec<String>>,
    pub solutions: Option<Vec<String>>,
    pub results: Option<Vec<String>>,
    pub gallery: Option<Vec<String>>,
    pub status: Option<String>,
    pub order: Option<i32>,
}

#[utoipa::path(
    get,
    path = "/api/portfolio",
    params(ContentListParams),
    responses(
        (status = 200, description = "Published portfolio items in display order.", body = PortfolioListResponse),
        (status = 400, description = "Unknown status value.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Only PUBLISHED items are listed here.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Portfolio"
)]
pub async fn list_public_items(
    Extension(state): Extension<HttpState>,
    ApiQuery(params): ApiQuery<ContentListParams>,
) -> HttpResult<Json<PortfolioListResponse>> {
    state
        .services
        .portfolio_queries
        .list_published_items(params.into())
        .await
        .into_http()
        .map(|page| Json(page.into()))
}

#[utoipa::path(
    get,
    path = "/api/portfolio/{slug}",
    params(("slug" = String, Path, description = "Portfolio item slug")),
    responses(
        (status = 200, description = "Published portfolio item.", body = PortfolioItemDto),
        (status = 404, description = "No published item with this slug.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Portfolio"
)]
pub async fn get_item_by_slug(
    Extension(state): Extension<HttpState>,
    ApiPath(slug): ApiPath<String>,
) -> HttpResult<Json<PortfolioItemDto>> {
    state
        .services
        .portfolio_queries
        .get_published_item(&slug)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/admin/portfolio",
    params(ContentListParams),
    responses(
        (status = 200, description = "Portfolio items of every status.", body = PortfolioListResponse),
        (status = 401, description = "Editor role required.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Portfolio"
)]
pub async fn list_items(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    ApiQuery(params): ApiQuery<ContentListParams>,
) -> HttpResult<Json<PortfolioListResponse>> {
    state
        .services
        .portfolio_queries
        .list_items_for_admin(Some(&user), params.into())
        .await
        .into_http()
        .map(|page| Json(page.into()))
}

#[utoipa::path(
    post,
    path = "/api/admin/portfolio",
    request_body = CreatePortfolioItemRequest,
    responses(
        (status = 201, description = "Portfolio item created.", body = PortfolioItemDto),
        (status = 400, description = "Invalid payload or slug already in use.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Editor role required.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Portfolio"
)]
pub async fn create_item(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    ApiJson(payload): ApiJson<CreatePortfolioItemRequest>,
) -> HttpResult<(StatusCode, Json<PortfolioItemDto>)> {
    let command = CreatePortfolioItemCommand {
        title: payload.title,
        slug: payload.slug,
        description: payload.description,
        full_description: payload.full_description,
        image: payload.image,
        category: payload.category,
        tags: payload.tags,
        client: payload.client,
        duration: payload.duration,
        date: payload.date,
        link: payload.link,
        challenges: payload.challenges,
        solutions: payload.solutions,
        results: payload.results,
        gallery: payload.gallery,
        status: payload.status,
        order: payload.order,
    };

    let item = state
        .services
        .portfolio_commands
        .create_item(Some(&user), command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(item)))
}

#[utoipa::path(
    get,
    path = "/api/admin/portfolio/{id}",
    params(("id" = i64, Path, description = "Portfolio item identifier")),
    responses(
        (status = 200, description = "Portfolio item of any status.", body = PortfolioItemDto),
        (status = 401, description = "Editor role required.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Portfolio item not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Portfolio"
)]
pub async fn get_item(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    ApiPath(id): ApiPath<i64>,
) -> HttpResult<Json<PortfolioItemDto>> {
    state
        .services
        .portfolio_queries
        .get_item_by_id(Some(&user), id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/admin/portfolio/{id}",
    params(("id" = i64, Path, description = "Portfolio item identifier")),
    request_body = UpdatePortfolioItemRequest,
    responses(
        (status = 200, description = "Portfolio item updated.", body = PortfolioItemDto),
        (status = 400, description = "Invalid payload or slug already in use.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Editor role required.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Portfolio item not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Portfolio"
)]
pub async fn update_item(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    ApiPath(id): ApiPath<i64>,
    ApiJson(payload): ApiJson<UpdatePortfolioItemRequest>,
) -> HttpResult<Json<PortfolioItemDto>> {
    let command = UpdatePortfolioItemCommand {
        id,
        title: payload.title,
        slug: payload.slug,
        description: payload.description,
        full_description: payload.full_description,
        image: payload.image,
        category: payload.category,
        tags: payload.tags,
        client: payload.client,
        duration: payload.duration,
        date: payload.date,
        link: payload.link,
        challenges: payload.challenges,
        solutions: payload.solutions,
        results: payload.results,
        gallery: payload.gallery,
        status: payload.status,
        order: payload.order,
    };

    state
        .services
        .portfolio_commands
        .update_item(Some(&user), command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/admin/portfolio/{id}",
    params(("id" = i64, Path, description = "Portfolio item identifier")),
    responses(
        (status = 200, description = "Portfolio item deleted.", body = StatusResponse),
        (status = 401, description = "Administrator role required.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Portfolio item not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Portfolio"
)]
pub async fn delete_item(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    ApiPath(id): ApiPath<i64>,
) -> HttpResult<Json<StatusResponse>> {
    state
        .services
        .portfolio_commands
        .delete_item(Some(&user), DeletePortfolioItemCommand { id })
        .await
        .into_http()?;

    Ok(Json(StatusResponse::deleted()))
}
