// src/presentation/http/controllers/dashboard.rs
use crate::application::dto::DashboardStatsDto;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};

#[utoipa::path(
    get,
    path = "/api/admin/stats",
    responses(
        (status = 200, description = "Content, inbox and user totals.", body = DashboardStatsDto),
        (status = 401, description = "Editor role required.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Dashboard"
)]
pub async fn stats(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<DashboardStatsDto>> {
    state
        .services
        .dashboard
        .stats(Some(&user))
        .await
        .into_http()
        .map(Json)
}
