// src/presentation/http/openapi.rs
use crate::application::dto::{
    ContactDto, Paginated, PaginationMeta, PortfolioItemDto, PostDto, UserDto,
};
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use std::{env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
    server::Server,
};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

pub const DEFAULT_SNAPSHOT_PATH: &str = "openapi/openapi.json";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".into(),
        }
    }

    pub fn deleted() -> Self {
        Self {
            status: "deleted".into(),
        }
    }
}

macro_rules! list_response {
    ($name:ident, $item:ty) => {
        #[derive(Debug, Serialize, Deserialize, ToSchema)]
        pub struct $name {
            pub items: Vec<$item>,
            pub pagination: PaginationMeta,
        }

        impl From<Paginated<$item>> for $name {
            fn from(page: Paginated<$item>) -> Self {
                Self {
                    items: page.items,
                    pagination: page.pagination,
                }
            }
        }
    };
}

list_response!(PostListResponse, PostDto);
list_response!(PortfolioListResponse, PortfolioItemDto);
list_response!(ContactListResponse, ContactDto);
list_response!(UserListResponse, UserDto);

#[derive(OpenApi)]
#[openapi(
    paths(
        super::routes::health,
        crate::presentation::http::controllers::auth::register,
        crate::presentation::http::controllers::auth::login,
        crate::presentation::http::controllers::auth::me,
        crate::presentation::http::controllers::blog::list_posts,
        crate::presentation::http::controllers::blog::get_post_by_slug,
        crate::presentation::http::controllers::posts::list_posts,
        crate::presentation::http::controllers::posts::create_post,
        crate::presentation::http::controllers::posts::get_post,
        crate::presentation::http::controllers::posts::update_post,
        crate::presentation::http::controllers::posts::delete_post,
        crate::presentation::http::controllers::portfolio::list_public_items,
        crate::presentation::http::controllers::portfolio::get_item_by_slug,
        crate::presentation::http::controllers::portfolio::list_items,
        crate::presentation::http::controllers::portfolio::create_item,
        crate::presentation::http::controllers::portfolio::get_item,
        crate::presentation::http::controllers::portfolio::update_item,
        crate::presentation::http::controllers::portfolio::delete_item,
        crate::presentation::http::controllers::contacts::submit,
        crate::presentation::http::controllers::contacts::list_contacts,
        crate::presentation::http::controllers::contacts::get_contact,
        crate::presentation::http::controllers::contacts::update_status,
        crate::presentation::http::controllers::contacts::delete_contact,
        crate::presentation::http::controllers::users::list_users,
        crate::presentation::http::controllers::users::update_user,
        crate::presentation::http::controllers::users::delete_user,
        crate::presentation::http::controllers::dashboard::stats
    ),
    components(
        schemas(
            StatusResponse,
            PostListResponse,
            PortfolioListResponse,
            ContactListResponse,
            UserListResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::auth::RegisterRequest,
            crate::presentation::http::controllers::auth::LoginRequest,
            crate::presentation::http::controllers::auth::LoginResponse,
            crate::presentation::http::controllers::blog::ContentListParams,
            crate::presentation::http::controllers::posts::CreatePostRequest,
            crate::presentation::http::controllers::posts::UpdatePostRequest,
            crate::presentation::http::controllers::portfolio::CreatePortfolioItemRequest,
            crate::presentation::http::controllers::portfolio::UpdatePortfolioItemRequest,
            crate::presentation::http::controllers::contacts::SubmitContactRequest,
            crate::presentation::http::controllers::contacts::UpdateContactStatusRequest,
            crate::presentation::http::controllers::contacts::ContactListParams,
            crate::presentation::http::controllers::users::ListUsersParams,
            crate::presentation::http::controllers::users::UpdateUserRequest,
            crate::application::dto::PaginationMeta,
            crate::application::dto::PostDto,
            crate::application::dto::PortfolioItemDto,
            crate::application::dto::ContactDto,
            crate::application::dto::UserDto,
            crate::application::dto::AuthTokenDto,
            crate::application::dto::DashboardStatsDto,
            crate::application::dto::ContentCounts,
            crate::application::dto::ContactCounts
        )
    ),
    tags(
        (name = "Auth", description = "Registration, login and profile"),
        (name = "Blog", description = "Public blog endpoints"),
        (name = "Posts", description = "Post management"),
        (name = "Portfolio", description = "Public and admin portfolio endpoints"),
        (name = "Contacts", description = "Contact form and inbox"),
        (name = "Users", description = "User management"),
        (name = "Dashboard", description = "Admin statistics"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    info(
        title = "Agency CMS API",
        description = "Blog, portfolio and contact backend for the agency site",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        let mut http = Http::new(HttpAuthScheme::Bearer);
        http.bearer_format = Some("Biscuit".into());
        components.add_security_scheme("bearerAuth", SecurityScheme::Http(http));

        let url = env::var("PUBLIC_API_URL")
            .ok()
            .map(|value| value.trim().trim_end_matches('/').to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| "http://localhost:3000".to_string());
        openapi.servers = Some(vec![Server::new(url)]);
    }
}

pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new()
        .merge(swagger)
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

/// Writes the pretty-printed document to `OPENAPI_SNAPSHOT_PATH` (default
/// `openapi/openapi.json`) and returns the path used.
pub fn write_openapi_snapshot() -> std::io::Result<String> {
    let output_path =
        env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| DEFAULT_SNAPSHOT_PATH.to_string());
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(writer, &ApiDoc::openapi())?;
    Ok(output_path)
}
