// src/presentation/http/routes.rs
use crate::config::ContactRateLimit;
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{auth, blog, contacts, dashboard, portfolio, posts, users},
    middleware::rate_limit::contact_rate_limit_layer,
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Json, Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

/// Deployment-specific router settings.
#[derive(Debug, Clone, Default)]
pub struct RouterOptions {
    /// Empty means any origin.
    pub allowed_origins: Vec<String>,
    /// `None` disables rate limiting on the contact form.
    pub contact_rate: Option<ContactRateLimit>,
}

/// Router without rate limiting, allowing any origin.
pub fn build_router(state: HttpState) -> Router {
    build_router_with_options(state, &RouterOptions::default())
}

pub fn build_router_with_options(state: HttpState, options: &RouterOptions) -> Router {
    let mut contact = Router::new().route("/api/contact", post(contacts::submit));
    if let Some(limit) = options.contact_rate {
        match contact_rate_limit_layer(limit) {
            Some(layer) => contact = contact.layer(layer),
            None => tracing::warn!("contact rate limit is invalid; submissions are not limited"),
        }
    }

    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/me", get(auth::me))
        .route("/api/blog", get(blog::list_posts))
        .route("/api/blog/{slug}", get(blog::get_post_by_slug))
        .route(
            "/api/admin/posts",
            get(posts::list_posts).post(posts::create_post),
        )
        .route(
            "/api/admin/posts/{id}",
            get(posts::get_post)
                .put(posts::update_post)
                .delete(posts::delete_post),
        )
        .route("/api/portfolio", get(portfolio::list_public_items))
        .route("/api/portfolio/{slug}", get(portfolio::get_item_by_slug))
        .route(
            "/api/admin/portfolio",
            get(portfolio::list_items).post(portfolio::create_item),
        )
        .route(
            "/api/admin/portfolio/{id}",
            get(portfolio::get_item)
                .put(portfolio::update_item)
                .delete(portfolio::delete_item),
        )
        .merge(contact)
        .route("/api/admin/contacts", get(contacts::list_contacts))
        .route(
            "/api/admin/contacts/{id}",
            get(contacts::get_contact)
                .put(contacts::update_status)
                .delete(contacts::delete_contact),
        )
        .route("/api/admin/users", get(users::list_users))
        .route(
            "/api/admin/users/{id}",
            axum::routing::put(users::update_user).delete(users::delete_user),
        )
        .route("/api/admin/stats", get(dashboard::stats))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&options.allowed_origins))
        .layer(Extension(state))
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring malformed CORS origin");
                None
            }
        })
        .collect();

    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .max_age(Duration::from_secs(3600));

    if origins.is_empty() {
        layer.allow_origin(Any).allow_headers(Any)
    } else {
        layer
            .allow_origin(AllowOrigin::list(origins))
            .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
            .allow_credentials(true)
    }
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse::ok())
}
