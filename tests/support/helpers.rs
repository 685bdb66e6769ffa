// tests/support/helpers.rs
use std::sync::Arc;

use agency_cms::application::{
    ports::{
        security::{PasswordHasher, TokenManager},
        time::Clock,
        util::SlugGenerator,
    },
    services::ApplicationServices,
};
use agency_cms::domain::{
    contact::ContactRepository,
    portfolio::{PortfolioReadRepository, PortfolioWriteRepository},
    post::{PostReadRepository, PostWriteRepository},
    user::UserRepository,
};
use agency_cms::infrastructure::util::DefaultSlugGenerator;
use agency_cms::presentation::http::{routes::build_router, state::HttpState};
use axum::{
    Router,
    body::{self, Body},
    http::{Method, Request, StatusCode, header},
};
use serde_json::Value;
use tower::util::ServiceExt as _;

use super::mocks::{
    BlindPortfolioSlugLookup, BlindPostSlugLookup, DummyTokenManager, InMemoryContactRepo,
    InMemoryPortfolioRepo, InMemoryPostRepo, InMemoryUserRepo, StrictPasswordHasher, TestClock,
};

/// Services wired to in-memory stores, with handles kept for assertions.
pub struct TestApp {
    pub services: Arc<ApplicationServices>,
    pub posts: Arc<InMemoryPostRepo>,
    pub portfolio: Arc<InMemoryPortfolioRepo>,
    pub contacts: Arc<InMemoryContactRepo>,
    pub users: Arc<InMemoryUserRepo>,
    pub clock: Arc<TestClock>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::build(Arc::new(InMemoryUserRepo::seeded()), false, Arc::new(DummyTokenManager))
    }

    /// Slug availability checks always pass, so only the store constraint
    /// can catch a duplicate.
    pub fn with_blind_slug_checks() -> Self {
        Self::build(Arc::new(InMemoryUserRepo::seeded()), true, Arc::new(DummyTokenManager))
    }

    pub fn with_users(users: Arc<InMemoryUserRepo>, token_manager: Arc<dyn TokenManager>) -> Self {
        Self::build(users, false, token_manager)
    }

    fn build(
        users: Arc<InMemoryUserRepo>,
        blind_slugs: bool,
        token_manager: Arc<dyn TokenManager>,
    ) -> Self {
        let posts = Arc::new(InMemoryPostRepo::default());
        let portfolio = Arc::new(InMemoryPortfolioRepo::default());
        let contacts = Arc::new(InMemoryContactRepo::default());
        let clock = Arc::new(TestClock::new());

        let post_read: Arc<dyn PostReadRepository> = if blind_slugs {
            Arc::new(BlindPostSlugLookup(Arc::clone(&posts)))
        } else {
            posts.clone()
        };
        let portfolio_read: Arc<dyn PortfolioReadRepository> = if blind_slugs {
            Arc::new(BlindPortfolioSlugLookup(Arc::clone(&portfolio)))
        } else {
            portfolio.clone()
        };
        let user_repo: Arc<dyn UserRepository> = users.clone();
        let post_write: Arc<dyn PostWriteRepository> = posts.clone();
        let portfolio_write: Arc<dyn PortfolioWriteRepository> = portfolio.clone();
        let contact_repo: Arc<dyn ContactRepository> = contacts.clone();
        let hasher: Arc<dyn PasswordHasher> = Arc::new(StrictPasswordHasher);
        let clock_port: Arc<dyn Clock> = clock.clone();
        let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator::default());

        let services = Arc::new(ApplicationServices::new(
            user_repo,
            post_write,
            post_read,
            portfolio_write,
            portfolio_read,
            contact_repo,
            hasher,
            token_manager,
            clock_port,
            slugger,
        ));

        Self {
            services,
            posts,
            portfolio,
            contacts,
            users,
            clock,
        }
    }

    pub fn router(&self) -> Router {
        build_router(HttpState {
            services: Arc::clone(&self.services),
        })
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Sends one request through the router and decodes the JSON body
/// (`Value::Null` when the body is empty).
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("response body is JSON")
    };
    (status, json)
}

pub async fn get(app: &Router, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
    send(app, Method::GET, uri, token, None).await
}

pub async fn post_json(
    app: &Router,
    uri: &str,
    token: Option<&str>,
    body: Value,
) -> (StatusCode, Value) {
    send(app, Method::POST, uri, token, Some(body)).await
}

pub async fn put_json(
    app: &Router,
    uri: &str,
    token: Option<&str>,
    body: Value,
) -> (StatusCode, Value) {
    send(app, Method::PUT, uri, token, Some(body)).await
}

pub async fn delete(app: &Router, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
    send(app, Method::DELETE, uri, token, None).await
}

/// Asserts the status and the `{error, details?}` body shape.
pub fn assert_error(status: StatusCode, body: &Value, expected: StatusCode) {
    assert_eq!(status, expected, "unexpected status, body: {body}");
    assert!(
        body.get("error").and_then(Value::as_str).is_some_and(|e| !e.is_empty()),
        "expected an error message, got {body}"
    );
}
