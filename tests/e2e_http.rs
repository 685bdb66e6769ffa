// tests/e2e_http.rs
use axum::http::StatusCode;
use serde_json::{Value, json};

mod support;

use support::{ADMIN_TOKEN, EDITOR_TOKEN, TestApp, USER_TOKEN};

fn post(title: &str, status: &str) -> Value {
    json!({
        "title": title,
        "excerpt": "excerpt",
        "content": "<p>body</p>",
        "category": "News",
        "status": status
    })
}

fn project(title: &str, status: &str) -> Value {
    json!({
        "title": title,
        "description": "Short",
        "fullDescription": "Long",
        "category": "Web",
        "date": "2024",
        "status": status
    })
}

fn titles(list: &Value) -> Vec<&str> {
    list["items"]
        .as_array()
        .map(|items| items.iter().filter_map(|item| item["title"].as_str()).collect())
        .unwrap_or_default()
}

#[tokio::test]
async fn health_reports_ok() {
    let router = TestApp::new().router();
    let (status, body) = support::get(&router, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn openapi_document_is_served() {
    let router = TestApp::new().router();
    let (status, doc) = support::get(&router, "/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"].get("/api/admin/posts").is_some());
    assert!(doc["paths"].get("/api/contact").is_some());
}

#[tokio::test]
async fn admin_routes_require_a_valid_token() {
    let router = TestApp::new().router();
    for uri in [
        "/api/admin/posts",
        "/api/admin/portfolio",
        "/api/admin/contacts",
        "/api/admin/users",
        "/api/admin/stats",
    ] {
        let (status, body) = support::get(&router, uri, None).await;
        support::assert_error(status, &body, StatusCode::UNAUTHORIZED);
        let (status, body) = support::get(&router, uri, Some("forged")).await;
        support::assert_error(status, &body, StatusCode::UNAUTHORIZED);
    }
}

#[tokio::test]
async fn public_blog_and_portfolio_only_show_published_entries() {
    let router = TestApp::new().router();
    for (title, status) in [("Live", "PUBLISHED"), ("Draft", "DRAFT"), ("Old", "ARCHIVED")] {
        let (code, _) =
            support::post_json(&router, "/api/admin/posts", Some(EDITOR_TOKEN), post(title, status))
                .await;
        assert_eq!(code, StatusCode::CREATED);
        let (code, _) = support::post_json(
            &router,
            "/api/admin/portfolio",
            Some(EDITOR_TOKEN),
            project(title, status),
        )
        .await;
        assert_eq!(code, StatusCode::CREATED);
    }

    for (base, admin) in [
        ("/api/blog", "/api/admin/posts"),
        ("/api/portfolio", "/api/admin/portfolio"),
    ] {
        // Signed-in editors and stale tokens get the same view as visitors.
        for token in [None, Some(EDITOR_TOKEN), Some(ADMIN_TOKEN), Some("expired-token")] {
            let (status, list) = support::get(&router, base, token).await;
            assert_eq!(status, StatusCode::OK, "{base} with {token:?}: {list}");
            assert_eq!(titles(&list), vec!["Live"], "{base} with {token:?}");

            let (status, list) = support::get(&router, &format!("{base}?status=all"), token).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(list["pagination"]["total"], 1);

            let (status, body) =
                support::get(&router, &format!("{base}?status=DRAFT"), token).await;
            support::assert_error(status, &body, StatusCode::UNAUTHORIZED);
        }

        let (status, list) = support::get(&router, admin, Some(EDITOR_TOKEN)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(list["pagination"]["total"], 3);

        let (status, body) = support::get(&router, &format!("{base}/draft"), None).await;
        support::assert_error(status, &body, StatusCode::NOT_FOUND);
        let (status, _) = support::get(&router, &format!("{base}/live"), None).await;
        assert_eq!(status, StatusCode::OK);
    }
}

#[tokio::test]
async fn dashboard_counts_content_contacts_and_users() {
    let app = TestApp::new();
    let router = app.router();
    for (title, status) in [("A", "PUBLISHED"), ("B", "PUBLISHED"), ("C", "DRAFT")] {
        support::post_json(&router, "/api/admin/posts", Some(EDITOR_TOKEN), post(title, status))
            .await;
    }
    support::post_json(
        &router,
        "/api/admin/portfolio",
        Some(EDITOR_TOKEN),
        project("Archive", "ARCHIVED"),
    )
    .await;
    for email in ["one@example.com", "two@example.com"] {
        let (status, _) = support::post_json(
            &router,
            "/api/contact",
            None,
            json!({
                "firstName": "Ada",
                "lastName": "Lovelace",
                "email": email,
                "subject": "Hello",
                "message": "We need a website."
            }),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }
    let first_contact = app.contacts.snapshot()[0].id;
    support::put_json(
        &router,
        &format!("/api/admin/contacts/{first_contact}"),
        Some(ADMIN_TOKEN),
        json!({ "status": "READ" }),
    )
    .await;

    let (status, body) = support::get(&router, "/api/admin/stats", Some(USER_TOKEN)).await;
    support::assert_error(status, &body, StatusCode::UNAUTHORIZED);

    let (status, stats) = support::get(&router, "/api/admin/stats", Some(EDITOR_TOKEN)).await;
    assert_eq!(status, StatusCode::OK, "body: {stats}");
    assert_eq!(
        stats,
        json!({
            "posts": { "total": 3, "published": 2, "drafts": 1, "archived": 0 },
            "portfolio": { "total": 1, "published": 0, "drafts": 0, "archived": 1 },
            "contacts": { "total": 2, "unread": 1 },
            "users": 3
        })
    );
}

#[tokio::test]
async fn malformed_ids_and_query_strings_use_the_error_body() {
    let router = TestApp::new().router();
    for uri in [
        "/api/admin/posts/abc",
        "/api/admin/portfolio/1.5",
        "/api/admin/contacts/x",
        "/api/admin/posts?page=first",
        "/api/admin/contacts?limit=-3",
        "/api/admin/users?page=two",
    ] {
        let (status, body) = support::get(&router, uri, Some(ADMIN_TOKEN)).await;
        support::assert_error(status, &body, StatusCode::BAD_REQUEST);
    }

    let (status, body) = support::get(&router, "/api/blog?limit=lots", None).await;
    support::assert_error(status, &body, StatusCode::BAD_REQUEST);

    let (status, body) =
        support::delete(&router, "/api/admin/users/not-a-number", Some(ADMIN_TOKEN)).await;
    support::assert_error(status, &body, StatusCode::BAD_REQUEST);

    let (status, body) = support::get(&router, "/api/admin/posts/0", Some(ADMIN_TOKEN)).await;
    support::assert_error(status, &body, StatusCode::NOT_FOUND);
}
