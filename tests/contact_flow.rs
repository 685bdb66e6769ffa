// tests/contact_flow.rs
use agency_cms::application::{
    commands::contacts::{DeleteContactCommand, SubmitContactCommand, UpdateContactStatusCommand},
    error::ApplicationError,
    queries::contacts::ListContactsQuery,
};
use agency_cms::domain::{contact::ContactStatus, user::Role};
use axum::http::StatusCode;
use serde_json::{Value, json};

mod support;

use support::{ADMIN_TOKEN, EDITOR_TOKEN, TestApp, USER_TOKEN, principal};

fn enquiry() -> Value {
    json!({
        "firstName": "Ada",
        "lastName": "Lovelace",
        "email": "Ada@Example.com",
        "subject": "New website",
        "message": "We would like a quote."
    })
}

fn submission(first_name: &str, subject: &str) -> SubmitContactCommand {
    SubmitContactCommand {
        first_name: first_name.into(),
        last_name: "Tester".into(),
        email: format!("{}@example.com", first_name.to_lowercase()),
        phone: None,
        subject: subject.into(),
        message: "Hello there".into(),
    }
}

#[tokio::test]
async fn anonymous_submission_is_stored_unread() {
    let app = TestApp::new();
    let router = app.router();

    let (status, body) = support::post_json(&router, "/api/contact", None, enquiry()).await;

    assert_eq!(status, StatusCode::CREATED, "body: {body}");
    assert_eq!(body["status"], "UNREAD");
    assert_eq!(body["email"], "ada@example.com");
    let stored = app.contacts.snapshot();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].status, ContactStatus::Unread);
}

#[tokio::test]
async fn missing_email_is_a_field_error() {
    let app = TestApp::new();
    let router = app.router();
    let mut payload = enquiry();
    payload.as_object_mut().unwrap().remove("email");

    let (status, body) = support::post_json(&router, "/api/contact", None, payload).await;

    support::assert_error(status, &body, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["email"], json!(["email is required"]));
    assert!(app.contacts.snapshot().is_empty());
}

#[tokio::test]
async fn every_missing_field_is_reported() {
    let app = TestApp::new();
    let router = app.router();

    let (status, body) = support::post_json(&router, "/api/contact", None, json!({})).await;

    support::assert_error(status, &body, StatusCode::BAD_REQUEST);
    for field in ["firstName", "lastName", "email", "subject", "message"] {
        assert!(body["details"][field].is_array(), "missing details for {field}");
    }
}

#[tokio::test]
async fn malformed_json_is_a_bad_request() {
    let app = TestApp::new();
    let router = app.router();
    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/api/contact")
        .header("content-type", "application/json")
        .body(axum::body::Body::from("{not json"))
        .unwrap();

    let response = tower::ServiceExt::oneshot(router, request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn inbox_requires_editor_and_filters() {
    let app = TestApp::new();
    let editor = principal(Role::Editor);
    for (name, subject) in [("Ada", "Quote"), ("Grace", "Careers"), ("Alan", "Quote request")] {
        app.services
            .contact_commands
            .submit(submission(name, subject))
            .await
            .expect("submit");
        app.clock.advance(1);
    }

    let user = principal(Role::User);
    let denied = app
        .services
        .contact_queries
        .list_contacts(Some(&user), ListContactsQuery::default())
        .await;
    assert!(matches!(denied, Err(ApplicationError::Unauthorized(_))));

    let all = app
        .services
        .contact_queries
        .list_contacts(Some(&editor), ListContactsQuery::default())
        .await
        .expect("list");
    let names: Vec<&str> = all.items.iter().map(|c| c.first_name.as_str()).collect();
    assert_eq!(names, vec!["Alan", "Grace", "Ada"]);

    let quotes = app
        .services
        .contact_queries
        .list_contacts(
            Some(&editor),
            ListContactsQuery {
                search: Some("quote".into()),
                ..ListContactsQuery::default()
            },
        )
        .await
        .expect("search");
    assert_eq!(quotes.pagination.total, 2);
}

#[tokio::test]
async fn status_moves_through_the_inbox_states() {
    let app = TestApp::new();
    let editor = principal(Role::Editor);
    let contact = app
        .services
        .contact_commands
        .submit(submission("Ada", "Quote"))
        .await
        .expect("submit");

    for next in ["READ", "REPLIED", "ARCHIVED", "UNREAD"] {
        let updated = app
            .services
            .contact_commands
            .update_status(
                Some(&editor),
                UpdateContactStatusCommand {
                    id: contact.id,
                    status: next.into(),
                },
            )
            .await
            .expect("status change");
        assert_eq!(updated.status.as_str(), next);
    }

    let bogus = app
        .services
        .contact_commands
        .update_status(
            Some(&editor),
            UpdateContactStatusCommand {
                id: contact.id,
                status: "SPAM".into(),
            },
        )
        .await;
    assert!(matches!(bogus, Err(ApplicationError::Validation(_))));

    let unread = app
        .services
        .contact_queries
        .list_contacts(
            Some(&editor),
            ListContactsQuery {
                status: Some("UNREAD".into()),
                ..ListContactsQuery::default()
            },
        )
        .await
        .expect("filter");
    assert_eq!(unread.pagination.total, 1);
}

#[tokio::test]
async fn only_admins_delete_messages() {
    let app = TestApp::new();
    let editor = principal(Role::Editor);
    let admin = principal(Role::Admin);
    let contact = app
        .services
        .contact_commands
        .submit(submission("Ada", "Quote"))
        .await
        .expect("submit");

    let denied = app
        .services
        .contact_commands
        .delete(Some(&editor), DeleteContactCommand { id: contact.id })
        .await;
    assert!(matches!(denied, Err(ApplicationError::Unauthorized(_))));

    app.services
        .contact_commands
        .delete(Some(&admin), DeleteContactCommand { id: contact.id })
        .await
        .expect("admin delete");
    assert!(app.contacts.snapshot().is_empty());
}

#[tokio::test]
async fn http_inbox_routes() {
    let app = TestApp::new();
    let router = app.router();
    let (_, created) = support::post_json(&router, "/api/contact", None, enquiry()).await;
    let id = created["id"].as_i64().unwrap();

    let (status, body) = support::get(&router, "/api/admin/contacts", None).await;
    support::assert_error(status, &body, StatusCode::UNAUTHORIZED);

    let (status, body) = support::get(&router, "/api/admin/contacts", Some(USER_TOKEN)).await;
    support::assert_error(status, &body, StatusCode::UNAUTHORIZED);

    let (status, list) = support::get(&router, "/api/admin/contacts?status=all", Some(EDITOR_TOKEN)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list["pagination"]["total"], 1);

    let (status, updated) = support::put_json(
        &router,
        &format!("/api/admin/contacts/{id}"),
        Some(EDITOR_TOKEN),
        json!({ "status": "READ" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["status"], "READ");

    let (status, fetched) =
        support::get(&router, &format!("/api/admin/contacts/{id}"), Some(EDITOR_TOKEN)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["subject"], "New website");

    let (status, _) =
        support::delete(&router, &format!("/api/admin/contacts/{id}"), Some(ADMIN_TOKEN)).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) =
        support::get(&router, &format!("/api/admin/contacts/{id}"), Some(ADMIN_TOKEN)).await;
    support::assert_error(status, &body, StatusCode::NOT_FOUND);
}
