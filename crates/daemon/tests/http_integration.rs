//! Integration tests for the bucket browser HTTP surface
//!
//! Requests are driven in-process through the router; no socket is bound.

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use tempfile::TempDir;
use tower::ServiceExt;

use boltview_daemon::http_server::api::v0::buckets::ListResponse;
use boltview_daemon::http_server::{self, Config};
use boltview_daemon::ServiceState;
use common::prelude::Store;

/// Router over a store holding `users/{alice=admin, sessions/{s1}}` and
/// `orders/{blank=""}`.
fn setup_test_app() -> (Router, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let store = Store::open(temp_dir.path().join("app.db")).unwrap();

    let tx = store.engine().tx(true).unwrap();
    {
        let users = tx.create_bucket("users").unwrap();
        users.put("alice", "admin").unwrap();
        let sessions = users.create_bucket("sessions").unwrap();
        sessions.put("s1", "token-1").unwrap();

        let orders = tx.create_bucket("orders").unwrap();
        orders.put("blank", "").unwrap();
    }
    tx.commit().unwrap();

    (router_for(store), temp_dir)
}

fn router_for(store: Store) -> Router {
    let config = Config::new("127.0.0.1:9092".parse().unwrap(), tracing::Level::DEBUG);
    http_server::router(&config, ServiceState::new(store))
}

/// Every `href` of a rendered page, with HTML entity escaping undone.
fn hrefs(html: &str) -> Vec<String> {
    html.split("href=\"")
        .skip(1)
        .filter_map(|rest| rest.split('"').next())
        .map(|href| {
            href.replace("&#x2f;", "/")
                .replace("&#x2F;", "/")
                .replace("&amp;", "&")
        })
        .collect()
}

async fn get(app: &Router, uri: &str, accept: Option<&str>) -> (StatusCode, String) {
    let mut request = Request::builder().uri(uri);
    if let Some(accept) = accept {
        request = request.header(header::ACCEPT, accept);
    }

    let response = app
        .clone()
        .oneshot(request.body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

async fn get_json(app: &Router, uri: &str) -> ListResponse {
    let (status, body) = get(app, uri, None).await;
    assert_eq!(status, StatusCode::OK);
    serde_json::from_str(&body).unwrap()
}

#[tokio::test]
async fn test_root_page_lists_top_level_buckets() {
    let (app, _temp) = setup_test_app();

    for uri in ["/buckets/", "/buckets"] {
        let (status, body) = get(&app, uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("orders/"));
        assert!(body.contains("users/"));
        assert!(body.contains("class=\"nested\""));
    }
}

#[tokio::test]
async fn test_nested_page_lists_children() {
    let (app, _temp) = setup_test_app();

    let (status, body) = get(&app, "/buckets/users", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("alice"));
    assert!(body.contains("admin"));
    assert!(body.contains("sessions/"));
    assert!(!body.contains("class=\"error\""));
}

#[tokio::test]
async fn test_missing_bucket_still_renders_page() {
    let (app, _temp) = setup_test_app();

    let (status, body) = get(&app, "/buckets/users/sessions/xyz", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("class=\"error\""));
    assert!(body.contains("xyz"));
    assert!(body.contains("not found"));
    assert!(!body.contains("<table"));

    let (status, body) = get(&app, "/buckets/ghost", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("ghost"));
    assert!(body.contains("not found"));
}

#[tokio::test]
async fn test_nested_links_reach_children_with_reserved_names() {
    let temp_dir = TempDir::new().unwrap();
    let store = Store::open(temp_dir.path().join("reserved.db")).unwrap();

    let tx = store.engine().tx(true).unwrap();
    {
        let users = tx.create_bucket("users").unwrap();
        let question = users.create_bucket("q?x").unwrap();
        question.put("inside_q", "1").unwrap();
        let percent = users.create_bucket("%41").unwrap();
        percent.put("inside_pct", "2").unwrap();
        let spaced = users.create_bucket("a #b").unwrap();
        spaced.put("inside_space", "3").unwrap();
    }
    tx.commit().unwrap();
    let app = router_for(store);

    let (status, body) = get(&app, "/buckets/users", None).await;
    assert_eq!(status, StatusCode::OK);
    let links = hrefs(&body);

    for (link, child) in [
        ("/buckets/users/q%3Fx", "inside_q"),
        ("/buckets/users/%2541", "inside_pct"),
        ("/buckets/users/a%20%23b", "inside_space"),
    ] {
        assert!(links.iter().any(|l| l == link), "missing link {link}");

        let (status, page) = get(&app, link, None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(!page.contains("class=\"error\""), "{link} did not resolve");
        assert!(page.contains(child));

        // breadcrumbs on the child page point back at the same encoded path
        assert!(hrefs(&page).iter().any(|l| l == link));
    }
}

#[tokio::test]
async fn test_root_redirects_to_buckets() {
    let (app, _temp) = setup_test_app();

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/buckets/"
    );
}

#[tokio::test]
async fn test_json_listing_matches_store() {
    let (app, _temp) = setup_test_app();

    let root = get_json(&app, "/api/v0/buckets/").await;
    assert_eq!(root.path, "");
    assert!(root.error.is_none());
    let keys: Vec<_> = root.entries.iter().map(|e| e.key.as_str()).collect();
    assert_eq!(keys, vec!["orders", "users"]);
    assert!(root.entries.iter().all(|e| e.is_nested && e.value.is_empty()));

    let users = get_json(&app, "/api/v0/buckets/users").await;
    assert_eq!(users.entries.len(), 2);
    assert_eq!(users.entries[0].key, "alice");
    assert_eq!(users.entries[0].value, "admin");
    assert!(!users.entries[0].is_nested);
    assert!(users.entries[1].is_nested);

    let orders = get_json(&app, "/api/v0/buckets/orders").await;
    assert_eq!(orders.entries.len(), 1);
    assert_eq!(orders.entries[0].value, "");
    assert!(!orders.entries[0].is_nested);
}

#[tokio::test]
async fn test_json_listing_reports_error_inline() {
    let (app, _temp) = setup_test_app();

    let missing = get_json(&app, "/api/v0/buckets/users/sessions/xyz").await;
    assert_eq!(missing.path, "users/sessions/xyz");
    assert_eq!(missing.error.as_deref(), Some("bucket 'xyz' not found"));
    assert!(missing.entries.is_empty());

    let doubled = get_json(&app, "/api/v0/buckets/users//sessions").await;
    assert_eq!(doubled.error.as_deref(), Some("bucket '' not found"));
}

#[tokio::test]
async fn test_health_probes() {
    let (app, _temp) = setup_test_app();

    let (status, _) = get(&app, "/_status/livez", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = get(&app, "/_status/readyz", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("ok"));

    let (status, body) = get(&app, "/_status/version", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("build_profile"));
}

#[tokio::test]
async fn test_static_stylesheet_is_served() {
    let (app, _temp) = setup_test_app();

    let (status, body) = get(&app, "/static/style.css", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("table.entries"));
}

#[tokio::test]
async fn test_unknown_route_negotiates_not_found() {
    let (app, _temp) = setup_test_app();

    let (status, body) = get(&app, "/nope", Some("application/json")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("not found"));

    let (status, body) = get(&app, "/nope", Some("text/html")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("<h1>Not found</h1>"));

    let (status, body) = get(&app, "/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, "not found");
}
