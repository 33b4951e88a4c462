//! Integration tests for the portfolio web server.
//!
//! These tests require the `server` feature:
//! ```bash
//! cargo test --features server --test web_routes
//! ```

#![cfg(feature = "server")]

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use portfolio::server::{create_router, AppState};
use portfolio::Content;

const RELAY: &str = "https://relay.example.com/f/test";

fn create_app(content: Content) -> Router {
    let state = AppState::new(content, RELAY).expect("Failed to create app state");
    create_router(state)
}

async fn get(
    app: &Router,
    uri: &str,
    headers: &[(header::HeaderName, &str)],
) -> (StatusCode, axum::http::HeaderMap, Vec<u8>) {
    let mut request = Request::builder().method("GET").uri(uri);
    for (name, value) in headers {
        request = request.header(name, *value);
    }

    let response = app
        .clone()
        .oneshot(request.body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let body = response.into_body().collect().await.unwrap().to_bytes().to_vec();
    (status, headers, body)
}

async fn get_html(app: &Router, uri: &str) -> (StatusCode, String) {
    let (status, _, body) = get(app, uri, &[]).await;
    (status, String::from_utf8(body).unwrap())
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let (status, _, body) = get(app, uri, &[]).await;
    (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
}

// ============================================================================
// API
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let app = create_app(Content::canonical());
    let (status, json) = get_json(&app, "/api/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["status"], "healthy");
    assert!(json["data"]["version"].is_string());
    assert!(json["data"]["started_at"].is_string());
}

#[tokio::test]
async fn test_nav_items() {
    let app = create_app(Content::canonical());
    let (status, json) = get_json(&app, "/api/nav").await;

    assert_eq!(status, StatusCode::OK);
    let items = json["data"].as_array().unwrap();
    assert_eq!(items.len(), 6);
    assert_eq!(items[0]["id"], "home");
    assert_eq!(items[5]["label"], "Let's Connect");
}

#[tokio::test]
async fn test_content_json_and_etag() {
    let app = create_app(Content::canonical());
    let (status, headers, body) = get(&app, "/api/content", &[]).await;

    assert_eq!(status, StatusCode::OK);
    let etag = headers.get(header::ETAG).unwrap().to_str().unwrap().to_string();
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["certificates"].as_array().unwrap().len(), 5);

    let weak = format!("W/{}", etag);
    for tag in [etag.as_str(), "*", weak.as_str()] {
        let (status, _, body) = get(&app, "/api/content", &[(header::IF_NONE_MATCH, tag)]).await;
        assert_eq!(status, StatusCode::NOT_MODIFIED, "If-None-Match: {}", tag);
        assert!(body.is_empty());
    }

    let (status, _, _) =
        get(&app, "/api/content", &[(header::IF_NONE_MATCH, "\"stale\"")]).await;
    assert_eq!(status, StatusCode::OK);
}

// ============================================================================
// Pages
// ============================================================================

#[tokio::test]
async fn test_every_view_renders() {
    let app = create_app(Content::canonical());
    let views = [
        ("home", "<h2>Home</h2>"),
        ("about", "<h2>About Me</h2>"),
        ("certificates", "<h2>Certificates</h2>"),
        ("projects", "<h2>Projects</h2>"),
        ("current", "<h2>Currently Working On</h2>"),
        ("contact", "<h2>Let&#39;s Connect</h2>"),
    ];

    for (view, heading) in views {
        let (status, html) = get_html(&app, &format!("/{}", view)).await;
        assert_eq!(status, StatusCode::OK, "{}", view);
        assert!(html.contains(heading), "{} missing {}", view, heading);
    }
}

#[tokio::test]
async fn test_root_and_unknown_view_render_home() {
    let app = create_app(Content::canonical());

    let (status, html) = get_html(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("<h2>Home</h2>"));

    let (status, html) = get_html(&app, "/blog").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("<h2>Home</h2>"));
}

#[tokio::test]
async fn test_certificate_links_follow_state() {
    let app = create_app(Content::canonical());

    let (_, html) = get_html(&app, "/certificates").await;
    assert!(html.contains("id=\"certificate-3\""));
    assert!(!html.contains("id=\"certificate-4\""));
    assert!(html.contains("Load More Certificates"));
    assert!(html.contains("href=\"/certificates?expanded=2\""));

    let (_, html) = get_html(&app, "/certificates?expanded=2").await;
    assert!(html.contains("class=\"card highlighted\" id=\"certificate-2\""));
    assert!(html.contains("https://www.coursera.org/verify/meta-react"));

    let (_, html) = get_html(&app, "/certificates?all=1").await;
    assert!(html.contains("id=\"certificate-5\""));
    assert!(!html.contains("Load More Certificates"));
}

#[tokio::test]
async fn test_malformed_query_is_ignored() {
    let app = create_app(Content::canonical());
    let (status, html) = get_html(&app, "/certificates?expanded=banana&all=maybe").await;

    assert_eq!(status, StatusCode::OK);
    assert!(!html.contains("card highlighted"));
    assert!(html.contains("Load More Certificates"));
}

#[tokio::test]
async fn test_three_certificates_never_offer_more() {
    let mut content = Content::canonical();
    content.certificates.truncate(3);
    let app = create_app(content);

    let (_, html) = get_html(&app, "/certificates").await;
    assert!(!html.contains("Load More Certificates"));
}

#[tokio::test]
async fn test_menu_flag_in_compact_nav() {
    let app = create_app(Content::canonical());

    let (_, html) = get_html(&app, "/about").await;
    assert!(html.contains("href=\"/about?menu=1\""));

    let (_, html) = get_html(&app, "/about?menu=1").await;
    // Compact entries close the menu; the toggle closes it too
    assert!(html.contains("href=\"/about\""));
    assert!(html.contains("✕ Close"));
}

#[tokio::test]
async fn test_projects_media_and_play_state() {
    let app = create_app(Content::canonical());

    let (_, html) = get_html(&app, "/projects").await;
    assert!(html.contains("<img src=\"https://via.placeholder.com"));
    assert!(html.contains("<video src=\"/media/task-manager-demo.mp4\""));
    assert!(html.contains("href=\"/projects?playing=2\""));

    let (_, html) = get_html(&app, "/projects?playing=2").await;
    assert!(html.contains("class=\"video playing\""));
    assert!(html.contains("href=\"/projects\""));
}

#[tokio::test]
async fn test_contact_form_posts_to_relay() {
    let app = create_app(Content::canonical());
    let (_, html) = get_html(&app, "/contact").await;

    assert!(html.contains(&format!("<form action=\"{}\" method=\"POST\">", RELAY)));
    for field in ["name", "email", "subject", "message"] {
        assert!(html.contains(&format!("name=\"{}\"", field)), "{}", field);
    }
}
