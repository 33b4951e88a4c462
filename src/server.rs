// Portfolio - Web Server
//
// Stateless: each request rebuilds the App from its URL, renders it, and
// forgets it. Handlers share only the loaded content.
//
// Routes:
// - GET /               Home
// - GET /:view          Any view; query carries expanded/all/menu/playing
// - GET /api/health     Health check
// - GET /api/content    Loaded content as JSON (ETag, If-None-Match)
// - GET /api/nav        Navigation entries

use crate::config::Config;
use crate::content::Content;
use crate::html;
use crate::nav::{navbar, NavLayout};
use crate::query::{QueryLinker, ViewQuery};
use crate::shell::{nav_items, App, NavItem};
use crate::views::{self, RenderContext};
use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Json, Response},
    routing::get,
    Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    content: Arc<Content>,
    form_endpoint: Arc<str>,
    /// Serialized content and its ETag, computed once
    content_json: Arc<(String, String)>,
    started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(content: Content, form_endpoint: &str) -> crate::Result<Self> {
        let json = serde_json::to_string(&content)?;
        let etag = format!("\"{}\"", hex_digest(json.as_bytes()));
        Ok(Self {
            content: Arc::new(content),
            form_endpoint: Arc::from(form_endpoint),
            content_json: Arc::new((json, etag)),
            started_at: Utc::now(),
        })
    }

}

fn hex_digest(bytes: &[u8]) -> String {
    format!("{:x}", Sha256::digest(bytes))
}

/// Weak comparison: `*` matches anything, `W/"x"` matches `"x"`
fn if_none_match(header_value: &str, etag: &str) -> bool {
    header_value.split(',').map(str::trim).any(|tag| {
        tag == "*" || tag.strip_prefix("W/").unwrap_or(tag) == etag
    })
}

/// API Response wrapper
#[derive(Serialize)]
struct ApiResponse<T> {
    success: bool,
    data: T,
}

impl<T> ApiResponse<T> {
    fn ok(data: T) -> Self {
        Self { success: true, data }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    started_at: DateTime<Utc>,
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /api/health - Health check
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(ApiResponse::ok(HealthResponse {
        status: "healthy",
        version: crate::VERSION,
        started_at: state.started_at,
    }))
}

/// GET /api/content - Loaded content
async fn get_content(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let (json, etag) = state.content_json.as_ref();

    let matches = headers
        .get(header::IF_NONE_MATCH)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| if_none_match(v, etag));
    if matches {
        return StatusCode::NOT_MODIFIED.into_response();
    }

    let mut response = (
        [(header::CONTENT_TYPE, HeaderValue::from_static("application/json"))],
        json.clone(),
    )
        .into_response();
    if let Ok(value) = HeaderValue::from_str(etag) {
        response.headers_mut().insert(header::ETAG, value);
    }
    response
}

/// GET /api/nav - Navigation entries
async fn get_nav() -> impl IntoResponse {
    let items: Vec<NavItem> = nav_items();
    Json(ApiResponse::ok(items))
}

// ============================================================================
// Page Handlers
// ============================================================================

/// GET / - Home
async fn serve_home(State(state): State<AppState>, Query(query): Query<ViewQuery>) -> Html<String> {
    render_page(&state, "home", &query)
}

/// GET /:view - Any view
async fn serve_view(
    State(state): State<AppState>,
    Path(view): Path<String>,
    Query(query): Query<ViewQuery>,
) -> Html<String> {
    render_page(&state, &view, &query)
}

fn render_page(state: &AppState, view: &str, query: &ViewQuery) -> Html<String> {
    let app = App::from_query(view, query, &state.content);
    let ctx = RenderContext {
        content: &state.content,
        form_endpoint: &state.form_endpoint,
    };

    let brand = &state.content.profile.name;
    let desktop = navbar(brand, &app.shell, NavLayout::Desktop);
    let compact = navbar(brand, &app.shell, NavLayout::Compact);
    let page = views::render(&app, &ctx, NavLayout::Desktop);

    let title = format!("{} | {}", app.selector().title(), brand);
    Html(html::render_document(
        &title,
        &[&desktop, &compact],
        &page.body,
        &QueryLinker { app: &app },
    ))
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/content", get(get_content))
        .route("/nav", get(get_nav));

    Router::new()
        .route("/", get(serve_home))
        .route("/:view", get(serve_view))
        .nest("/api", api_routes)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run_server(config: Config) -> anyhow::Result<()> {
    let content = config.load_content()?;
    let state = AppState::new(content, &config.form_endpoint)?;
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    info!("Server running on http://{}", config.addr);
    info!("Contact form relay: {}", config.form_endpoint);

    axum::serve(listener, app).await?;
    Ok(())
}
