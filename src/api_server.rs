// Axum API Server Module
//
// Purpose: serve the page registry as JSON view models and HTML previews.
// Pages are built once at startup; handlers only read shared references.

#[cfg(feature = "api")]
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json},
    routing::get,
    Router,
};

#[cfg(feature = "api")]
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

#[cfg(feature = "api")]
use askama::Template;

#[cfg(feature = "api")]
use pulldown_cmark::{html, Event, Options, Parser};

#[cfg(feature = "api")]
use crate::corpus::Catalog;

#[cfg(feature = "api")]
use crate::error::CatalogError;

#[cfg(feature = "api")]
use crate::render::{build_page_summary, MarkdownRenderer, PageRenderer, PageSummary, PageView, ViewRenderer};

// ============================================================================
// Application State
// ============================================================================

#[cfg(feature = "api")]
#[derive(Clone)]
pub struct AppState {
    pub catalog: Catalog,
    pub markdown: MarkdownRenderer,
}

#[cfg(feature = "api")]
impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        tracing::info!("Serving {} catalog pages", catalog.registry.len());
        Self {
            catalog,
            markdown: MarkdownRenderer::default(),
        }
    }
}

// ============================================================================
// Router
// ============================================================================

#[cfg(feature = "api")]
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))

        // Page endpoints (JSON API)
        .route("/api/pages", get(list_pages))
        .route("/api/pages/:key", get(get_page))

        // HTML preview of the markdown rendering
        .route("/pages/:key", get(get_page_html))

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

#[cfg(feature = "api")]
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "pages": state.catalog.registry.len(),
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

#[cfg(feature = "api")]
async fn list_pages(State(state): State<AppState>) -> Json<Vec<PageSummary>> {
    Json(state.catalog.registry.iter().map(build_page_summary).collect())
}

#[cfg(feature = "api")]
async fn get_page(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<PageView>, AppError> {
    tracing::debug!("Rendering page view for {}", key);
    let page = state.catalog.registry.require(&key)?;
    Ok(Json(ViewRenderer.render(page, state.catalog.problem_counts)))
}

#[cfg(feature = "api")]
#[derive(Template)]
#[template(path = "pages/page.html")]
pub struct PageTemplate {
    pub title: String,
    pub body: String,
}

#[cfg(feature = "api")]
async fn get_page_html(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Html<String>, AppError> {
    tracing::debug!("Rendering HTML preview for {}", key);
    let page = state.catalog.registry.require(&key)?;
    let markdown = state.markdown.render(page, state.catalog.problem_counts);

    let label = &page.metadata().label;
    let template = PageTemplate {
        title: if label.is_empty() { key.clone() } else { label.clone() },
        body: markdown_to_html(&markdown),
    };
    let rendered = template
        .render()
        .map_err(|e| AppError::Internal(format!("Template error: {}", e)))?;
    Ok(Html(rendered))
}

/// Corpus text is untrusted: raw HTML in the markdown is emitted as text.
#[cfg(feature = "api")]
fn markdown_to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_YAML_STYLE_METADATA_BLOCKS);

    let events = Parser::new_ext(markdown, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });

    let mut body = String::new();
    html::push_html(&mut body, events);
    body
}

// ============================================================================
// Error Handling
// ============================================================================

#[cfg(feature = "api")]
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    Internal(String),
}

#[cfg(feature = "api")]
impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::PageNotFound(key) => AppError::NotFound(format!("Page {} not found", key)),
            other => AppError::Internal(other.to_string()),
        }
    }
}

#[cfg(feature = "api")]
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
