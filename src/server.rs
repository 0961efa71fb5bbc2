//! Axum Server
//!
//! HTML pages rendered with Askama plus a JSON API over the menu catalog.
//! The catalog is loaded and validated once at startup; every handler reads
//! the same immutable `Arc<Catalog>`, so no handler can block or contend.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, services::ServeDir, trace::TraceLayer,
};

use crate::menu::{Catalog, MenuTag};
use crate::web::pages;

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
}

impl AppState {
    /// Load and validate the catalog. Fails fast on malformed menu data.
    pub fn new() -> anyhow::Result<Self> {
        tracing::info!("Loading menu catalog...");
        let catalog = Arc::new(Catalog::load()?);
        tracing::info!(
            "Catalog loaded: {} categories, {} items",
            catalog.categories().len(),
            catalog.item_count()
        );
        Ok(Self { catalog })
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // HTML pages
        .route("/", get(pages::home_page))
        .route("/menu", get(pages::menu_page))
        .route("/our-story", get(pages::our_story_page))
        .route("/visit", get(pages::visit_page))
        // Health check
        .route("/health", get(health_check))
        // Menu JSON API
        .route("/api/menu", get(get_menu))
        .route("/api/menu/categories/:id", get(get_category))
        .route("/api/menu/items/:id", get(get_item))
        .route("/api/menu/tags/:tag", get(get_items_by_tag))
        // Static assets
        .nest_service("/static", ServeDir::new("static"))
        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Full catalog in navigation order
async fn get_menu(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "categories": state.catalog.categories()
    }))
}

/// Single category with its flattened item list
async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let category = state
        .catalog
        .category(&id)
        .ok_or_else(|| AppError::NotFound(format!("no category with id `{}`", id)))?;

    Ok(Json(serde_json::json!({
        "category": category,
        "items": category.items(),
    })))
}

/// Single item by id, searched across the whole catalog
async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let item = state
        .catalog
        .item(&id)
        .ok_or_else(|| AppError::NotFound(format!("no item with id `{}`", id)))?;

    Ok(Json(serde_json::json!({ "item": item })))
}

/// Items carrying a tag, in catalog traversal order
async fn get_items_by_tag(
    State(state): State<AppState>,
    Path(tag): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let tag = MenuTag::parse(&tag)
        .ok_or_else(|| AppError::BadRequest(format!("unknown tag `{}`", tag)))?;

    let items = state.catalog.items_with_tag(tag);
    Ok(Json(serde_json::json!({
        "tag": tag.as_str(),
        "count": items.len(),
        "items": items,
    })))
}

// ============================================================================
// Error Handling
// ============================================================================

pub(crate) enum AppError {
    BadRequest(String),
    NotFound(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
