//! Read-only content API.
//!
//! Three GET endpoints over a shared [`ContentProvider`]:
//!
//! - `GET /content` — the published slug index.
//! - `GET /content/{slug}` — one content envelope, or a structured 404.
//! - `GET /diagrams/journey` — the journey diagram blueprint.
//!
//! Responses are JSON with CDN-oriented `Cache-Control` headers; error
//! responses carry no cache header so misses are never pinned at the edge.
//! No auth, no mutation, no query parameters.

use crate::content::{journey_blueprint, ContentProvider};
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;

/// Provider handle shared across handlers.
pub type SharedProvider = Arc<dyn ContentProvider + Send + Sync>;

const INDEX_CACHE: &str = "public, s-maxage=600, stale-while-revalidate=600";
const ENTRY_CACHE: &str = "public, s-maxage=300, stale-while-revalidate=600";
const DIAGRAM_CACHE: &str = "public, s-maxage=120, stale-while-revalidate=300";

/// Structured API errors. 404 on an unknown slug is the only error the
/// read-only surface can produce.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("no content published under slug {slug:?}")]
    ContentNotFound { slug: String },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::ContentNotFound { slug } => (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": "content-not-found", "slug": slug })),
            )
                .into_response(),
        }
    }
}

/// Build the API router over the given provider.
pub fn router(provider: SharedProvider) -> Router {
    Router::new()
        .route("/content", get(content_index))
        .route("/content/{slug}", get(content_entry))
        .route("/diagrams/journey", get(journey_diagram))
        .with_state(provider)
}

fn cached_json(cache: &'static str, body: impl Serialize) -> Response {
    ([(header::CACHE_CONTROL, cache)], Json(body)).into_response()
}

async fn content_index(State(provider): State<SharedProvider>) -> Response {
    cached_json(INDEX_CACHE, json!({ "available": provider.slugs() }))
}

async fn content_entry(
    State(provider): State<SharedProvider>,
    Path(slug): Path<String>,
) -> Result<Response, ApiError> {
    let envelope = provider.get(&slug).ok_or_else(|| {
        tracing::debug!(%slug, "content lookup missed");
        ApiError::ContentNotFound { slug: slug.clone() }
    })?;
    Ok(cached_json(ENTRY_CACHE, envelope))
}

async fn journey_diagram() -> Response {
    cached_json(DIAGRAM_CACHE, journey_blueprint())
}
