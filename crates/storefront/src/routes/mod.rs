//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                    - Liveness check
//!
//! # Pages
//! GET  /                          - Catalog overview
//! GET  /dashboard?user_id=U       - Recommendations, cart, and recent activity for U
//!
//! # JSON API
//! GET  /products                  - Full catalog
//! GET  /products/{id}             - Single product
//! GET  /cart?user_id=U            - Cart items with product attributes
//! GET  /recommendations?user_id=U - Recommendation bundle
//! POST /track_behavior            - Record {user_id, action, product_id}
//! ```

pub mod behavior;
pub mod cart;
pub mod pages;
pub mod products;
pub mod recommendations;

use axum::{
    Router,
    body::Body,
    extract::{FromRequestParts, Query},
    http::{Request, request::Parts},
    middleware::from_fn,
    routing::{get, post},
};
use serde::Deserialize;
use tower_http::trace::TraceLayer;

use crate::error::AppError;
use crate::middleware::{request_id_middleware, security_headers_middleware};
use crate::state::AppState;

/// Query string carrying an optional user identifier.
///
/// Used directly as an extractor; a malformed query string is answered with
/// the usual `{"error": ...}` body.
#[derive(Debug, Default, Deserialize)]
pub struct UserQuery {
    pub user_id: Option<String>,
}

impl UserQuery {
    /// The user ID if present and non-blank.
    #[must_use]
    pub fn user(&self) -> Option<&str> {
        self.user_id
            .as_deref()
            .filter(|user| !user.trim().is_empty())
    }
}

impl<S> FromRequestParts<S> for UserQuery
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::<Self>::from_request_parts(parts, state).await?;
        Ok(query)
    }
}

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/{id}", get(products::show))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        // Pages
        .route("/", get(pages::home))
        .route("/dashboard", get(pages::dashboard))
        // JSON API
        .nest("/products", product_routes())
        .route("/cart", get(cart::show))
        .route("/recommendations", get(recommendations::show))
        .route("/track_behavior", post(behavior::track))
}

/// Build the complete application with middleware and state attached.
///
/// Sentry layers are added by the binary so tests can run without a client.
pub fn app(state: AppState) -> Router {
    routes()
        .layer(from_fn(security_headers_middleware))
        .layer(from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                request_id = tracing::field::Empty,
            )
        }))
        .with_state(state)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running.
async fn health() -> &'static str {
    "ok"
}
