//! Product route handlers.

use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use shopsense_core::{Product, ProductId};
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::state::AppState;

/// A product with its ID merged into the attribute object.
#[derive(Debug, Serialize)]
pub struct ProductEntry<'a> {
    #[serde(flatten)]
    pub product: &'a Product,
    pub id: &'a ProductId,
}

/// Return the full catalog as `{id: attributes}` in catalog order.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Response {
    Json(state.catalog()).into_response()
}

/// Return a single product.
///
/// # Errors
///
/// Returns 404 if the product is not in the catalog.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>, Path(id): Path<String>) -> Result<Response> {
    let (id, product) = state
        .catalog()
        .get_key_value(&id)
        .ok_or_else(|| AppError::NotFound(format!("Product {id} not found")))?;

    Ok(Json(ProductEntry { product, id }).into_response())
}
