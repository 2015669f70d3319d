//! Cart route handlers.
//!
//! Carts are filled by `add_to_cart` events posted to `/track_behavior`;
//! this module only reads them back.

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use tracing::instrument;

use super::UserQuery;
use super::products::ProductEntry;
use crate::error::{AppError, Result};
use crate::state::AppState;

/// Return the user's cart items with catalog attributes merged in.
///
/// Items whose product is no longer in the catalog are skipped.
///
/// # Errors
///
/// Returns 400 if `user_id` is missing or blank.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>, query: UserQuery) -> Result<Response> {
    let user = query.user().ok_or_else(|| AppError::missing("user_id"))?;
    let cart = state.cart(user).await;
    let catalog = state.catalog();

    let items: Vec<ProductEntry<'_>> = cart
        .iter()
        .filter_map(|id| match catalog.get(id.as_str()) {
            Some(product) => Some(ProductEntry { product, id }),
            None => {
                tracing::debug!(user, product_id = %id, "Skipping cart item missing from catalog");
                None
            }
        })
        .collect();

    Ok(Json(items).into_response())
}
