//! Recommendation route handler.

use axum::{
    Json,
    extract::State,
};
use shopsense_core::RecommendationBundle;
use tracing::instrument;

use super::UserQuery;
use crate::state::AppState;

/// Return the four-way recommendation bundle for a user.
///
/// Without a `user_id` parameter the configured default user is used.
/// Unknown users simply get empty history-driven lists.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    query: UserQuery,
) -> Json<RecommendationBundle> {
    let user = query
        .user_id
        .unwrap_or_else(|| state.config().default_user.to_string());

    let bundle = state.recommendations(&user).await;
    tracing::debug!(
        user = %user,
        history_based = bundle.history_based.len(),
        similar_products = bundle.similar_products.len(),
        cart_based = bundle.cart_based.len(),
        time_based = bundle.time_based.len(),
        "Computed recommendations"
    );

    Json(bundle)
}
