//! Content-based recommendations from the category of the last purchase.

use super::MAX_RECOMMENDATIONS;
use crate::activity::ActivityStore;
use crate::types::{Catalog, ProductId};

/// Recommend other products in the category of the user's latest purchase.
///
/// Returns up to [`MAX_RECOMMENDATIONS`] products in catalog order, never
/// including the latest purchase itself. An empty history, or a latest
/// purchase that is no longer in the catalog, yields no recommendations.
#[must_use]
pub fn content_based(catalog: &Catalog, activity: &ActivityStore, user: &str) -> Vec<ProductId> {
    let Some(last) = activity.purchases(user).last() else {
        return Vec::new();
    };
    let Some(category) = catalog.get(last.as_str()).map(|p| p.category.as_str()) else {
        return Vec::new();
    };

    catalog
        .iter()
        .filter(|(id, product)| product.category == category && *id != last)
        .map(|(id, _)| id.clone())
        .take(MAX_RECOMMENDATIONS)
        .collect()
}
