//! Recommendation engine.
//!
//! Four independent strategies, each a pure function over the catalog and a
//! borrowed [`ActivityStore`]:
//!
//! | Strategy | Bundle field | Signal |
//! |---|---|---|
//! | [`collaborative`] | `history_based` | Most similar other buyer |
//! | [`content_based`] | `similar_products` | Category of the last purchase |
//! | [`cart_based`] | `cart_based` | Laptop in cart |
//! | [`time_based`] | `time_based` | Hour of day |
//!
//! Product IDs that are missing from the catalog never cause an error; they
//! simply contribute nothing.

mod cart;
mod collaborative;
mod content;
mod time;

use serde::{Deserialize, Serialize};

use crate::activity::ActivityStore;
use crate::clock::Clock;
use crate::types::{Catalog, ProductId};

pub use cart::{CART_TRIGGER, cart_based};
pub use collaborative::{SIMILARITY_EPSILON, collaborative, similarity};
pub use content::content_based;
pub use time::time_based;

/// Maximum number of products returned by the history and content strategies.
pub const MAX_RECOMMENDATIONS: usize = 5;

/// All four recommendation lists for one user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationBundle {
    pub history_based: Vec<ProductId>,
    pub similar_products: Vec<ProductId>,
    pub cart_based: Vec<ProductId>,
    pub time_based: Vec<ProductId>,
}

impl RecommendationBundle {
    /// Returns `true` if every list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.history_based.is_empty()
            && self.similar_products.is_empty()
            && self.cart_based.is_empty()
            && self.time_based.is_empty()
    }
}

/// Compute the full recommendation bundle for `user`.
///
/// Reads one consistent view of `activity`; callers sharing the store across
/// threads should hold their read lock for the duration of this call.
#[must_use]
pub fn recommend(
    catalog: &Catalog,
    activity: &ActivityStore,
    user: &str,
    clock: &dyn Clock,
) -> RecommendationBundle {
    RecommendationBundle {
        history_based: collaborative(activity, user),
        similar_products: content_based(catalog, activity, user),
        cart_based: cart_based(catalog, activity, user),
        time_based: time_based(clock.hour()),
    }
}
