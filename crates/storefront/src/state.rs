//! Application state shared across handlers.

use std::sync::Arc;

use shopsense_core::{
    ActivityStore, BehaviorEvent, Catalog, Clock, ProductId, RecommendationBundle, SystemClock,
    UserId, recommend,
};
use tokio::sync::RwLock;

use crate::config::StorefrontConfig;

/// Everything the dashboard shows for one user, read from one store snapshot.
#[derive(Debug, Clone)]
pub struct UserSnapshot {
    pub recommendations: RecommendationBundle,
    pub cart: Vec<ProductId>,
    pub history: Vec<BehaviorEvent>,
}

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// read-only catalog and the lock-guarded behavior and cart stores.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Catalog,
    activity: RwLock<ActivityStore>,
    clock: Arc<dyn Clock>,
}

impl AppState {
    /// Create a new application state reading the system clock.
    #[must_use]
    pub fn new(config: StorefrontConfig, catalog: Catalog, activity: ActivityStore) -> Self {
        Self::with_clock(config, catalog, activity, Arc::new(SystemClock))
    }

    /// Create a new application state with an explicit time source.
    #[must_use]
    pub fn with_clock(
        config: StorefrontConfig,
        catalog: Catalog,
        activity: ActivityStore,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                activity: RwLock::new(activity),
                clock,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Append an event to the user's behavior log (and cart, for `add_to_cart`).
    pub async fn record(&self, user: UserId, event: BehaviorEvent) {
        self.inner.activity.write().await.record(user, event);
    }

    /// Compute the recommendation bundle from one consistent store snapshot.
    pub async fn recommendations(&self, user: &str) -> RecommendationBundle {
        let activity = self.inner.activity.read().await;
        recommend(
            &self.inner.catalog,
            &activity,
            user,
            self.inner.clock.as_ref(),
        )
    }

    /// Recommendations, cart, and history taken under a single read lock.
    pub async fn snapshot(&self, user: &str) -> UserSnapshot {
        let activity = self.inner.activity.read().await;
        UserSnapshot {
            recommendations: recommend(
                &self.inner.catalog,
                &activity,
                user,
                self.inner.clock.as_ref(),
            ),
            cart: activity.cart(user).to_vec(),
            history: activity.history(user).to_vec(),
        }
    }

    /// Copy of the user's cart in insertion order.
    pub async fn cart(&self, user: &str) -> Vec<ProductId> {
        self.inner.activity.read().await.cart(user).to_vec()
    }

    /// Copy of the user's behavior history in chronological order.
    pub async fn history(&self, user: &str) -> Vec<BehaviorEvent> {
        self.inner.activity.read().await.history(user).to_vec()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use shopsense_core::{FixedClock, Price, Product};

    use super::*;

    fn state() -> AppState {
        let catalog: Catalog = [
            ("p1", "Laptop X", "electronics"),
            ("p2", "Mouse", "electronics"),
        ]
        .into_iter()
        .map(|(id, name, category)| {
            (
                ProductId::new(id),
                Product::new(name, category, Price::from_cents(100)),
            )
        })
        .collect();
        AppState::with_clock(
            StorefrontConfig::default(),
            catalog,
            ActivityStore::new(),
            Arc::new(FixedClock::new(20)),
        )
    }

    #[tokio::test]
    async fn test_record_is_visible_to_readers() {
        let state = state();
        state
            .record(UserId::new("u1"), BehaviorEvent::add_to_cart("p1"))
            .await;

        assert_eq!(state.cart("u1").await, [ProductId::new("p1")]);
        assert_eq!(state.history("u1").await.len(), 1);
        assert!(state.cart("u2").await.is_empty());
    }

    #[tokio::test]
    async fn test_recommendations_use_injected_clock() {
        let bundle = state().recommendations("u1").await;
        assert_eq!(bundle.time_based, [ProductId::new("snack1")]);
    }

    #[tokio::test]
    async fn test_snapshot_is_consistent_under_writes() {
        let state = state();
        let writer = {
            let state = state.clone();
            tokio::spawn(async move {
                for _ in 0..50 {
                    state
                        .record(UserId::new("u1"), BehaviorEvent::add_to_cart("p1"))
                        .await;
                }
            })
        };

        for _ in 0..50 {
            let snapshot = state.snapshot("u1").await;
            // Every add_to_cart lands in history and cart together
            assert_eq!(snapshot.cart.len(), snapshot.history.len());
            assert_eq!(
                snapshot.recommendations.cart_based.is_empty(),
                snapshot.cart.is_empty()
            );
        }
        writer.await.unwrap();

        let snapshot = state.snapshot("u1").await;
        assert_eq!(snapshot.cart.len(), 50);
        assert_eq!(snapshot.history.len(), 50);
    }

    #[tokio::test]
    async fn test_concurrent_writers_lose_nothing() {
        let state = state();
        let mut handles = Vec::new();
        for i in 0..16 {
            let state = state.clone();
            handles.push(tokio::spawn(async move {
                for _ in 0..25 {
                    state
                        .record(UserId::new(format!("u{}", i % 4)), BehaviorEvent::purchase("p1"))
                        .await;
                    let _ = state.recommendations("u0").await;
                }
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let total: usize = [
            state.history("u0").await.len(),
            state.history("u1").await.len(),
            state.history("u2").await.len(),
            state.history("u3").await.len(),
        ]
        .iter()
        .sum();
        assert_eq!(total, 16 * 25);
    }
}
