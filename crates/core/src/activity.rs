//! Per-user behavior log and cart store.
//!
//! [`ActivityStore`] is a plain owned value with no interior mutability.
//! Servers that share it between requests wrap it in a lock so that writers
//! and the recommendation readers never interleave.

use indexmap::{IndexMap, IndexSet};

use crate::types::{Action, BehaviorEvent, ProductId, UserId};

/// Behavior history keyed by user, as stored in the seed file.
pub type BehaviorLog = IndexMap<UserId, Vec<BehaviorEvent>>;

/// Behavior log and carts for every known user.
///
/// Users appear in first-seen order: seeded users in file order, then users
/// created by [`ActivityStore::record`]. Both sequences for a user are
/// append-only.
#[derive(Debug, Clone, Default)]
pub struct ActivityStore {
    behavior: BehaviorLog,
    carts: IndexMap<UserId, Vec<ProductId>>,
}

impl ActivityStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with historical behavior.
    ///
    /// Carts start empty: seeded `add_to_cart` events are history only.
    #[must_use]
    pub fn from_behavior(behavior: BehaviorLog) -> Self {
        Self {
            behavior,
            carts: IndexMap::new(),
        }
    }

    /// Append an event to the user's log.
    ///
    /// `add_to_cart` events also append the product to the user's cart. The
    /// product is not checked against the catalog and duplicates are kept.
    pub fn record(&mut self, user: UserId, event: BehaviorEvent) {
        if event.action == Action::AddToCart {
            self.carts
                .entry(user.clone())
                .or_default()
                .push(event.product.clone());
        }
        self.behavior.entry(user).or_default().push(event);
    }

    /// The user's full history in chronological order (empty if unknown).
    #[must_use]
    pub fn history(&self, user: &str) -> &[BehaviorEvent] {
        self.behavior
            .get(user)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// The user's cart in insertion order (empty if unknown).
    #[must_use]
    pub fn cart(&self, user: &str) -> &[ProductId] {
        self.carts
            .get(user)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Purchased products in chronological order, duplicates included.
    pub fn purchases<'a>(
        &'a self,
        user: &str,
    ) -> impl Iterator<Item = &'a ProductId> + use<'a> {
        self.history(user)
            .iter()
            .filter(|event| event.is_purchase())
            .map(|event| &event.product)
    }

    /// Distinct purchased products, ordered by first purchase.
    #[must_use]
    pub fn purchase_set(&self, user: &str) -> IndexSet<&ProductId> {
        self.purchases(user).collect()
    }

    /// Every user with a behavior log, in first-seen order.
    pub fn users(&self) -> impl Iterator<Item = &UserId> {
        self.behavior.keys()
    }

    /// Every user with a non-empty cart, in first-seen order.
    pub fn carts(&self) -> impl Iterator<Item = (&UserId, &[ProductId])> {
        self.carts.iter().map(|(user, items)| (user, items.as_slice()))
    }

    /// Number of users with a behavior log.
    #[must_use]
    pub fn user_count(&self) -> usize {
        self.behavior.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_user_reads_empty() {
        let store = ActivityStore::new();
        assert!(store.history("ghost").is_empty());
        assert!(store.cart("ghost").is_empty());
        assert!(store.purchase_set("ghost").is_empty());
        assert_eq!(store.user_count(), 0);
    }

    #[test]
    fn test_add_to_cart_updates_history_and_cart() {
        let mut store = ActivityStore::new();
        store.record(UserId::new("u1"), BehaviorEvent::add_to_cart("p1"));
        store.record(UserId::new("u1"), BehaviorEvent::new("view", "p2"));
        store.record(UserId::new("u1"), BehaviorEvent::add_to_cart("p1"));

        assert_eq!(store.history("u1").len(), 3);
        let cart: Vec<&str> = store.cart("u1").iter().map(ProductId::as_str).collect();
        assert_eq!(cart, ["p1", "p1"]);
    }

    #[test]
    fn test_purchase_does_not_touch_cart() {
        let mut store = ActivityStore::new();
        store.record(UserId::new("u1"), BehaviorEvent::purchase("p1"));
        assert!(store.cart("u1").is_empty());
        assert_eq!(store.purchases("u1").count(), 1);
    }

    #[test]
    fn test_purchase_set_dedupes_in_first_purchase_order() {
        let mut store = ActivityStore::new();
        for product in ["p3", "p1", "p3", "p2", "p1"] {
            store.record(UserId::new("u1"), BehaviorEvent::purchase(product));
        }
        let set: Vec<&str> = store
            .purchase_set("u1")
            .into_iter()
            .map(ProductId::as_str)
            .collect();
        assert_eq!(set, ["p3", "p1", "p2"]);
    }

    #[test]
    fn test_seeded_cart_events_do_not_fill_cart() {
        let mut seed = BehaviorLog::new();
        seed.insert(UserId::new("u1"), vec![BehaviorEvent::add_to_cart("p1")]);
        let store = ActivityStore::from_behavior(seed);
        assert_eq!(store.history("u1").len(), 1);
        assert!(store.cart("u1").is_empty());
    }

    #[test]
    fn test_users_in_first_seen_order() {
        let mut seed = BehaviorLog::new();
        seed.insert(UserId::new("b"), vec![]);
        seed.insert(UserId::new("a"), vec![]);
        let mut store = ActivityStore::from_behavior(seed);
        store.record(UserId::new("c"), BehaviorEvent::purchase("p1"));
        store.record(UserId::new("a"), BehaviorEvent::purchase("p1"));

        let users: Vec<&str> = store.users().map(UserId::as_str).collect();
        assert_eq!(users, ["b", "a", "c"]);
    }
}
