//! Rule-based recommendations from the current cart.

use crate::activity::ActivityStore;
use crate::types::{Catalog, ProductId};

/// Cart item names containing this (case-insensitive) trigger the rule.
pub const CART_TRIGGER: &str = "laptop";

/// Accessories suggested when the cart holds a laptop.
const LAPTOP_ACCESSORIES: [&str; 2] = ["p2", "p3"];

/// Suggest laptop accessories when the cart contains a laptop.
///
/// Cart items missing from the catalog are skipped.
#[must_use]
pub fn cart_based(catalog: &Catalog, activity: &ActivityStore, user: &str) -> Vec<ProductId> {
    let has_laptop = activity
        .cart(user)
        .iter()
        .filter_map(|id| catalog.get(id.as_str()))
        .any(|product| product.name_contains(CART_TRIGGER));

    if has_laptop {
        LAPTOP_ACCESSORIES.into_iter().map(ProductId::from).collect()
    } else {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::{catalog, ids, store};
    use super::*;
    use crate::types::BehaviorEvent;

    #[test]
    fn test_empty_cart() {
        let activity = store(&[("user1", BehaviorEvent::purchase("p1"))]);
        assert!(cart_based(&catalog(), &activity, "user1").is_empty());
    }

    #[test]
    fn test_laptop_in_cart() {
        let activity = store(&[
            ("user1", BehaviorEvent::add_to_cart("coffee1")),
            ("user1", BehaviorEvent::add_to_cart("p1")),
        ]);
        assert_eq!(ids(&cart_based(&catalog(), &activity, "user1")), ["p2", "p3"]);
    }

    #[test]
    fn test_matches_anywhere_in_name() {
        // "Laptop Sleeve" also contains the trigger.
        let activity = store(&[("user1", BehaviorEvent::add_to_cart("p3"))]);
        assert_eq!(ids(&cart_based(&catalog(), &activity, "user1")), ["p2", "p3"]);
    }

    #[test]
    fn test_no_laptop_in_cart() {
        let activity = store(&[
            ("user1", BehaviorEvent::add_to_cart("p2")),
            ("user1", BehaviorEvent::add_to_cart("snack1")),
        ]);
        assert!(cart_based(&catalog(), &activity, "user1").is_empty());
    }

    #[test]
    fn test_unknown_cart_items_are_skipped() {
        let activity = store(&[("user1", BehaviorEvent::add_to_cart("laptop-ghost"))]);
        assert!(cart_based(&catalog(), &activity, "user1").is_empty());

        let activity = store(&[
            ("user1", BehaviorEvent::add_to_cart("laptop-ghost")),
            ("user1", BehaviorEvent::add_to_cart("p1")),
        ]);
        assert_eq!(ids(&cart_based(&catalog(), &activity, "user1")), ["p2", "p3"]);
    }
}
