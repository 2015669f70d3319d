//! User behavior events.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::id::ProductId;

/// The action a user performed on a product.
///
/// Only `purchase` and `add_to_cart` drive recommendations. Any other action
/// string (`view`, `wishlist`, ...) is kept verbatim in the log.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Action {
    Purchase,
    AddToCart,
    Other(String),
}

impl Action {
    /// The wire name of the action.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Purchase => "purchase",
            Self::AddToCart => "add_to_cart",
            Self::Other(name) => name,
        }
    }
}

impl From<String> for Action {
    fn from(name: String) -> Self {
        match name.as_str() {
            "purchase" => Self::Purchase,
            "add_to_cart" => Self::AddToCart,
            _ => Self::Other(name),
        }
    }
}

impl From<&str> for Action {
    fn from(name: &str) -> Self {
        Self::from(name.to_owned())
    }
}

impl From<Action> for String {
    fn from(action: Action) -> Self {
        match action {
            Action::Other(name) => name,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single entry in a user's behavior log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BehaviorEvent {
    pub action: Action,
    pub product: ProductId,
}

impl BehaviorEvent {
    #[must_use]
    pub fn new(action: impl Into<Action>, product: impl Into<ProductId>) -> Self {
        Self {
            action: action.into(),
            product: product.into(),
        }
    }

    /// Shorthand for a `purchase` event.
    #[must_use]
    pub fn purchase(product: impl Into<ProductId>) -> Self {
        Self::new(Action::Purchase, product)
    }

    /// Shorthand for an `add_to_cart` event.
    #[must_use]
    pub fn add_to_cart(product: impl Into<ProductId>) -> Self {
        Self::new(Action::AddToCart, product)
    }

    #[must_use]
    pub fn is_purchase(&self) -> bool {
        self.action == Action::Purchase
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_known_actions_parse() {
        assert_eq!(Action::from("purchase"), Action::Purchase);
        assert_eq!(Action::from("add_to_cart"), Action::AddToCart);
        assert_eq!(Action::from("view"), Action::Other("view".to_string()));
    }

    #[test]
    fn test_event_wire_format() {
        let event: BehaviorEvent =
            serde_json::from_str(r#"{"action": "add_to_cart", "product": "p1"}"#).unwrap();
        assert_eq!(event, BehaviorEvent::add_to_cart("p1"));

        let view = BehaviorEvent::new("view", "p9");
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["action"], "view");
        assert_eq!(json["product"], "p9");
    }
}
