//! Products and the read-only catalog.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::id::ProductId;
use super::price::Price;

/// A purchasable product.
///
/// `name`, `category` and `price` are required. Any other attribute present
/// in the catalog file is kept in `attributes` and serialized back verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub category: String,
    pub price: Price,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Product {
    /// Create a product with no extra attributes.
    #[must_use]
    pub fn new(name: impl Into<String>, category: impl Into<String>, price: Price) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            price,
            attributes: Map::new(),
        }
    }

    /// Case-insensitive substring match on the product name.
    #[must_use]
    pub fn name_contains(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(&needle.to_lowercase())
    }
}

/// The product catalog, keyed by product ID.
///
/// Iteration follows insertion order, which for a loaded catalog is the order
/// products appear in the source file. Content-based recommendations rely on
/// this order being stable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    products: IndexMap<ProductId, Product>,
}

impl Catalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a product by ID.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.get(id)
    }

    /// Look up a product together with its stored ID.
    #[must_use]
    pub fn get_key_value(&self, id: &str) -> Option<(&ProductId, &Product)> {
        self.products.get_key_value(id)
    }

    /// Returns `true` if the catalog contains the product.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.products.contains_key(id)
    }

    /// Iterate over products in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (&ProductId, &Product)> {
        self.products.iter()
    }

    /// Number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Returns `true` if the catalog has no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl FromIterator<(ProductId, Product)> for Catalog {
    fn from_iter<I: IntoIterator<Item = (ProductId, Product)>>(iter: I) -> Self {
        Self {
            products: iter.into_iter().collect(),
        }
    }
}
