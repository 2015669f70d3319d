//! Core types for ShopSense.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod behavior;
pub mod id;
pub mod price;
pub mod product;

pub use behavior::{Action, BehaviorEvent};
pub use id::*;
pub use price::Price;
pub use product::{Catalog, Product};
