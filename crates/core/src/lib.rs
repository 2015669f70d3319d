//! ShopSense Core - Domain types and recommendation engine.
//!
//! This crate provides everything the ShopSense binaries share:
//! - `storefront` - HTTP API and dashboard pages
//! - `cli` - Offline recommendation and data audit tools
//!
//! # Architecture
//!
//! The core crate contains only types, in-memory stores, and pure scoring
//! functions - no file access, no HTTP, no locking. Callers own the
//! [`ActivityStore`] and decide how to synchronize access to it.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, products, prices, and behavior events
//! - [`activity`] - Per-user behavior log and cart store
//! - [`clock`] - Injectable hour-of-day source
//! - [`recommend`] - Collaborative, content, cart, and time-based scoring

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod activity;
pub mod clock;
pub mod recommend;
pub mod types;

pub use activity::{ActivityStore, BehaviorLog};
pub use clock::{Clock, FixedClock, SystemClock};
pub use recommend::{RecommendationBundle, recommend};
pub use types::*;
