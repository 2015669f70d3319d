//! ShopSense storefront library.
//!
//! HTTP surface for the recommendation engine: JSON API, HTML pages,
//! data loading, and shared state. Exposed as a library so the CLI and the
//! integration tests can reuse the same router and loaders.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod data;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;
