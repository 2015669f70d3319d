//! Integration tests for ShopSense.
//!
//! Each test spawns the full storefront router on an ephemeral port, seeded
//! from the files under `data/`, and talks to it over HTTP.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p shopsense-integration-tests
//! ```
//!
//! # Seed Data
//!
//! ```text
//! user1  purchase p1, view p4
//! user2  purchase p1, p2, p5
//! user3  purchase p6, coffee1, add_to_cart p3
//! ```
//!
//! Carts start empty regardless of seeded `add_to_cart` events.

use std::net::SocketAddr;
use std::sync::Arc;

use reqwest::{Client, Response};
use serde_json::Value;
use shopsense_core::{ActivityStore, BehaviorLog, Catalog, FixedClock};
use shopsense_storefront::config::StorefrontConfig;
use shopsense_storefront::routes;
use shopsense_storefront::state::AppState;
use tokio::task::JoinHandle;

/// Seed catalog shipped with the repository.
pub const SEED_CATALOG: &str = include_str!("../../../data/products.json");

/// Seed behavior log shipped with the repository.
pub const SEED_BEHAVIOR: &str = include_str!("../../../data/user_behavior.json");

/// A storefront running in-process on a random local port.
pub struct TestServer {
    pub client: Client,
    addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a server over the seed data with the clock pinned to `hour`.
    ///
    /// # Panics
    ///
    /// Panics if the seed data is malformed or the listener cannot bind.
    pub async fn spawn_at(hour: u32) -> Self {
        let catalog: Catalog = serde_json::from_str(SEED_CATALOG).expect("seed catalog parses");
        let behavior: BehaviorLog =
            serde_json::from_str(SEED_BEHAVIOR).expect("seed behavior parses");

        let state = AppState::with_clock(
            StorefrontConfig::default(),
            catalog,
            ActivityStore::from_behavior(behavior),
            Arc::new(FixedClock::new(hour)),
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind ephemeral port");
        let addr = listener.local_addr().expect("listener address");

        let app = routes::app(state);
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("server error");
        });

        Self {
            client: Client::new(),
            addr,
            handle,
        }
    }

    /// Absolute URL for a path on this server.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    /// GET a path and return status and JSON body.
    ///
    /// # Panics
    ///
    /// Panics if the request fails or the body is not JSON.
    pub async fn get_json(&self, path: &str) -> (u16, Value) {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("GET request");
        read_json(response).await
    }

    /// POST a JSON body and return status and JSON body.
    ///
    /// # Panics
    ///
    /// Panics if the request fails or the body is not JSON.
    pub async fn post_json(&self, path: &str, body: &Value) -> (u16, Value) {
        let response = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .expect("POST request");
        read_json(response).await
    }

    /// Record a behavior event, asserting it was accepted.
    ///
    /// # Panics
    ///
    /// Panics if the server does not answer `{"status": "logged"}`.
    pub async fn track(&self, user_id: &str, action: &str, product_id: &str) {
        let (status, body) = self
            .post_json(
                "/track_behavior",
                &serde_json::json!({
                    "user_id": user_id,
                    "action": action,
                    "product_id": product_id,
                }),
            )
            .await;
        assert_eq!(status, 200, "track_behavior failed: {body}");
        assert_eq!(body, serde_json::json!({ "status": "logged" }));
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn read_json(response: Response) -> (u16, Value) {
    let status = response.status().as_u16();
    let body = response.json().await.expect("JSON body");
    (status, body)
}
