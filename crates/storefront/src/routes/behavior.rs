//! Behavior tracking route handler.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use serde::Deserialize;
use serde_json::{Value, json};
use shopsense_core::{Action, BehaviorEvent, ProductId, UserId};
use tracing::instrument;

use crate::error::{AppError, Result, add_breadcrumb};
use crate::state::AppState;

/// Track behavior request body.
///
/// Fields are optional at the type level so that a missing field is reported
/// by name rather than as a generic deserialization failure.
#[derive(Debug, Deserialize)]
pub struct TrackBehaviorRequest {
    pub user_id: Option<String>,
    pub action: Option<Action>,
    pub product_id: Option<String>,
}

/// Record a behavior event for a user.
///
/// `add_to_cart` events also add the product to the user's cart. The product
/// is not validated against the catalog.
///
/// # Errors
///
/// Returns 400 if the body is not valid JSON or a field is missing or blank.
#[instrument(skip(state, payload))]
pub async fn track(
    State(state): State<AppState>,
    payload: std::result::Result<Json<TrackBehaviorRequest>, JsonRejection>,
) -> Result<Json<Value>> {
    let Json(request) = payload?;

    let user = request
        .user_id
        .as_deref()
        .and_then(|id| UserId::parse(id).ok())
        .ok_or_else(|| AppError::missing("user_id"))?;
    let action = request
        .action
        .filter(|action| !action.as_str().trim().is_empty())
        .ok_or_else(|| AppError::missing("action"))?;
    let product = request
        .product_id
        .as_deref()
        .and_then(|id| ProductId::parse(id).ok())
        .ok_or_else(|| AppError::missing("product_id"))?;

    tracing::info!(user = %user, action = %action, product_id = %product, "Tracked behavior");
    add_breadcrumb(
        "behavior",
        "Tracked event",
        Some(&[
            ("user_id", user.as_str()),
            ("action", action.as_str()),
            ("product_id", product.as_str()),
        ]),
    );

    state.record(user, BehaviorEvent::new(action, product)).await;

    Ok(Json(json!({ "status": "logged" })))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::json;

    use super::super::app;
    use super::super::test_support::{get, post_json, send, state_at};

    #[tokio::test]
    async fn test_add_to_cart_updates_cart_and_history() {
        let state = state_at(12);
        let (status, body) = post_json(
            app(state.clone()),
            "/track_behavior",
            &json!({"user_id": "u1", "action": "add_to_cart", "product_id": "p1"}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "logged"}));

        let history = state.history("u1").await;
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].product.as_str(), "p1");

        let (_, cart) = get(app(state), "/cart?user_id=u1").await;
        assert_eq!(cart[0]["id"], "p1");
    }

    #[tokio::test]
    async fn test_other_actions_only_touch_history() {
        let state = state_at(12);
        let (status, _) = post_json(
            app(state.clone()),
            "/track_behavior",
            &json!({"user_id": "u1", "action": "view", "product_id": "unknown-product"}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(state.history("u1").await.len(), 1);
        assert!(state.cart("u1").await.is_empty());
    }

    #[tokio::test]
    async fn test_missing_fields_are_client_errors() {
        for (payload, field) in [
            (json!({"action": "purchase", "product_id": "p1"}), "user_id"),
            (json!({"user_id": "", "action": "purchase", "product_id": "p1"}), "user_id"),
            (json!({"user_id": "u1", "product_id": "p1"}), "action"),
            (json!({"user_id": "u1", "action": "purchase"}), "product_id"),
        ] {
            let (status, body) = post_json(app(state_at(12)), "/track_behavior", &payload).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "payload: {payload}");
            assert_eq!(body["error"], format!("Missing {field}"));
        }
    }

    #[tokio::test]
    async fn test_malformed_json_is_client_error() {
        let request = Request::post("/track_behavior")
            .header("content-type", "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let (status, _) = send(app(state_at(12)), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_missing_content_type_is_client_error() {
        let request = Request::post("/track_behavior")
            .body(Body::from(r#"{"user_id": "u1"}"#))
            .unwrap();
        let (status, _) = send(app(state_at(12)), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
