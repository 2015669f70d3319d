//! Server-rendered HTML pages.
//!
//! The catalog overview and a per-user dashboard that shows the same
//! recommendation bundle as `/recommendations`, with product names resolved.

use askama::Template;
use axum::{
    extract::State,
    response::Html,
};
use shopsense_core::{Catalog, ProductId, UserId};
use tracing::instrument;

use super::UserQuery;
use crate::error::{AppError, Result};
use crate::state::AppState;

/// Number of behavior events shown on the dashboard.
const RECENT_ACTIVITY_LIMIT: usize = 10;

/// Product display data for templates.
#[derive(Debug, Clone)]
pub struct ProductCard {
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: String,
}

impl ProductCard {
    /// Resolve a product ID against the catalog, skipping unknown IDs.
    fn resolve(catalog: &Catalog, id: &ProductId) -> Option<Self> {
        catalog.get(id.as_str()).map(|product| Self {
            id: id.to_string(),
            name: product.name.clone(),
            category: product.category.clone(),
            price: product.price.to_string(),
        })
    }

    fn resolve_all(catalog: &Catalog, ids: &[ProductId]) -> Vec<Self> {
        ids.iter()
            .filter_map(|id| Self::resolve(catalog, id))
            .collect()
    }
}

/// One titled recommendation list on the dashboard.
#[derive(Debug, Clone)]
pub struct RecommendationSection {
    pub title: &'static str,
    pub products: Vec<ProductCard>,
}

/// A row in the recent activity table.
#[derive(Debug, Clone)]
pub struct ActivityRow {
    pub action: String,
    pub product: String,
}

/// Catalog overview template.
#[derive(Template)]
#[template(path = "pages/home.html")]
pub struct HomeTemplate {
    pub products: Vec<ProductCard>,
    pub default_user: String,
}

/// User dashboard template.
#[derive(Template)]
#[template(path = "pages/dashboard.html")]
pub struct DashboardTemplate {
    pub user_id: String,
    pub sections: Vec<RecommendationSection>,
    pub cart: Vec<ProductCard>,
    pub recent: Vec<ActivityRow>,
}

/// Render a template, mapping failures to a 500.
fn render(template: &impl Template) -> Result<Html<String>> {
    template
        .render()
        .map(Html)
        .map_err(|e| AppError::Internal(format!("template render failed: {e}")))
}

/// Display the catalog overview.
///
/// # Errors
///
/// Returns 500 if the template fails to render.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> Result<Html<String>> {
    let catalog = state.catalog();
    let products = catalog
        .iter()
        .filter_map(|(id, _)| ProductCard::resolve(catalog, id))
        .collect();

    render(&HomeTemplate {
        products,
        default_user: state.config().default_user.to_string(),
    })
}

/// Display recommendations, cart, and recent activity for a user.
///
/// # Errors
///
/// Returns 500 if the template fails to render.
#[instrument(skip(state))]
pub async fn dashboard(
    State(state): State<AppState>,
    query: UserQuery,
) -> Result<Html<String>> {
    let user = query
        .user()
        .map_or_else(|| state.config().default_user.clone(), UserId::from);
    let catalog = state.catalog();

    let snapshot = state.snapshot(user.as_str()).await;
    let bundle = &snapshot.recommendations;
    let sections = vec![
        RecommendationSection {
            title: "Customers like you bought",
            products: ProductCard::resolve_all(catalog, &bundle.history_based),
        },
        RecommendationSection {
            title: "Similar products",
            products: ProductCard::resolve_all(catalog, &bundle.similar_products),
        },
        RecommendationSection {
            title: "Goes with your cart",
            products: ProductCard::resolve_all(catalog, &bundle.cart_based),
        },
        RecommendationSection {
            title: "Right now",
            products: ProductCard::resolve_all(catalog, &bundle.time_based),
        },
    ];

    let cart = ProductCard::resolve_all(catalog, &snapshot.cart);

    let recent = snapshot
        .history
        .iter()
        .rev()
        .take(RECENT_ACTIVITY_LIMIT)
        .map(|event| ActivityRow {
            action: event.action.to_string(),
            product: catalog
                .get(event.product.as_str())
                .map_or_else(|| event.product.to_string(), |p| p.name.clone()),
        })
        .collect();

    render(&DashboardTemplate {
        user_id: user.to_string(),
        sections,
        cart,
        recent,
    })
}
