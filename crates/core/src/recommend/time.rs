//! Time-of-day recommendations.

use crate::types::ProductId;

/// Map an hour of day (0-23) to a fixed product list.
///
/// Mornings `[5, 12)` suggest coffee, evenings `[18, 23)` suggest a snack,
/// every other hour suggests nothing.
#[must_use]
pub fn time_based(hour: u32) -> Vec<ProductId> {
    match hour {
        5..12 => vec![ProductId::new("coffee1")],
        18..23 => vec![ProductId::new("snack1")],
        _ => Vec::new(),
    }
}
