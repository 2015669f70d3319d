//! User-user collaborative filtering over purchase sets.

use indexmap::IndexSet;

use super::MAX_RECOMMENDATIONS;
use crate::activity::ActivityStore;
use crate::types::ProductId;

/// Keeps the similarity denominator non-zero when either set is empty.
pub const SIMILARITY_EPSILON: f64 = 1e-6;

/// Cosine-like overlap between two purchase sets:
/// `|a ∩ b| / sqrt(|a| * |b| + ε)`.
#[must_use]
#[allow(clippy::cast_precision_loss)] // Purchase set sizes never approach 2^52
pub fn similarity(a: &IndexSet<&ProductId>, b: &IndexSet<&ProductId>) -> f64 {
    let shared = a.intersection(b).count() as f64;
    let denominator = (a.len() as f64).mul_add(b.len() as f64, SIMILARITY_EPSILON);
    shared / denominator.sqrt()
}

/// Recommend what the most similar other buyer purchased.
///
/// Every other known user is scored with [`similarity`]. The first user with
/// the highest score is the neighbour, even when that score is zero. A user
/// with no purchases, or no other known users, yields nothing. Up to
/// [`MAX_RECOMMENDATIONS`] of the neighbour's purchases that `user` has not
/// bought are returned, in the neighbour's first-purchase order.
#[must_use]
pub fn collaborative(activity: &ActivityStore, user: &str) -> Vec<ProductId> {
    let target = activity.purchase_set(user);
    if target.is_empty() {
        return Vec::new();
    }

    let mut best: Option<(IndexSet<&ProductId>, f64)> = None;
    for other in activity.users().filter(|other| other.as_str() != user) {
        let theirs = activity.purchase_set(other.as_str());
        let score = similarity(&target, &theirs);
        if best.as_ref().is_none_or(|(_, top)| score > *top) {
            best = Some((theirs, score));
        }
    }

    best.map(|(neighbour, _)| {
        neighbour
            .into_iter()
            .filter(|product| !target.contains(*product))
            .take(MAX_RECOMMENDATIONS)
            .cloned()
            .collect()
    })
    .unwrap_or_default()
}
