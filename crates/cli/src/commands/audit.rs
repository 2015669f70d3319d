//! Dangling reference report.

use std::path::Path;

use shopsense_storefront::data::{audit_references, load_activity, load_catalog};
use tracing::info;

/// Print every behavior entry whose product is not in the catalog.
///
/// One line per reference: `user<TAB>product<TAB>source`.
///
/// # Errors
///
/// Returns an error if the catalog or behavior file cannot be loaded.
#[allow(clippy::print_stdout)]
pub async fn run(
    catalog_path: &Path,
    behavior_path: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = load_catalog(catalog_path).await?;
    let activity = load_activity(behavior_path).await?;

    let report = audit_references(&catalog, &activity);
    for reference in &report {
        println!(
            "{}\t{}\t{}",
            reference.user, reference.product, reference.source
        );
    }

    info!(
        products = catalog.len(),
        users = activity.user_count(),
        dangling = report.len(),
        "Audit complete"
    );
    Ok(())
}
