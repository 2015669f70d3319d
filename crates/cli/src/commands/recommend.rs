//! Offline recommendations from the seed data.

use std::path::Path;

use shopsense_core::{Clock, FixedClock, SystemClock, recommend};
use shopsense_storefront::data::{load_activity, load_catalog};

/// Print the recommendation bundle for `user` as pretty JSON.
///
/// Only the seed behavior is considered; carts start empty, so
/// `cart_based` is always empty here.
///
/// # Errors
///
/// Returns an error if the catalog or behavior file cannot be loaded.
#[allow(clippy::print_stdout)]
pub async fn run(
    catalog_path: &Path,
    behavior_path: &Path,
    user: &str,
    hour: Option<u32>,
) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = load_catalog(catalog_path).await?;
    let activity = load_activity(behavior_path).await?;

    let clock: Box<dyn Clock> = match hour {
        Some(hour) => Box::new(FixedClock::new(hour)),
        None => Box::new(SystemClock),
    };

    let bundle = recommend(&catalog, &activity, user, clock.as_ref());
    println!("{}", serde_json::to_string_pretty(&bundle)?);
    Ok(())
}
