//! Loading of the static catalog and seed behavior files.
//!
//! # File Formats
//!
//! ```text
//! products.json       { "p1": { "name": "...", "category": "...", "price": 9.99, ... }, ... }
//! user_behavior.json  { "user1": [ { "action": "purchase", "product": "p1" }, ... ], ... }
//! ```
//!
//! Both files keep their key order: the catalog order drives content-based
//! recommendations, the user order drives collaborative tie-breaks.

use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use shopsense_core::{ActivityStore, BehaviorLog, Catalog, ProductId, UserId};
use thiserror::Error;

/// Errors that can occur while loading data files.
#[derive(Debug, Error)]
pub enum DataError {
    /// The file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file is not valid JSON of the expected shape.
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Load the product catalog.
///
/// # Errors
///
/// Returns `DataError` if the file is missing, unreadable, or malformed.
pub async fn load_catalog(path: &Path) -> Result<Catalog, DataError> {
    let raw = read(path).await?;
    parse(path, &raw)
}

/// Load the seed behavior log.
///
/// # Errors
///
/// Returns `DataError` if the file is unreadable or malformed.
pub async fn load_behavior(path: &Path) -> Result<BehaviorLog, DataError> {
    let raw = read(path).await?;
    parse(path, &raw)
}

/// Load the seed behavior log, starting empty if the file does not exist.
///
/// # Errors
///
/// Returns `DataError` if the file exists but is unreadable or malformed.
pub async fn load_activity(path: &Path) -> Result<ActivityStore, DataError> {
    match load_behavior(path).await {
        Ok(log) => Ok(ActivityStore::from_behavior(log)),
        Err(DataError::Io { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), "Behavior file not found, starting empty");
            Ok(ActivityStore::new())
        }
        Err(e) => Err(e),
    }
}

async fn read(path: &Path) -> Result<String, DataError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| DataError::Io {
            path: path.to_path_buf(),
            source,
        })
}

fn parse<T: serde::de::DeserializeOwned>(path: &Path, raw: &str) -> Result<T, DataError> {
    serde_json::from_str(raw).map_err(|source| DataError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

// =============================================================================
// Reference Audit
// =============================================================================

/// Where a dangling product reference was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceSource {
    Behavior,
    Cart,
}

impl ReferenceSource {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Behavior => "behavior",
            Self::Cart => "cart",
        }
    }
}

impl std::fmt::Display for ReferenceSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A behavior or cart entry pointing at a product missing from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DanglingReference {
    pub user: UserId,
    pub product: ProductId,
    pub source: ReferenceSource,
}

/// List every behavior and cart entry whose product is not in the catalog.
///
/// Such entries are tolerated at runtime (they are filtered out of every
/// response); this report exists so operators can clean up their data.
#[must_use]
pub fn audit_references(catalog: &Catalog, activity: &ActivityStore) -> Vec<DanglingReference> {
    let behavior = activity.users().flat_map(move |user| {
        activity
            .history(user.as_str())
            .iter()
            .filter(move |event| !catalog.contains(event.product.as_str()))
            .map(move |event| DanglingReference {
                user: user.clone(),
                product: event.product.clone(),
                source: ReferenceSource::Behavior,
            })
    });

    let carts = activity.carts().flat_map(move |(user, items)| {
        items
            .iter()
            .filter(move |product| !catalog.contains(product.as_str()))
            .map(move |product| DanglingReference {
                user: user.clone(),
                product: product.clone(),
                source: ReferenceSource::Cart,
            })
    });

    behavior.chain(carts).collect()
}
