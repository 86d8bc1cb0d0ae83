//! Catalog (category) type.

use crate::catalog::ProductImage;
use crate::ids::CatalogId;
use serde::{Deserialize, Serialize};

/// A catalog groups products, e.g. "Men", "Women", "Accessories".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Catalog {
    /// Unique catalog identifier.
    pub id: CatalogId,
    /// Display name.
    pub name: String,
    /// Description, absent for most catalogs.
    #[serde(default)]
    pub description: Option<String>,
    /// Banner image.
    #[serde(default)]
    pub image: Option<ProductImage>,
    /// Number of products, included by some listing endpoints.
    #[serde(default)]
    pub products_count: Option<i64>,
}
