//! Product listing query builder.

use crate::ids::CatalogId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Default page size used by the listing page.
pub const DEFAULT_PER_PAGE: i64 = 12;

/// Sort options for product listings.
///
/// The listing endpoint takes sorting as a `sort_by`/`sort_order` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortOption {
    /// Newest first.
    #[default]
    Newest,
    /// Price, low to high.
    PriceAsc,
    /// Price, high to low.
    PriceDesc,
    /// Name A-Z.
    NameAsc,
    /// Name Z-A.
    NameDesc,
}

impl SortOption {
    /// The `(sort_by, sort_order)` parameter pair.
    pub fn to_params(&self) -> (&'static str, &'static str) {
        match self {
            SortOption::Newest => ("created_at", "desc"),
            SortOption::PriceAsc => ("price", "asc"),
            SortOption::PriceDesc => ("price", "desc"),
            SortOption::NameAsc => ("name", "asc"),
            SortOption::NameDesc => ("name", "desc"),
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortOption::Newest => "Newest",
            SortOption::PriceAsc => "Price: Low to High",
            SortOption::PriceDesc => "Price: High to Low",
            SortOption::NameAsc => "Name: A-Z",
            SortOption::NameDesc => "Name: Z-A",
        }
    }
}

/// A product listing query.
///
/// Empty fields are omitted from the request, matching the sidebar's
/// behavior of only sending filled-in filters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductQuery {
    /// Full-text search in name/description.
    pub search: Option<String>,
    /// Restrict to one catalog.
    pub catalog_id: Option<CatalogId>,
    /// Minimum price.
    pub price_min: Option<Money>,
    /// Maximum price.
    pub price_max: Option<Money>,
    /// Sort option; the backend default applies when unset.
    pub sort: Option<SortOption>,
    /// Current page (1-indexed), 0 meaning unset.
    pub page: i64,
    /// Items per page, 0 meaning unset.
    pub per_page: i64,
}

impl ProductQuery {
    /// Create an empty query (first page, default page size).
    pub fn new() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
            ..Self::default()
        }
    }

    /// Set the search text; blank input clears it.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        let search = search.into();
        self.search = if search.trim().is_empty() {
            None
        } else {
            Some(search)
        };
        self
    }

    /// Restrict to a catalog.
    pub fn with_catalog(mut self, catalog_id: CatalogId) -> Self {
        self.catalog_id = Some(catalog_id);
        self
    }

    /// Set the price range; either bound may be open.
    pub fn with_price_range(mut self, min: Option<Money>, max: Option<Money>) -> Self {
        self.price_min = min;
        self.price_max = max;
        self
    }

    /// Set the sort option.
    pub fn with_sort(mut self, sort: SortOption) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Set pagination.
    pub fn with_pagination(mut self, page: i64, per_page: i64) -> Self {
        self.page = page.max(1);
        self.per_page = per_page.clamp(1, 100);
        self
    }

    /// Jump to a page, keeping the other filters.
    pub fn at_page(mut self, page: i64) -> Self {
        self.page = page.max(1);
        self
    }

    /// Build the query parameters for the listing request.
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(ref search) = self.search {
            params.push(("search".to_string(), search.clone()));
        }
        if let Some(catalog_id) = self.catalog_id {
            params.push(("catalog_id".to_string(), catalog_id.to_string()));
        }
        if let Some(min) = self.price_min {
            params.push(("price_min".to_string(), min.display_amount()));
        }
        if let Some(max) = self.price_max {
            params.push(("price_max".to_string(), max.display_amount()));
        }
        if let Some(sort) = self.sort {
            let (sort_by, sort_order) = sort.to_params();
            params.push(("sort_by".to_string(), sort_by.to_string()));
            params.push(("sort_order".to_string(), sort_order.to_string()));
        }
        if self.page > 0 {
            params.push(("page".to_string(), self.page.to_string()));
        }
        if self.per_page > 0 {
            params.push(("per_page".to_string(), self.per_page.to_string()));
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_only_paginates() {
        let params = ProductQuery::new().to_params();
        assert_eq!(
            params,
            vec![
                ("page".to_string(), "1".to_string()),
                ("per_page".to_string(), "12".to_string()),
            ]
        );
    }

    #[test]
    fn test_full_query() {
        let params = ProductQuery::new()
            .with_search("shirt")
            .with_catalog(CatalogId::new(2))
            .with_price_range(Some(Money::from_cents(1000)), Some(Money::from_cents(5000)))
            .with_sort(SortOption::PriceAsc)
            .with_pagination(3, 12)
            .to_params();

        assert!(params.contains(&("search".to_string(), "shirt".to_string())));
        assert!(params.contains(&("catalog_id".to_string(), "2".to_string())));
        assert!(params.contains(&("price_min".to_string(), "10.00".to_string())));
        assert!(params.contains(&("price_max".to_string(), "50.00".to_string())));
        assert!(params.contains(&("sort_by".to_string(), "price".to_string())));
        assert!(params.contains(&("sort_order".to_string(), "asc".to_string())));
        assert!(params.contains(&("page".to_string(), "3".to_string())));
    }

    #[test]
    fn test_blank_search_cleared() {
        let query = ProductQuery::new().with_search("  ");
        assert!(query.search.is_none());
    }

    #[test]
    fn test_pagination_clamped() {
        let query = ProductQuery::new().with_pagination(0, 500);
        assert_eq!(query.page, 1);
        assert_eq!(query.per_page, 100);
    }
}
