//! Product and catalog listing operations.

use crate::{ApiClient, ApiError};
use serde::Deserialize;
use shopfront_commerce::catalog::{Catalog, Product};
use shopfront_commerce::search::{Pagination, ProductQuery};

/// One page of a product listing.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductPage {
    /// The products on this page.
    pub products: Vec<Product>,
    /// Listing pagination.
    pub pagination: Pagination,
}

/// The listing endpoint puts products under `products` or `data` and
/// pagination under `pagination` or `meta`, depending on code path.
#[derive(Debug, Deserialize)]
struct RawListing {
    #[serde(default)]
    products: Option<Vec<Product>>,
    #[serde(default)]
    data: Option<Vec<Product>>,
    #[serde(default)]
    pagination: Option<Pagination>,
    #[serde(default)]
    meta: Option<Pagination>,
}

impl From<RawListing> for ProductPage {
    fn from(raw: RawListing) -> Self {
        let products = match (raw.products, raw.data) {
            (Some(products), _) => products,
            (None, Some(data)) => data,
            (None, None) => Vec::new(),
        };
        let pagination = match (raw.pagination, raw.meta) {
            (Some(pagination), _) => pagination,
            (None, Some(meta)) => meta,
            (None, None) => Pagination::default(),
        };
        Self {
            products,
            pagination,
        }
    }
}

/// The detail endpoint either wraps the product or returns it bare.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ProductEnvelope {
    Wrapped { product: Product },
    Bare(Product),
}

impl ProductEnvelope {
    fn into_product(self) -> Product {
        match self {
            ProductEnvelope::Wrapped { product } => product,
            ProductEnvelope::Bare(product) => product,
        }
    }
}

/// Catalog listing: wrapped under `catalogs` or a bare array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CatalogsEnvelope {
    Wrapped {
        catalogs: Vec<Catalog>,
    },
    Bare(Vec<Catalog>),
}

impl CatalogsEnvelope {
    fn into_catalogs(self) -> Vec<Catalog> {
        match self {
            CatalogsEnvelope::Wrapped { catalogs } => catalogs,
            CatalogsEnvelope::Bare(catalogs) => catalogs,
        }
    }
}

impl ApiClient {
    /// Fetch a page of the product listing.
    pub fn products(&self, query: &ProductQuery) -> Result<ProductPage, ApiError> {
        let url = self.endpoints().products(self.locale());
        let response = self
            .send(self.get(url).queries(query.to_params()))?
            .error_for_status()?;
        let raw: RawListing = response.json()?;
        Ok(raw.into())
    }

    /// Fetch a product's detail payload by slug.
    pub fn product(&self, slug: &str) -> Result<Product, ApiError> {
        let url = self.endpoints().product(self.locale(), slug);
        let response = self.send(self.get(url))?.error_for_status()?;
        let envelope: ProductEnvelope = response.json()?;
        Ok(envelope.into_product())
    }

    /// Fetch the catalog list for the sidebar.
    pub fn catalogs(&self) -> Result<Vec<Catalog>, ApiError> {
        let url = self.endpoints().catalogs(self.locale());
        let response = self.send(self.get(url))?.error_for_status()?;
        let envelope: CatalogsEnvelope = response.json()?;
        Ok(envelope.into_catalogs())
    }

    /// Fetch recommended products for the home page.
    pub fn recommendations(&self) -> Result<Vec<Product>, ApiError> {
        let url = self.endpoints().recommendations(self.locale());
        let response = self.send(self.get(url))?.error_for_status()?;
        let raw: RawListing = response.json()?;
        Ok(ProductPage::from(raw).products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{stub_client, StubTransport};

    #[test]
    fn test_products_sends_query_params() {
        let (client, transport, _session) = stub_client(StubTransport::reply(
            200,
            r#"{"products": [], "pagination": {"current_page": 1, "last_page": 1}}"#,
        ));

        let query = ProductQuery::new().with_search("shirt");
        client.products(&query).unwrap();

        let request = transport.request(0);
        assert!(request.url.starts_with("https://shop.example.com/api/en/v1/products?"));
        assert!(request.url.contains("search=shirt"));
        assert!(request.url.contains("per_page=12"));
    }

    #[test]
    fn test_products_reads_either_listing_shape() {
        let body_a = r#"{"products": [{"id": 1, "name": "A"}],
                         "pagination": {"current_page": 2, "last_page": 5}}"#;
        let body_b = r#"{"data": [{"id": 2, "name": "B"}],
                         "meta": {"current_page": 3, "last_page": 9}}"#;

        let (client, transport, _session) = stub_client(StubTransport::reply(200, body_a));
        transport.push(200, body_b);

        let page = client.products(&ProductQuery::new()).unwrap();
        assert_eq!(page.products[0].name, "A");
        assert_eq!(page.pagination.current_page, 2);

        let page = client.products(&ProductQuery::new()).unwrap();
        assert_eq!(page.products[0].name, "B");
        assert_eq!(page.pagination.last_page, 9);
    }

    #[test]
    fn test_product_detail_unwraps_envelope() {
        let wrapped = r#"{"product": {"id": 7, "name": "Linen Shirt", "price": "100.00"}}"#;
        let bare = r#"{"id": 8, "name": "Socks", "price": "5.00"}"#;

        let (client, transport, _session) = stub_client(StubTransport::reply(200, wrapped));
        transport.push(200, bare);

        assert_eq!(client.product("linen-shirt").unwrap().name, "Linen Shirt");
        assert_eq!(client.product("socks").unwrap().name, "Socks");
    }

    #[test]
    fn test_product_not_found_surfaces_http_error() {
        let (client, _transport, _session) =
            stub_client(StubTransport::reply(404, r#"{"message": "Product not found."}"#));

        let err = client.product("gone").unwrap_err();
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn test_catalogs_accepts_bare_array() {
        let (client, transport, _session) =
            stub_client(StubTransport::reply(200, r#"[{"id": 1, "name": "Men"}]"#));
        transport.push(200, r#"{"catalogs": [{"id": 2, "name": "Women"}]}"#);

        assert_eq!(client.catalogs().unwrap()[0].name, "Men");
        assert_eq!(client.catalogs().unwrap()[0].name, "Women");
    }
}
