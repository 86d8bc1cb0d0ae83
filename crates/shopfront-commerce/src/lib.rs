//! Commerce domain types and logic for the Shopfront client.
//!
//! This crate models the storefront's domain as served by the commerce
//! backend, and the derived values the UI computes from it:
//!
//! - **Catalog**: products, variations, images, catalogs
//! - **Pdp**: variation selection, derived display price, active image
//! - **Cart**: cart payloads and line arithmetic
//! - **Checkout**: shipping details, orders, order status
//! - **Review**: review submission and aggregates
//! - **Search**: listing queries and pagination
//!
//! # Example
//!
//! ```rust
//! use shopfront_commerce::prelude::*;
//!
//! let product: Product = serde_json::from_str(r#"{
//!     "id": 7,
//!     "name": "Linen Shirt",
//!     "price": "100.00",
//!     "discounted_price": "80.00",
//!     "variations": [{
//!         "id": 3,
//!         "name": "Size",
//!         "values": [{"id": 32, "value": "L",
//!                     "price_modifier": "5.00",
//!                     "discounted_modifier": "2.00"}]
//!     }]
//! }"#).unwrap();
//!
//! let mut selection = VariationSelection::new();
//! let large = product.variations[0].values[0].clone();
//! selection.select("Size", large);
//!
//! assert_eq!(display_price(&product, &selection).display(), "$82.00");
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod pdp;
pub mod review;
pub mod search;

pub use error::StorefrontError;
pub use ids::*;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::StorefrontError;
    pub use crate::ids::*;
    pub use crate::money::Money;

    // Catalog
    pub use crate::catalog::{Catalog, Product, ProductImage, Variation, VariationValue};

    // Product detail page
    pub use crate::pdp::{active_image, display_price, VariationSelection};

    // Cart
    pub use crate::cart::{Cart, CartItem, CartProduct, MAX_QUANTITY_PER_ITEM};

    // Checkout
    pub use crate::checkout::{
        Order, OrderItem, OrderStatus, PhoneNumber, ShippingAddress, ShippingDetails,
    };

    // Reviews
    pub use crate::review::{NewReview, Review, ReviewSummary};

    // Search
    pub use crate::search::{PageItem, Pagination, ProductQuery, SortOption};
}
