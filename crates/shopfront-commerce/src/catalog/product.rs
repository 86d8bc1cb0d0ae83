//! Product and variation types.
//!
//! These mirror the product-detail payload. The backend is inconsistent
//! about which fields it includes per endpoint (listing vs. detail vs.
//! cart summaries), so everything beyond `id` and `name` is defaulted
//! and optional fields are modeled explicitly rather than probed for.

use crate::ids::{ImageId, ProductId, VariationId, VariationValueId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product as served by the catalog API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// URL-friendly slug, used for detail lookups.
    #[serde(default)]
    pub slug: String,
    /// Full description.
    #[serde(default)]
    pub description: Option<String>,
    /// Regular price.
    #[serde(default)]
    pub price: Money,
    /// Discounted price. When present it is lower than `price` and
    /// becomes the authoritative base for display.
    #[serde(default)]
    pub discounted_price: Option<Money>,
    /// Product images, first one is the default display image.
    #[serde(default)]
    pub images: Vec<ProductImage>,
    /// Variation axes offered for this product (e.g. "Size", "Color").
    #[serde(default)]
    pub variations: Vec<Variation>,
    /// Name of the catalog this product belongs to.
    #[serde(default)]
    pub catalog: Option<String>,
    /// Tags for filtering/search.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Product {
    /// The base price for display: the discounted price when the product
    /// has an active discount, the regular price otherwise.
    pub fn base_price(&self) -> Money {
        self.discounted_price.unwrap_or(self.price)
    }

    /// Check if the product currently has an active discount.
    pub fn has_discount(&self) -> bool {
        self.discounted_price.is_some()
    }

    /// The default display image, if the product has any.
    pub fn primary_image(&self) -> Option<&ProductImage> {
        self.images.first()
    }

    /// Check if this product offers variations.
    pub fn has_variations(&self) -> bool {
        !self.variations.is_empty()
    }

    /// Look up a variation axis by name.
    pub fn variation(&self, name: &str) -> Option<&Variation> {
        self.variations.iter().find(|v| v.name == name)
    }
}

/// A variation axis on a product (e.g. "Size" with values S/M/L).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Variation {
    /// Unique variation identifier.
    pub id: VariationId,
    /// Axis name (e.g. "Size", "Color").
    pub name: String,
    /// Choices offered on this axis.
    #[serde(default)]
    pub values: Vec<VariationValue>,
}

impl Variation {
    /// Look up a value by its id.
    pub fn value(&self, id: VariationValueId) -> Option<&VariationValue> {
        self.values.iter().find(|v| v.id == id)
    }
}

/// One concrete choice within a variation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VariationValue {
    /// Unique value identifier.
    pub id: VariationValueId,
    /// Display label (e.g. "Large").
    pub value: String,
    /// Delta added to the base price when this value is selected.
    #[serde(default)]
    pub price_modifier: Money,
    /// Alternate delta used instead of `price_modifier` while the
    /// product's discounted price is active.
    #[serde(default)]
    pub discounted_modifier: Option<Money>,
    /// Swatch color for color-type variations.
    #[serde(default)]
    pub color_code: Option<String>,
    /// Images specific to this value (e.g. the product in that color).
    #[serde(default)]
    pub images: Option<Vec<ProductImage>>,
}

impl VariationValue {
    /// The price delta this value contributes.
    ///
    /// While a discount is active a value's `discounted_modifier` takes
    /// precedence; a value without one falls back to its regular
    /// modifier.
    pub fn modifier(&self, discount_active: bool) -> Money {
        if discount_active {
            self.discounted_modifier.unwrap_or(self.price_modifier)
        } else {
            self.price_modifier
        }
    }

    /// Check if this value carries its own image set.
    pub fn has_own_images(&self) -> bool {
        self.images.as_ref().is_some_and(|imgs| !imgs.is_empty())
    }

    /// First image of this value's own image set, if any.
    pub fn primary_image(&self) -> Option<&ProductImage> {
        self.images.as_ref().and_then(|imgs| imgs.first())
    }
}

/// A product image reference.
///
/// `url` is relative to the storage host; the client layer resolves it
/// to an absolute URL.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductImage {
    /// Image identifier, absent in some listing payloads.
    #[serde(default)]
    pub id: Option<ImageId>,
    /// Path relative to the storage base.
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product_json() -> &'static str {
        r#"{
            "id": 7,
            "name": "Linen Shirt",
            "slug": "linen-shirt",
            "description": "A shirt.",
            "price": "100.00",
            "discounted_price": "80.00",
            "images": [{"id": 1, "url": "products/shirt-front.jpg"}],
            "variations": [
                {
                    "id": 3,
                    "name": "Size",
                    "values": [
                        {"id": 31, "value": "M", "price_modifier": "0.00"},
                        {"id": 32, "value": "L", "price_modifier": "5.00", "discounted_modifier": "2.00"}
                    ]
                }
            ],
            "catalog": "Men",
            "tags": ["shirt", "linen"]
        }"#
    }

    #[test]
    fn test_product_deserialize() {
        let product: Product = serde_json::from_str(product_json()).unwrap();
        assert_eq!(product.id.value(), 7);
        assert_eq!(product.price, Money::from_cents(10000));
        assert_eq!(product.discounted_price, Some(Money::from_cents(8000)));
        assert_eq!(product.variations.len(), 1);
        assert_eq!(product.variations[0].values.len(), 2);
    }

    #[test]
    fn test_product_minimal_payload() {
        // Cart and listing payloads omit most fields.
        let product: Product = serde_json::from_str(r#"{"id": 1, "name": "Socks"}"#).unwrap();
        assert_eq!(product.price, Money::ZERO);
        assert!(product.discounted_price.is_none());
        assert!(product.images.is_empty());
        assert!(!product.has_variations());
    }

    #[test]
    fn test_base_price_prefers_discount() {
        let mut product: Product = serde_json::from_str(product_json()).unwrap();
        assert_eq!(product.base_price(), Money::from_cents(8000));

        product.discounted_price = None;
        assert_eq!(product.base_price(), Money::from_cents(10000));
    }

    #[test]
    fn test_modifier_choice() {
        let product: Product = serde_json::from_str(product_json()).unwrap();
        let size = product.variation("Size").unwrap();
        let large = size.value(VariationValueId::new(32)).unwrap();

        // Discount active: the discounted modifier wins.
        assert_eq!(large.modifier(true), Money::from_cents(200));
        // No discount: regular modifier.
        assert_eq!(large.modifier(false), Money::from_cents(500));

        // A value without a discounted modifier always uses the regular one.
        let medium = size.value(VariationValueId::new(31)).unwrap();
        assert_eq!(medium.modifier(true), Money::ZERO);
        assert_eq!(medium.modifier(false), Money::ZERO);
    }

    #[test]
    fn test_null_discounted_modifier_is_none() {
        let value: VariationValue = serde_json::from_str(
            r#"{"id": 5, "value": "XL", "price_modifier": "5.00", "discounted_modifier": null}"#,
        )
        .unwrap();
        assert!(value.discounted_modifier.is_none());
        assert_eq!(value.modifier(true), Money::from_cents(500));
    }

    #[test]
    fn test_malformed_modifier_coerced_to_zero() {
        let value: VariationValue = serde_json::from_str(
            r#"{"id": 5, "value": "XL", "price_modifier": "n/a"}"#,
        )
        .unwrap();
        assert_eq!(value.price_modifier, Money::ZERO);
    }

    #[test]
    fn test_value_images() {
        let value: VariationValue = serde_json::from_str(
            r##"{"id": 9, "value": "Red", "price_modifier": 0, "color_code": "#ff0000",
                "images": [{"url": "products/shirt-red.jpg"}]}"##,
        )
        .unwrap();
        assert!(value.has_own_images());
        assert_eq!(value.primary_image().unwrap().url, "products/shirt-red.jpg");
    }
}
