//! Cart and cart item types.

use crate::catalog::ProductImage;
use crate::error::StorefrontError;
use crate::ids::{CartItemId, ProductId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Maximum quantity allowed per cart item.
pub const MAX_QUANTITY_PER_ITEM: i64 = 9999;

/// The cart as returned by the cart endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    /// Items in the cart.
    #[serde(default)]
    pub items: Vec<CartItem>,
    /// Server-computed total.
    #[serde(default)]
    pub total_price: Money,
}

impl Cart {
    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Number of distinct cart lines.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Get an item by its cart line id.
    pub fn get_item(&self, id: CartItemId) -> Option<&CartItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Sum of line totals.
    ///
    /// The summary panel shows the server's `total_price`; this is the
    /// same figure recomputed locally, used when a response omits it.
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(CartItem::line_total).sum()
    }
}

/// One line in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    /// Cart line identifier.
    pub id: CartItemId,
    /// Unit price at the time the line was added, variation modifiers
    /// included.
    #[serde(default)]
    pub price: Money,
    /// Quantity.
    #[serde(default)]
    pub quantity: i64,
    /// Product summary for display.
    pub product: CartProduct,
}

impl CartItem {
    /// Line total: unit price times quantity.
    pub fn line_total(&self) -> Money {
        self.price * self.quantity
    }

    /// The quantity after applying a stepper delta.
    ///
    /// Steps below 1 are rejected (the quantity control bottoms out at
    /// one; removal is a separate action), as are steps past the
    /// per-item limit.
    pub fn adjusted_quantity(&self, delta: i64) -> Result<i64, StorefrontError> {
        let next = self.quantity.saturating_add(delta);
        if next < 1 {
            return Err(StorefrontError::InvalidQuantity(next));
        }
        if next > MAX_QUANTITY_PER_ITEM {
            return Err(StorefrontError::QuantityExceedsLimit(
                next,
                MAX_QUANTITY_PER_ITEM,
            ));
        }
        Ok(next)
    }
}

/// The product summary embedded in cart and order lines.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartProduct {
    /// Product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Slug for linking back to the detail page.
    #[serde(default)]
    pub slug: String,
    /// Short description.
    #[serde(default)]
    pub description: Option<String>,
    /// Product images; the first is used as the line thumbnail.
    #[serde(default)]
    pub images: Vec<ProductImage>,
}

impl CartProduct {
    /// The thumbnail image for this line, if the product has any.
    pub fn thumbnail(&self) -> Option<&ProductImage> {
        self.images.first()
    }
}
