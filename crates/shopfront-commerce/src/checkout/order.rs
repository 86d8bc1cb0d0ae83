//! Order history types.

use crate::cart::CartProduct;
use crate::catalog::VariationValue;
use crate::ids::{OrderId, OrderItemId, ProductId};
use crate::money::Money;
use serde::de::Deserializer;
use serde::{Deserialize, Serialize};

/// Order status as reported by the backend.
///
/// Orders progress pending -> paid -> shipped -> completed; cancellation
/// is a side exit available before shipment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OrderStatus {
    #[default]
    Pending,
    Paid,
    Shipped,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Paid => "paid",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Paid => "Paid",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Completed => "Completed",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    /// Parse a status string, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pending" => Some(OrderStatus::Pending),
            "paid" => Some(OrderStatus::Paid),
            "shipped" => Some(OrderStatus::Shipped),
            "completed" => Some(OrderStatus::Completed),
            "cancelled" => Some(OrderStatus::Cancelled),
            _ => None,
        }
    }

    /// Position in the 4-step progress tracker; `None` for cancelled.
    pub fn progress_index(&self) -> Option<usize> {
        match self {
            OrderStatus::Pending => Some(0),
            OrderStatus::Paid => Some(1),
            OrderStatus::Shipped => Some(2),
            OrderStatus::Completed => Some(3),
            OrderStatus::Cancelled => None,
        }
    }

    /// Check if the order reached a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Completed | OrderStatus::Cancelled)
    }

    /// Check if the order can still be cancelled.
    pub fn can_cancel(&self) -> bool {
        matches!(self, OrderStatus::Pending | OrderStatus::Paid)
    }
}

impl Serialize for OrderStatus {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for OrderStatus {
    // Unknown statuses deserialize as Pending rather than failing the
    // whole order list.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(OrderStatus::parse(&raw).unwrap_or_default())
    }
}

/// A past order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    /// Unique order identifier.
    pub id: OrderId,
    /// Current status.
    #[serde(default)]
    pub status: OrderStatus,
    /// Order lines.
    #[serde(default)]
    pub items: Vec<OrderItem>,
    /// Grand total charged.
    #[serde(default)]
    pub total_price: Money,
    /// Shipping address the order was placed with.
    #[serde(default)]
    pub shipping_address: Option<ShippingAddress>,
    /// Creation date string as emitted by the backend.
    #[serde(default)]
    pub created_at: Option<String>,
}

/// One line of a past order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderItem {
    /// Order line identifier.
    #[serde(default)]
    pub id: Option<OrderItemId>,
    /// The purchased product's id, kept even when the summary is absent.
    pub product_id: ProductId,
    /// Product summary for display.
    #[serde(default)]
    pub product: Option<CartProduct>,
    /// Unit price paid.
    #[serde(default)]
    pub price: Money,
    /// Quantity purchased.
    #[serde(default)]
    pub quantity: i64,
    /// Variation values the line was purchased with.
    #[serde(default)]
    pub variations: Vec<VariationValue>,
}

impl OrderItem {
    /// Line total: unit price times quantity.
    pub fn line_total(&self) -> Money {
        self.price * self.quantity
    }
}

/// The address block attached to a past order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ShippingAddress {
    #[serde(default)]
    pub recipient_name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address_line: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub postal_code: String,
    #[serde(default)]
    pub country: String,
}

impl ShippingAddress {
    /// Format as a single line.
    pub fn one_line(&self) -> String {
        format!(
            "{}, {}, {}, {} ({})",
            self.recipient_name, self.address_line, self.city, self.country, self.postal_code
        )
    }
}
