//! Order history operations.

use crate::{ApiClient, ApiError};
use serde::Deserialize;
use shopfront_commerce::checkout::Order;

/// Order listing: wrapped under `orders` or a bare array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OrdersEnvelope {
    Wrapped {
        orders: Vec<Order>,
    },
    Bare(Vec<Order>),
}

impl OrdersEnvelope {
    fn into_orders(self) -> Vec<Order> {
        match self {
            OrdersEnvelope::Wrapped { orders } => orders,
            OrdersEnvelope::Bare(orders) => orders,
        }
    }
}

impl ApiClient {
    /// Fetch the logged-in user's order history.
    pub fn orders(&self) -> Result<Vec<Order>, ApiError> {
        let url = self.endpoints().orders(self.locale());
        let response = self.send(self.get(url))?.error_for_status()?;
        let envelope: OrdersEnvelope = response.json()?;
        Ok(envelope.into_orders())
    }
}
