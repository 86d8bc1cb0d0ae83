//! Checkout and order module.
//!
//! Checkout collects shipping details and hands off to the payment
//! provider; orders are the read-only history the account page shows.

mod address;
mod order;

pub use address::{PhoneNumber, ShippingDetails};
pub use order::{Order, OrderItem, OrderStatus, ShippingAddress};
