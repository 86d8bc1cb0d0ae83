//! Shopping cart module.
//!
//! The cart itself lives on the backend; these types model the payload
//! the cart endpoints return and the line-level arithmetic the summary
//! panel shows.

mod cart;

pub use cart::{Cart, CartItem, CartProduct, MAX_QUANTITY_PER_ITEM};
