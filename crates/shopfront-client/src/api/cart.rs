//! Cart operations.

use crate::api::MessageResponse;
use crate::{ApiClient, ApiError};
use serde::{Deserialize, Serialize};
use shopfront_commerce::cart::{Cart, CartItem, MAX_QUANTITY_PER_ITEM};
use shopfront_commerce::catalog::Product;
use shopfront_commerce::ids::{CartItemId, ProductId, VariationValueId};
use shopfront_commerce::money::Money;
use shopfront_commerce::pdp::VariationSelection;
use shopfront_commerce::StorefrontError;

/// Payload for adding a product to the cart.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AddToCartRequest {
    /// The product to add.
    pub product_id: ProductId,
    /// How many to add.
    pub quantity: i64,
    /// The variation values picked on the detail page.
    pub variation_value_ids: Vec<VariationValueId>,
}

impl AddToCartRequest {
    /// Add a product with no variations.
    pub fn new(product_id: ProductId, quantity: i64) -> Self {
        Self {
            product_id,
            quantity,
            variation_value_ids: Vec::new(),
        }
    }

    /// Build the payload from a detail page's current selection.
    pub fn from_selection(product: &Product, selection: &VariationSelection, quantity: i64) -> Self {
        Self {
            product_id: product.id,
            quantity,
            variation_value_ids: selection.value_ids(),
        }
    }

    fn validate(&self) -> Result<(), StorefrontError> {
        if self.quantity < 1 {
            return Err(StorefrontError::InvalidQuantity(self.quantity));
        }
        if self.quantity > MAX_QUANTITY_PER_ITEM {
            return Err(StorefrontError::QuantityExceedsLimit(
                self.quantity,
                MAX_QUANTITY_PER_ITEM,
            ));
        }
        Ok(())
    }
}

/// Update responses sometimes carry the refreshed cart inline and
/// sometimes just an acknowledgment.
#[derive(Debug, Deserialize)]
struct RawCartUpdate {
    #[serde(default)]
    items: Option<Vec<CartItem>>,
    #[serde(default)]
    total_price: Option<Money>,
    #[serde(default)]
    #[allow(dead_code)]
    message: Option<String>,
}

impl ApiClient {
    /// Fetch the current cart.
    pub fn cart(&self) -> Result<Cart, ApiError> {
        let url = self.endpoints().cart(self.locale());
        let response = self.send(self.get(url))?.error_for_status()?;
        response.json()
    }

    /// Add a product (with its selected variation values) to the cart.
    pub fn add_to_cart(&self, request: &AddToCartRequest) -> Result<MessageResponse, ApiError> {
        request.validate()?;
        let url = self.endpoints().cart(self.locale());
        let response = self
            .send(self.post(url).json(request)?)?
            .error_for_status()?;
        response.json()
    }

    /// Set a cart line's quantity.
    ///
    /// Quantities below 1 are rejected locally; removal is
    /// [`remove_cart_item`](Self::remove_cart_item). Returns the
    /// refreshed cart, refetching when the update response omits it.
    pub fn set_cart_quantity(&self, item_id: CartItemId, quantity: i64) -> Result<Cart, ApiError> {
        if quantity < 1 {
            return Err(StorefrontError::InvalidQuantity(quantity).into());
        }
        if quantity > MAX_QUANTITY_PER_ITEM {
            return Err(
                StorefrontError::QuantityExceedsLimit(quantity, MAX_QUANTITY_PER_ITEM).into(),
            );
        }

        let url = self.endpoints().cart(self.locale());
        let response = self
            .send(
                self.put(url)
                    .query("cart_item_id", item_id.to_string())
                    .query("quantity", quantity.to_string()),
            )?
            .error_for_status()?;

        let raw: RawCartUpdate = response.json()?;
        match raw.items {
            Some(items) => {
                let total_price = raw
                    .total_price
                    .unwrap_or_else(|| items.iter().map(CartItem::line_total).sum());
                Ok(Cart { items, total_price })
            }
            None => self.cart(),
        }
    }

    /// Remove a cart line and return the refreshed cart.
    pub fn remove_cart_item(&self, item_id: CartItemId) -> Result<Cart, ApiError> {
        let url = self.endpoints().cart(self.locale());
        self.send(self.delete(url).query("cart_item_id", item_id.to_string()))?
            .error_for_status()?;
        self.cart()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{stub_client, StubTransport};
    use crate::Method;

    #[test]
    fn test_add_to_cart_posts_selection_payload() {
        let (client, transport, _session) =
            stub_client(StubTransport::reply(200, r#"{"message": "Added."}"#));

        let request = AddToCartRequest {
            product_id: ProductId::new(7),
            quantity: 1,
            variation_value_ids: vec![VariationValueId::new(3), VariationValueId::new(9)],
        };
        let ack = client.add_to_cart(&request).unwrap();
        assert_eq!(ack.message.as_deref(), Some("Added."));

        let sent = transport.request(0);
        assert_eq!(sent.method, Method::Post);
        let body: serde_json::Value = serde_json::from_slice(sent.body.as_ref().unwrap()).unwrap();
        assert_eq!(body["product_id"], 7);
        assert_eq!(body["quantity"], 1);
        assert_eq!(body["variation_value_ids"], serde_json::json!([3, 9]));
    }

    #[test]
    fn test_add_to_cart_rejects_bad_quantity_locally() {
        let (client, transport, _session) = stub_client(StubTransport::new());
        let request = AddToCartRequest::new(ProductId::new(7), 0);
        assert!(matches!(
            client.add_to_cart(&request),
            Err(ApiError::Domain(StorefrontError::InvalidQuantity(0)))
        ));
        assert_eq!(transport.request_count(), 0);
    }

    #[test]
    fn test_set_quantity_uses_query_params() {
        let body = r#"{"items": [{"id": 11, "price": "10.00", "quantity": 3,
                                   "product": {"id": 7, "name": "Shirt"}}],
                       "total_price": "30.00"}"#;
        let (client, transport, _session) = stub_client(StubTransport::reply(200, body));

        let cart = client.set_cart_quantity(CartItemId::new(11), 3).unwrap();
        assert_eq!(cart.items[0].quantity, 3);
        assert_eq!(cart.total_price, Money::from_cents(3000));

        let sent = transport.request(0);
        assert_eq!(sent.method, Method::Put);
        assert!(sent.url.ends_with("/en/v1/cart?cart_item_id=11&quantity=3"));
    }

    #[test]
    fn test_set_quantity_refetches_when_response_is_bare_ack() {
        let (client, transport, _session) =
            stub_client(StubTransport::reply(200, r#"{"message": "Updated."}"#));
        transport.push(
            200,
            r#"{"items": [], "total_price": "0.00"}"#,
        );

        let cart = client.set_cart_quantity(CartItemId::new(11), 2).unwrap();
        assert!(cart.is_empty());
        // One PUT, then one GET to refetch.
        assert_eq!(transport.request_count(), 2);
        assert_eq!(transport.request(1).method, Method::Get);
    }

    #[test]
    fn test_set_quantity_floor_is_one() {
        let (client, transport, _session) = stub_client(StubTransport::new());
        assert!(client.set_cart_quantity(CartItemId::new(11), 0).is_err());
        assert_eq!(transport.request_count(), 0);
    }

    #[test]
    fn test_remove_item_then_refetch() {
        let (client, transport, _session) =
            stub_client(StubTransport::reply(200, r#"{"message": "Removed."}"#));
        transport.push(200, r#"{"items": [], "total_price": "0.00"}"#);

        let cart = client.remove_cart_item(CartItemId::new(11)).unwrap();
        assert!(cart.is_empty());

        let sent = transport.request(0);
        assert_eq!(sent.method, Method::Delete);
        assert!(sent.url.contains("cart_item_id=11"));
    }

    #[test]
    fn test_from_selection_builds_payload() {
        let product: Product =
            serde_json::from_str(r#"{"id": 7, "name": "Shirt", "price": "10.00"}"#).unwrap();
        let selection = VariationSelection::new();
        let request = AddToCartRequest::from_selection(&product, &selection, 2);
        assert_eq!(request.product_id, ProductId::new(7));
        assert_eq!(request.quantity, 2);
        assert!(request.variation_value_ids.is_empty());
    }
}
