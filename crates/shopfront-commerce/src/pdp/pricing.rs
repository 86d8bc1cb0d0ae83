//! Derived display price.

use crate::catalog::Product;
use crate::money::Money;
use crate::pdp::VariationSelection;

/// Compute the price to display for a product given the current
/// variation selection.
///
/// The base is the discounted price when one is set, the regular price
/// otherwise. Each selected value adds its modifier; while a discount is
/// active a value's `discounted_modifier` takes precedence over its
/// regular one. Addition is commutative, so selection order never
/// matters, and the result is clamped at zero.
///
/// This function is pure and infallible: malformed numerics were already
/// coerced to zero at the deserialization boundary.
pub fn display_price(product: &Product, selection: &VariationSelection) -> Money {
    let discount_active = product.has_discount();
    let modifiers: Money = selection
        .values()
        .map(|value| value.modifier(discount_active))
        .sum();
    (product.base_price() + modifiers).clamp_non_negative()
}
