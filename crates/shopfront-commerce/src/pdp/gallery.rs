//! Active image lookup.

use crate::catalog::{Product, ProductImage};
use crate::pdp::VariationSelection;

/// The image to display for the current selection.
///
/// A selected value that carries its own image set contributes its first
/// image; otherwise the product's first image is shown. When several
/// selected values carry images, the first in axis-name order wins, so
/// the result depends only on the selection contents.
pub fn active_image<'a>(
    product: &'a Product,
    selection: &'a VariationSelection,
) -> Option<&'a ProductImage> {
    selection
        .values()
        .find_map(|value| value.primary_image())
        .or_else(|| product.primary_image())
}
