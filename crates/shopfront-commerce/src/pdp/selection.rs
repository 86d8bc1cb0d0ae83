//! Variation selection state.

use crate::catalog::VariationValue;
use crate::ids::VariationValueId;
use std::collections::BTreeMap;

/// The set of variation values the shopper has picked on a detail page.
///
/// At most one value per variation axis. Selecting a value on an axis
/// that already has one replaces it; there is no deselect, so once an
/// axis is set it stays set until the page state is discarded. Entries
/// iterate in axis-name order, so every derived value is a pure function
/// of the map contents regardless of click order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VariationSelection {
    chosen: BTreeMap<String, VariationValue>,
}

impl VariationSelection {
    /// Create an empty selection (all axes unset).
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a value on an axis, replacing any previous choice.
    ///
    /// Returns the value that was replaced, if the axis was already set.
    pub fn select(
        &mut self,
        variation: impl Into<String>,
        value: VariationValue,
    ) -> Option<VariationValue> {
        self.chosen.insert(variation.into(), value)
    }

    /// The value currently selected on an axis, if any.
    pub fn selected(&self, variation: &str) -> Option<&VariationValue> {
        self.chosen.get(variation)
    }

    /// Check whether a specific value is the current choice on an axis.
    pub fn is_selected(&self, variation: &str, value_id: VariationValueId) -> bool {
        self.selected(variation).is_some_and(|v| v.id == value_id)
    }

    /// Iterate over the selected values in axis-name order.
    pub fn values(&self) -> impl Iterator<Item = &VariationValue> {
        self.chosen.values()
    }

    /// Iterate over `(axis, value)` entries in axis-name order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &VariationValue)> {
        self.chosen.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// IDs of all selected values, in axis-name order.
    ///
    /// This is the shape the cart-add endpoint expects.
    pub fn value_ids(&self) -> Vec<VariationValueId> {
        self.chosen.values().map(|v| v.id).collect()
    }

    /// Number of axes with a selection.
    pub fn len(&self) -> usize {
        self.chosen.len()
    }

    /// Check if no axis has a selection yet.
    pub fn is_empty(&self) -> bool {
        self.chosen.is_empty()
    }
}
