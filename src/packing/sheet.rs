//! Grid sheets - one fixed-capacity image grid.

use serde::{Deserialize, Serialize};

use crate::core::AssetId;

/// A packed sheet. `assets_in_order[i]` sits at slot `i`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridSheet {
    pub sheet_index: u32,
    pub assets_in_order: Vec<AssetId>,
}

impl GridSheet {
    /// Create an empty sheet.
    #[must_use]
    pub fn new(sheet_index: u32) -> Self {
        Self {
            sheet_index,
            assets_in_order: Vec::new(),
        }
    }

    /// Number of occupied slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.assets_in_order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assets_in_order.is_empty()
    }

    /// Asset at a slot, if occupied.
    #[must_use]
    pub fn asset_at(&self, slot_index: u32) -> Option<&AssetId> {
        self.assets_in_order.get(slot_index as usize)
    }
}
