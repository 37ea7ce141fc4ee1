//! Grid packer: assigns each unique asset a `SheetSlot`.
//!
//! ## Algorithm
//!
//! Unique assets are numbered `k = 0, 1, 2, ...` in first-seen order.
//! The k-th asset goes to:
//!
//! ```text
//! sheet_index = k / capacity
//! slot_index  = k % capacity
//! ```
//!
//! Sheets therefore fill in discovery order and every sheet except the
//! last is exactly full. Repeated ids keep their first slot.

use std::num::NonZeroU32;

use rustc_hash::FxHashMap;

use super::sheet::GridSheet;
use crate::core::{AssetId, CompositeId, DeckError, Result, SheetSlot};

/// Packs assets into sheets of a fixed capacity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridPacker {
    capacity: NonZeroU32,
}

impl GridPacker {
    /// Create a packer. Fails with `Configuration` if `capacity` is 0.
    pub fn new(capacity: u32) -> Result<Self> {
        NonZeroU32::new(capacity)
            .map(|capacity| Self { capacity })
            .ok_or(DeckError::Configuration { capacity })
    }

    /// Slots per sheet.
    #[must_use]
    pub fn capacity(&self) -> u32 {
        self.capacity.get()
    }

    /// Slot for the k-th unique asset.
    #[must_use]
    pub fn slot_for(&self, k: usize) -> SheetSlot {
        let capacity = self.capacity.get() as usize;
        SheetSlot::new((k / capacity) as u32, (k % capacity) as u32)
    }

    /// Pack assets in encounter order. Duplicates are ignored after their
    /// first appearance.
    ///
    /// ```
    /// use tabletop_deck::core::{AssetId, SheetSlot};
    /// use tabletop_deck::packing::GridPacker;
    ///
    /// let ids: Vec<AssetId> = ["A", "B", "A", "C"].into_iter().map(AssetId::new).collect();
    /// let plan = GridPacker::new(2).unwrap().pack(&ids);
    ///
    /// assert_eq!(plan.sheet_count(), 2);
    /// assert_eq!(plan.slot_of(&AssetId::new("C")), Some(SheetSlot::new(1, 0)));
    /// ```
    pub fn pack<'a, I>(&self, ids: I) -> PackingPlan
    where
        I: IntoIterator<Item = &'a AssetId>,
    {
        let mut plan = PackingPlan {
            capacity: self.capacity.get(),
            slots: FxHashMap::default(),
            order: Vec::new(),
        };

        for id in ids {
            if plan.slots.contains_key(id) {
                continue;
            }
            let slot = self.slot_for(plan.order.len());
            if slot.slot_index == 0 {
                log::debug!("opening sheet {} for asset `{}`", slot.sheet_index, id);
            }
            plan.slots.insert(id.clone(), slot);
            plan.order.push(id.clone());
        }

        plan
    }
}

/// Result of packing: every unique asset and its slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PackingPlan {
    capacity: u32,
    slots: FxHashMap<AssetId, SheetSlot>,
    order: Vec<AssetId>,
}

impl PackingPlan {
    /// Capacity the plan was packed with.
    #[must_use]
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Slot assigned to an asset.
    #[must_use]
    pub fn slot_of(&self, id: &AssetId) -> Option<SheetSlot> {
        self.slots.get(id).copied()
    }

    /// Composite ID of an asset's slot.
    #[must_use]
    pub fn composite_of(&self, id: &AssetId) -> Option<CompositeId> {
        self.slot_of(id)
            .map(|slot| CompositeId::from_slot(slot, self.capacity))
    }

    /// Unique assets in packing order.
    #[must_use]
    pub fn unique_assets(&self) -> &[AssetId] {
        &self.order
    }

    /// Number of sheets used.
    #[must_use]
    pub fn sheet_count(&self) -> usize {
        self.order.len().div_ceil(self.capacity as usize)
    }

    /// Materialize the sheets, each listing its assets in slot order.
    #[must_use]
    pub fn sheets(&self) -> Vec<GridSheet> {
        self.order
            .chunks(self.capacity as usize)
            .enumerate()
            .map(|(index, chunk)| GridSheet {
                sheet_index: index as u32,
                assets_in_order: chunk.to_vec(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(names: &[&str]) -> Vec<AssetId> {
        names.iter().map(|n| AssetId::new(*n)).collect()
    }

    #[test]
    fn test_zero_capacity_fails() {
        assert_eq!(
            GridPacker::new(0),
            Err(DeckError::Configuration { capacity: 0 })
        );
    }

    #[test]
    fn test_slot_for() {
        let packer = GridPacker::new(3).unwrap();

        assert_eq!(packer.slot_for(0), SheetSlot::new(0, 0));
        assert_eq!(packer.slot_for(2), SheetSlot::new(0, 2));
        assert_eq!(packer.slot_for(3), SheetSlot::new(1, 0));
        assert_eq!(packer.slot_for(7), SheetSlot::new(2, 1));
    }

    #[test]
    fn test_pack_empty() {
        let plan = GridPacker::new(10).unwrap().pack(&Vec::<AssetId>::new());

        assert_eq!(plan.sheet_count(), 0);
        assert!(plan.sheets().is_empty());
        assert!(plan.unique_assets().is_empty());
    }

    #[test]
    fn test_pack_wraps_sheets() {
        let plan = GridPacker::new(2).unwrap().pack(&ids(&["A", "B", "C"]));
        let sheets = plan.sheets();

        assert_eq!(sheets.len(), 2);
        assert_eq!(sheets[0].assets_in_order, ids(&["A", "B"]));
        assert_eq!(sheets[1].assets_in_order, ids(&["C"]));
        assert_eq!(sheets[1].sheet_index, 1);
    }

    #[test]
    fn test_pack_dedups_first_seen() {
        let plan = GridPacker::new(5).unwrap().pack(&ids(&["X", "Y", "X", "Z", "Y"]));

        assert_eq!(plan.unique_assets(), ids(&["X", "Y", "Z"]).as_slice());
        assert_eq!(plan.slot_of(&AssetId::new("X")), Some(SheetSlot::new(0, 0)));
        assert_eq!(plan.slot_of(&AssetId::new("Z")), Some(SheetSlot::new(0, 2)));
        assert_eq!(plan.slot_of(&AssetId::new("W")), None);
    }

    #[test]
    fn test_exactly_full_sheet() {
        let plan = GridPacker::new(3).unwrap().pack(&ids(&["A", "B", "C"]));

        assert_eq!(plan.sheet_count(), 1);
        assert_eq!(plan.sheets()[0].len(), 3);
    }

    #[test]
    fn test_composite_of() {
        let plan = GridPacker::new(2).unwrap().pack(&ids(&["A", "B", "C"]));

        assert_eq!(plan.composite_of(&AssetId::new("A")), Some(CompositeId(0)));
        assert_eq!(plan.composite_of(&AssetId::new("C")), Some(CompositeId(2)));
    }

    #[test]
    fn test_sheet_asset_at() {
        let plan = GridPacker::new(4).unwrap().pack(&ids(&["A", "B"]));
        let sheet = &plan.sheets()[0];

        assert_eq!(sheet.asset_at(1), Some(&AssetId::new("B")));
        assert_eq!(sheet.asset_at(2), None);
    }
}
