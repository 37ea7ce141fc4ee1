//! Identifier types shared by every stage of deck assembly.
//!
//! ## Composite IDs
//!
//! A unique asset is packed at a `SheetSlot`. The host locates a card face
//! by a single integer:
//!
//! ```text
//! composite = sheet_index * capacity + slot_index
//! ```
//!
//! ```
//! use tabletop_deck::core::{CompositeId, SheetSlot};
//!
//! let slot = SheetSlot::new(2, 5);
//! let id = CompositeId::from_slot(slot, 69);
//! assert_eq!(id.raw(), 2 * 69 + 5);
//! assert_eq!(id.to_slot(69), slot);
//! ```

use serde::{Deserialize, Serialize};

/// Opaque identifier naming one front-face image asset.
///
/// Equality is by identity. Two assets with different ids are different
/// cards even if their pixels match.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetId(String);

impl AssetId {
    /// Create a new asset ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if the identifier is the empty string.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for AssetId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for AssetId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for AssetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Packed location of one unique asset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SheetSlot {
    /// Sheet the asset lives on (dense, starting at 0).
    pub sheet_index: u32,

    /// Position within the sheet, in `[0, capacity)`.
    pub slot_index: u32,
}

impl SheetSlot {
    /// Create a new sheet slot.
    #[must_use]
    pub const fn new(sheet_index: u32, slot_index: u32) -> Self {
        Self {
            sheet_index,
            slot_index,
        }
    }
}

impl std::fmt::Display for SheetSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Sheet({}):{}", self.sheet_index, self.slot_index)
    }
}

/// Integer encoding of a `SheetSlot` under a fixed sheet capacity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompositeId(pub u64);

impl CompositeId {
    /// Encode a slot for the given sheet capacity.
    #[must_use]
    pub const fn from_slot(slot: SheetSlot, capacity: u32) -> Self {
        Self(slot.sheet_index as u64 * capacity as u64 + slot.slot_index as u64)
    }

    /// Decode back into a slot. `capacity` must be the one used to encode.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is 0. Use `checked_to_slot` for unvalidated input.
    #[must_use]
    pub const fn to_slot(self, capacity: u32) -> SheetSlot {
        let capacity = capacity as u64;
        SheetSlot {
            sheet_index: (self.0 / capacity) as u32,
            slot_index: (self.0 % capacity) as u32,
        }
    }

    /// Decode back into a slot, or `None` when `capacity` is 0.
    #[must_use]
    pub const fn checked_to_slot(self, capacity: u32) -> Option<SheetSlot> {
        if capacity == 0 {
            None
        } else {
            Some(self.to_slot(capacity))
        }
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for CompositeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Composite({})", self.0)
    }
}

/// The back image shared by every card in a deck.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BackFace(pub AssetId);

impl BackFace {
    /// Create a back face from any asset identifier.
    #[must_use]
    pub fn new(id: impl Into<AssetId>) -> Self {
        Self(id.into())
    }

    /// The asset used for the back.
    #[must_use]
    pub fn asset(&self) -> &AssetId {
        &self.0
    }
}

impl Default for BackFace {
    fn default() -> Self {
        Self::new("back")
    }
}
