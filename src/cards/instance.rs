//! Card instances - one physical card in the output deck.
//!
//! Duplicates are separate instances. Every copy of an asset shares the
//! asset's `SheetSlot` and therefore its `CompositeId`.

use serde::{Deserialize, Serialize};

use crate::core::{AssetId, CompositeId, SheetSlot};

/// A single card in the assembled deck.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardInstance {
    /// Index of this card within the deck.
    pub instance_index: usize,

    /// Front-face asset.
    pub asset_id: AssetId,

    /// Where the asset is packed.
    pub sheet_slot: SheetSlot,

    /// Host-facing identifier for `sheet_slot`.
    pub composite_id: CompositeId,

    /// Position of the request this copy came from.
    pub request_position: usize,
}

impl CardInstance {
    /// Create a card instance, computing its composite ID.
    #[must_use]
    pub fn new(
        instance_index: usize,
        asset_id: AssetId,
        sheet_slot: SheetSlot,
        capacity: u32,
        request_position: usize,
    ) -> Self {
        Self {
            instance_index,
            asset_id,
            sheet_slot,
            composite_id: CompositeId::from_slot(sheet_slot, capacity),
            request_position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_instance_new() {
        let instance = CardInstance::new(4, AssetId::new("LMR"), SheetSlot::new(1, 2), 69, 1);

        assert_eq!(instance.instance_index, 4);
        assert_eq!(instance.asset_id, AssetId::new("LMR"));
        assert_eq!(instance.composite_id, CompositeId(71));
        assert_eq!(instance.request_position, 1);
    }

    #[test]
    fn test_card_instance_serialization() {
        let instance = CardInstance::new(0, AssetId::new("X"), SheetSlot::new(0, 0), 5, 0);

        let json = serde_json::to_string(&instance).unwrap();
        let deserialized: CardInstance = serde_json::from_str(&json).unwrap();

        assert_eq!(instance, deserialized);
    }
}
