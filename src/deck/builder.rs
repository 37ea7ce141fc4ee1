//! Deck object builder.
//!
//! `DeckBuilder` runs the whole pipeline for one deck:
//!
//! 1. Validate the configuration (`Configuration`)
//! 2. Resolve every requested asset (`UnresolvedAsset`)
//! 3. Pack unique assets onto sheets
//! 4. Expand requests into card instances
//! 5. Apply the empty-deck policy (`EmptyDeck`)
//!
//! All checks happen before a `DeckObject` exists, so a build either
//! returns a complete deck or a single error.
//!
//! ## Example
//!
//! ```
//! use tabletop_deck::assets::AssetRegistry;
//! use tabletop_deck::cards::CardRequest;
//! use tabletop_deck::core::{AssetId, DeckConfig};
//! use tabletop_deck::deck::DeckBuilder;
//!
//! let registry: AssetRegistry = ["AntQueen", "LMR"].into_iter().map(AssetId::new).collect();
//! let requests = CardRequest::sequence([("AntQueen", 2), ("LMR", 5)]);
//!
//! let deck = DeckBuilder::new(DeckConfig::new(69), &registry)
//!     .build(&requests)
//!     .unwrap();
//!
//! assert_eq!(deck.sheets.len(), 1);
//! assert_eq!(deck.cards.len(), 7);
//! ```

use serde::{Deserialize, Serialize};

use super::identity::assign_identities;
use crate::assets::AssetResolver;
use crate::cards::{CardInstance, CardRequest};
use crate::core::{AssetId, BackFace, DeckConfig, DeckError, Result, ZeroCountPolicy};
use crate::packing::{GridPacker, GridSheet};

/// The assembled deck: sheets, cards in deck-list order, and one back face.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckObject {
    /// Sheet slot count used to encode composite IDs.
    pub capacity: u32,

    /// Packed sheets, `sheets[i].sheet_index == i`.
    pub sheets: Vec<GridSheet>,

    /// Every physical card, duplicates included.
    pub cards: Vec<CardInstance>,

    /// Back image shared by every card.
    pub back_face: BackFace,
}

impl DeckObject {
    /// Check if the deck has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of copies of an asset in the deck.
    #[must_use]
    pub fn count_of(&self, asset_id: &AssetId) -> usize {
        self.cards.iter().filter(|c| &c.asset_id == asset_id).count()
    }

    /// Sheet by index.
    #[must_use]
    pub fn sheet(&self, sheet_index: u32) -> Option<&GridSheet> {
        self.sheets.get(sheet_index as usize)
    }
}

/// Builds `DeckObject`s against an asset source.
pub struct DeckBuilder<'r, R: AssetResolver + ?Sized> {
    config: DeckConfig,
    resolver: &'r R,
}

impl<'r, R: AssetResolver + ?Sized> DeckBuilder<'r, R> {
    /// Create a builder.
    pub fn new(config: DeckConfig, resolver: &'r R) -> Self {
        Self { config, resolver }
    }

    /// The builder's configuration.
    #[must_use]
    pub fn config(&self) -> &DeckConfig {
        &self.config
    }

    /// Assemble a deck from requests.
    ///
    /// # Errors
    ///
    /// - `Configuration` if the capacity is 0.
    /// - `UnresolvedAsset` for the first request whose asset is empty or
    ///   unknown, zero-count requests included.
    /// - `EmptyDeck` if `fail_on_empty` is set and the deck has no cards.
    ///   This covers an empty request list and also a list whose requests
    ///   all have count 0.
    pub fn build(&self, requests: &[CardRequest]) -> Result<DeckObject> {
        let packer = GridPacker::new(self.config.capacity)?;
        self.resolve_all(requests)?;

        let packed = requests.iter().filter(|request| {
            if request.count > 0 {
                return true;
            }
            match self.config.zero_count {
                ZeroCountPolicy::ReserveSlot => true,
                ZeroCountPolicy::Skip => {
                    log::warn!(
                        "dropping zero-count request for `{}` at position {}",
                        request.asset_id,
                        request.position
                    );
                    false
                }
            }
        });
        let plan = packer.pack(packed.map(|request| &request.asset_id));
        let cards = assign_identities(requests, &plan)?;

        if cards.is_empty() && self.config.fail_on_empty {
            return Err(DeckError::EmptyDeck);
        }

        let sheets = plan.sheets();
        log::info!(
            "assembled deck: {} cards, {} unique assets on {} sheet(s)",
            cards.len(),
            plan.unique_assets().len(),
            sheets.len()
        );

        Ok(DeckObject {
            capacity: plan.capacity(),
            sheets,
            cards,
            back_face: self.config.back_face.clone(),
        })
    }

    fn resolve_all(&self, requests: &[CardRequest]) -> Result<()> {
        match requests
            .iter()
            .find(|request| request.asset_id.is_empty() || !self.resolver.contains(&request.asset_id))
        {
            Some(request) => Err(DeckError::UnresolvedAsset {
                asset_id: request.asset_id.clone(),
                position: request.position,
            }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::AssetRegistry;
    use crate::core::CompositeId;

    fn registry(names: &[&str]) -> AssetRegistry {
        names.iter().map(|n| AssetId::new(*n)).collect()
    }

    #[test]
    fn test_single_card_deck() {
        let registry = registry(&["X"]);
        let deck = DeckBuilder::new(DeckConfig::new(5), &registry)
            .build(&CardRequest::sequence([("X", 1)]))
            .unwrap();

        assert_eq!(deck.sheets.len(), 1);
        assert_eq!(deck.cards.len(), 1);
        assert_eq!(deck.cards[0].composite_id, CompositeId(0));
        assert_eq!(deck.capacity, 5);
    }

    #[test]
    fn test_back_face_from_config() {
        let registry = registry(&["X"]);
        let config = DeckConfig::new(5).with_back_face(BackFace::new("blood.png"));
        let deck = DeckBuilder::new(config, &registry)
            .build(&CardRequest::sequence([("X", 2)]))
            .unwrap();

        assert_eq!(deck.back_face, BackFace::new("blood.png"));
    }

    #[test]
    fn test_configuration_checked_first() {
        let registry = registry(&[]);
        let err = DeckBuilder::new(DeckConfig::new(0), &registry)
            .build(&CardRequest::sequence([("Missing", 1)]))
            .unwrap_err();

        assert_eq!(err, DeckError::Configuration { capacity: 0 });
    }

    #[test]
    fn test_unresolved_reported_before_empty() {
        // Zero-count only deck with a missing asset: resolution wins
        let registry = registry(&[]);
        let config = DeckConfig::new(3).with_fail_on_empty(true);
        let err = DeckBuilder::new(config, &registry)
            .build(&CardRequest::sequence([("Missing", 0)]))
            .unwrap_err();

        assert!(matches!(err, DeckError::UnresolvedAsset { position: 0, .. }));
    }

    #[test]
    fn test_empty_asset_id_unresolved() {
        let registry = registry(&[""]);
        let err = DeckBuilder::new(DeckConfig::default(), &registry)
            .build(&[CardRequest::new("", 1, 0)])
            .unwrap_err();

        assert!(matches!(err, DeckError::UnresolvedAsset { .. }));
    }

    #[test]
    fn test_zero_count_only_is_empty() {
        let registry = registry(&["A"]);
        let requests = CardRequest::sequence([("A", 0)]);

        let deck = DeckBuilder::new(DeckConfig::new(3), &registry)
            .build(&requests)
            .unwrap();
        assert!(deck.is_empty());
        assert_eq!(deck.sheets.len(), 1);

        let err = DeckBuilder::new(DeckConfig::new(3).with_fail_on_empty(true), &registry)
            .build(&requests)
            .unwrap_err();
        assert_eq!(err, DeckError::EmptyDeck);
    }

    #[test]
    fn test_count_of_and_sheet_lookup() {
        let registry = registry(&["A", "B"]);
        let deck = DeckBuilder::new(DeckConfig::new(1), &registry)
            .build(&CardRequest::sequence([("A", 2), ("B", 3), ("A", 1)]))
            .unwrap();

        assert_eq!(deck.count_of(&AssetId::new("A")), 3);
        assert_eq!(deck.count_of(&AssetId::new("B")), 3);
        assert_eq!(deck.sheet(1).map(|s| s.assets_in_order.clone()), Some(vec![AssetId::new("B")]));
        assert!(deck.sheet(2).is_none());
    }

    #[test]
    fn test_dyn_resolver() {
        let registry = registry(&["A"]);
        let resolver: &dyn AssetResolver = &registry;
        let deck = DeckBuilder::new(DeckConfig::default(), resolver)
            .build(&CardRequest::sequence([("A", 1)]))
            .unwrap();

        assert_eq!(deck.cards.len(), 1);
    }
}
