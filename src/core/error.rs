//! Error types for deck assembly.
//!
//! A build either returns a complete `DeckObject` or exactly one of these
//! errors. Nothing partial is ever handed back.

use thiserror::Error;

use super::ids::AssetId;

/// Failure raised while assembling a deck.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeckError {
    /// Sheet capacity is not a positive slot count.
    #[error("invalid sheet capacity {capacity}: a sheet needs at least one slot")]
    Configuration { capacity: u32 },

    /// A request names an asset the registry does not know.
    #[error("card request at position {position} references unknown asset `{asset_id}`")]
    UnresolvedAsset { asset_id: AssetId, position: usize },

    /// The deck came out empty while empty decks are disallowed.
    #[error("deck contains no cards and empty decks are disallowed")]
    EmptyDeck,
}

/// Result type alias for deck assembly.
pub type Result<T> = std::result::Result<T, DeckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_context() {
        let err = DeckError::Configuration { capacity: 0 };
        assert!(err.to_string().contains("capacity 0"));

        let err = DeckError::UnresolvedAsset {
            asset_id: AssetId::new("Missing"),
            position: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains("`Missing`"));
        assert!(msg.contains("position 3"));
    }
}
