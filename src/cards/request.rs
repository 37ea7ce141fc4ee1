//! Card requests - one line of a deck list.

use serde::{Deserialize, Serialize};

use crate::core::AssetId;

/// A request for `count` copies of one asset.
///
/// `position` is the request's 0-based index in the deck list and only
/// exists to keep the output in deck-list order.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardRequest {
    /// Front-face asset.
    pub asset_id: AssetId,

    /// Number of copies. Zero is allowed.
    pub count: u32,

    /// Index of this request in the deck list.
    pub position: usize,
}

impl CardRequest {
    /// Create a new request.
    #[must_use]
    pub fn new(asset_id: impl Into<AssetId>, count: u32, position: usize) -> Self {
        Self {
            asset_id: asset_id.into(),
            count,
            position,
        }
    }

    /// Build an ordered request list from `(asset, count)` pairs.
    ///
    /// ```
    /// use tabletop_deck::cards::CardRequest;
    ///
    /// let requests = CardRequest::sequence([("AntQueen", 2), ("LMR", 5)]);
    /// assert_eq!(requests[1].position, 1);
    /// assert_eq!(requests[1].count, 5);
    /// ```
    #[must_use]
    pub fn sequence<I, A>(pairs: I) -> Vec<Self>
    where
        I: IntoIterator<Item = (A, u32)>,
        A: Into<AssetId>,
    {
        pairs
            .into_iter()
            .enumerate()
            .map(|(position, (asset_id, count))| Self::new(asset_id, count, position))
            .collect()
    }
}
