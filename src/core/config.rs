//! Deck assembly configuration.
//!
//! Callers configure a build with `DeckConfig`:
//! - `capacity`: slots per sheet (the host's grid size minus reserved slots)
//! - `back_face`: the image shared by every card's back
//! - `fail_on_empty`: reject decks that end up with no cards
//! - `zero_count`: whether zero-count requests still occupy a slot

use serde::{Deserialize, Serialize};

use super::error::{DeckError, Result};
use super::ids::BackFace;

/// Default grid width used by the host for a custom deck sheet.
pub const DEFAULT_GRID_COLUMNS: u32 = 10;

/// Default grid height used by the host for a custom deck sheet.
pub const DEFAULT_GRID_ROWS: u32 = 7;

/// Slots the host keeps for itself on every sheet (the hidden-card image).
pub const RESERVED_SLOTS: u32 = 1;

/// What to do with a request whose count is zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZeroCountPolicy {
    /// Pack the asset anyway if this is its first occurrence.
    #[default]
    ReserveSlot,
    /// Drop the request before packing.
    Skip,
}

/// Configuration for one deck build.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckConfig {
    /// Maximum unique assets per sheet. Must be at least 1.
    pub capacity: u32,

    /// Back image shared by every card.
    pub back_face: BackFace,

    /// Fail with `EmptyDeck` instead of returning a deck with no cards.
    pub fail_on_empty: bool,

    /// Zero-count request handling.
    #[serde(default)]
    pub zero_count: ZeroCountPolicy,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_GRID_COLUMNS * DEFAULT_GRID_ROWS - RESERVED_SLOTS,
            back_face: BackFace::default(),
            fail_on_empty: false,
            zero_count: ZeroCountPolicy::ReserveSlot,
        }
    }
}

impl DeckConfig {
    /// Create a config with the given capacity and defaults elsewhere.
    #[must_use]
    pub fn new(capacity: u32) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }

    /// Derive capacity from a `columns x rows` grid, keeping the reserved slot free.
    ///
    /// ```
    /// use tabletop_deck::core::DeckConfig;
    ///
    /// assert_eq!(DeckConfig::for_grid(10, 7).capacity, 69);
    /// assert_eq!(DeckConfig::for_grid(2, 2).capacity, 3);
    /// ```
    #[must_use]
    pub fn for_grid(columns: u32, rows: u32) -> Self {
        Self::new(columns.saturating_mul(rows).saturating_sub(RESERVED_SLOTS))
    }

    /// Set the capacity.
    #[must_use]
    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = capacity;
        self
    }

    /// Set the shared back face.
    #[must_use]
    pub fn with_back_face(mut self, back_face: BackFace) -> Self {
        self.back_face = back_face;
        self
    }

    /// Set the empty-deck policy.
    #[must_use]
    pub fn with_fail_on_empty(mut self, fail: bool) -> Self {
        self.fail_on_empty = fail;
        self
    }

    /// Set the zero-count policy.
    #[must_use]
    pub fn with_zero_count(mut self, policy: ZeroCountPolicy) -> Self {
        self.zero_count = policy;
        self
    }

    /// Check the configuration before any work is done.
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(DeckError::Configuration {
                capacity: self.capacity,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DeckConfig::default();
        assert_eq!(config.capacity, 69);
        assert!(!config.fail_on_empty);
        assert_eq!(config.zero_count, ZeroCountPolicy::ReserveSlot);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = DeckConfig::new(10)
            .with_back_face(BackFace::new("blood.png"))
            .with_fail_on_empty(true)
            .with_zero_count(ZeroCountPolicy::Skip);

        assert_eq!(config.capacity, 10);
        assert_eq!(config.back_face.asset().as_str(), "blood.png");
        assert!(config.fail_on_empty);
        assert_eq!(config.zero_count, ZeroCountPolicy::Skip);
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let config = DeckConfig::default().with_capacity(0);
        assert_eq!(
            config.validate(),
            Err(DeckError::Configuration { capacity: 0 })
        );
    }

    #[test]
    fn test_degenerate_grid() {
        assert_eq!(DeckConfig::for_grid(1, 1).capacity, 0);
        assert!(DeckConfig::for_grid(0, 7).validate().is_err());
    }

    #[test]
    fn test_serialization() {
        let config = DeckConfig::new(12).with_fail_on_empty(true);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: DeckConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_zero_count_defaults_when_absent() {
        let json = r#"{"capacity":5,"back_face":"b","fail_on_empty":false}"#;
        let config: DeckConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.zero_count, ZeroCountPolicy::ReserveSlot);
        assert_eq!(config.back_face, BackFace::new("b"));
    }
}
