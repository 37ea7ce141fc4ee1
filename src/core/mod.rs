//! Core types: identifiers, configuration, errors.
//!
//! Everything downstream (packing, identity assignment, deck building)
//! speaks in these types.

pub mod ids;
pub mod config;
pub mod error;

pub use ids::{AssetId, BackFace, CompositeId, SheetSlot};
pub use config::{
    DeckConfig, ZeroCountPolicy, DEFAULT_GRID_COLUMNS, DEFAULT_GRID_ROWS, RESERVED_SLOTS,
};
pub use error::{DeckError, Result};
