//! # tabletop-deck
//!
//! Turns a deck list into a tabletop simulator deck object.
//!
//! ## Pipeline
//!
//! Data flows one way:
//!
//! ```text
//! AssetRegistry -> GridPacker -> assign_identities -> DeckBuilder -> DeckObject
//! ```
//!
//! 1. **Asset registry**: which front-face images exist. Read-only input.
//! 2. **Grid packer**: each unique asset gets a `(sheet, slot)` in first-seen
//!    order; a new sheet opens once the current one holds `capacity` assets.
//! 3. **Identity assignment**: every requested copy becomes a `CardInstance`
//!    whose composite ID is `sheet * capacity + slot`.
//! 4. **Deck builder**: sheets, cards in deck-list order, one shared back face.
//!
//! Everything is pure and synchronous. Independent builds share no state
//! and can run on separate threads freely.
//!
//! ## Modules
//!
//! - `core`: Identifiers, configuration, errors
//! - `assets`: Asset registry and resolver trait
//! - `cards`: Card requests and instances
//! - `packing`: Grid packer and sheets
//! - `deck`: Identity assignment and deck building
//! - `decklist`: Plain-text deck-list parser
//! - `host`: Tabletop Simulator saved-object export

pub mod core;
pub mod assets;
pub mod cards;
pub mod packing;
pub mod deck;
pub mod decklist;
pub mod host;

// Re-export commonly used types
pub use crate::core::{
    AssetId, BackFace, CompositeId, SheetSlot,
    DeckConfig, ZeroCountPolicy,
    DeckError, Result,
};

pub use crate::assets::{AssetInfo, AssetRegistry, AssetResolver, Dimensions};

pub use crate::cards::{CardInstance, CardRequest};

pub use crate::packing::{GridPacker, GridSheet, PackingPlan};

pub use crate::deck::{assign_identities, DeckBuilder, DeckObject};

pub use crate::decklist::{parse_deck_file, parse_deck_list, ParseError};

pub use crate::host::{CardShape, HostError, HostExport, SaveState};
