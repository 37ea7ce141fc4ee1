//! Host export: turns a `DeckObject` into a Tabletop Simulator saved object.
//!
//! Writing the JSON to disk is left to the caller.

pub mod error;
pub mod save_state;
pub mod shape;

pub use error::HostError;
pub use save_state::{
    host_card_id, CustomDeck, HostExport, HostObject, SaveState, Transform, HOST_SLOTS_PER_SHEET,
};
pub use shape::CardShape;
