//! Deck assembly: identity assignment and the deck object builder.

pub mod builder;
pub mod identity;

pub use builder::{DeckBuilder, DeckObject};
pub use identity::assign_identities;
