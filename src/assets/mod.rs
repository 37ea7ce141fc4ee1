//! Asset registry: the read-only source of front-face images.
//!
//! Deck building never loads images. It only needs to know which asset
//! identifiers exist, which the external resolver supplies up front.

pub mod registry;

pub use registry::{AssetInfo, AssetRegistry, AssetResolver, Dimensions};
