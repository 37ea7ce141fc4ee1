//! Card system: requests in, instances out.
//!
//! ## Key Types
//!
//! - `CardRequest`: One deck-list line (asset, count, position)
//! - `CardInstance`: One physical card, duplicates included

pub mod instance;
pub mod request;

pub use instance::CardInstance;
pub use request::CardRequest;
