//! Card outline shapes understood by the host.

use serde::{Deserialize, Serialize};

/// Card outline. Maps to the host's integer `Type` field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardShape {
    #[default]
    RoundedRectangle,
    Rectangle,
    RoundedHex,
    Hex,
    Circle,
}

impl CardShape {
    /// The host's `Type` value for this shape.
    #[must_use]
    pub const fn host_type(self) -> u8 {
        match self {
            Self::RoundedRectangle => 0,
            Self::Rectangle => 1,
            Self::RoundedHex => 2,
            Self::Hex => 3,
            Self::Circle => 4,
        }
    }
}
