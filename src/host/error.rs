//! Host export errors.

use thiserror::Error;

/// Failure while converting a deck into the host format.
#[derive(Error, Debug)]
pub enum HostError {
    #[error("no face image URL supplied for sheet {sheet_index}")]
    MissingSheetFace { sheet_index: u32 },

    #[error("slot {slot_index} cannot be addressed by the host (max 99)")]
    SlotOutOfRange { slot_index: u32 },

    #[error("sheet capacity {capacity} does not fit a {columns}x{rows} grid")]
    GridTooSmall { capacity: u32, columns: u32, rows: u32 },

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
