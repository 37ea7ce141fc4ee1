//! Grid packing: unique assets onto fixed-capacity sheets.

pub mod packer;
pub mod sheet;

pub use packer::{GridPacker, PackingPlan};
pub use sheet::GridSheet;
