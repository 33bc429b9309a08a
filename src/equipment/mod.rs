//! Equipped items and their trim tags

pub mod extract;
pub mod trim;

pub use extract::{extract, ArmorSlot, EquipmentSnapshot, InlineTrims, TrimRegistry};
pub use trim::{TrimCategory, TrimTag};
