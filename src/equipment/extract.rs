//! Trim extraction from an equipment snapshot
//!
//! One optional tag per slot, in slot order. Empty slots and items without
//! trim data both come back as `None`.

use serde::{Deserialize, Serialize};

use super::trim::TrimTag;

/// Wearable armor slots in host iteration order (feet first)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArmorSlot {
    Feet,
    Legs,
    Chest,
    Head,
}

impl ArmorSlot {
    pub const ALL: [ArmorSlot; 4] = [
        ArmorSlot::Feet,
        ArmorSlot::Legs,
        ArmorSlot::Chest,
        ArmorSlot::Head,
    ];
}

/// Items currently worn, one entry per slot, read fresh every tick
#[derive(Debug, Clone, PartialEq)]
pub struct EquipmentSnapshot<I> {
    slots: Vec<Option<I>>,
}

impl<I> EquipmentSnapshot<I> {
    pub fn new(slots: Vec<Option<I>>) -> Self {
        Self { slots }
    }

    /// Snapshot with every armor slot empty
    pub fn empty_armor() -> Self {
        Self {
            slots: ArmorSlot::ALL.iter().map(|_| None).collect(),
        }
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn slots(&self) -> &[Option<I>] {
        &self.slots
    }

    pub fn get(&self, index: usize) -> Option<&I> {
        self.slots.get(index).and_then(|slot| slot.as_ref())
    }
}

impl<I> FromIterator<Option<I>> for EquipmentSnapshot<I> {
    fn from_iter<T: IntoIterator<Item = Option<I>>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Item registry lookup for trim data
pub trait TrimRegistry<I: ?Sized> {
    /// Trim material attached to the item, if any
    fn trim_tag(&self, item: &I) -> Option<TrimTag>;
}

/// Registry for hosts whose item handles carry their trim inline
#[derive(Debug, Clone, Copy, Default)]
pub struct InlineTrims;

impl TrimRegistry<Option<TrimTag>> for InlineTrims {
    fn trim_tag(&self, item: &Option<TrimTag>) -> Option<TrimTag> {
        item.clone()
    }
}

impl TrimRegistry<TrimTag> for InlineTrims {
    fn trim_tag(&self, item: &TrimTag) -> Option<TrimTag> {
        Some(item.clone())
    }
}

/// Extract the per-slot trim tags, preserving slot order
pub fn extract<I, R>(registry: &R, snapshot: &EquipmentSnapshot<I>) -> Vec<Option<TrimTag>>
where
    R: TrimRegistry<I> + ?Sized,
{
    snapshot
        .slots()
        .iter()
        .map(|slot| slot.as_ref().and_then(|item| registry.trim_tag(item)))
        .collect()
}
