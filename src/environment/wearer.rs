//! Read access to the entity wearing the armor

use serde::{Deserialize, Serialize};

use crate::core::types::{BlockPos, EntityId};
use crate::equipment::EquipmentSnapshot;

/// Player experience state
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    /// Progress toward the next level (0.0 to 1.0)
    pub progress: f32,
    /// Points needed to go from the current level to the next
    pub next_level_points: u32,
}

/// Entity state read by the category policies
///
/// Everything here is owned by the entity itself and cannot fail to read;
/// world-level queries live on [`WorldView`](super::WorldView).
pub trait WearerView {
    fn id(&self) -> EntityId;

    /// Removed or unloaded entities are skipped for the tick
    fn is_removed(&self) -> bool {
        false
    }

    fn is_player(&self) -> bool;

    fn block_pos(&self) -> BlockPos;

    fn block_y(&self) -> i32 {
        self.block_pos().y
    }

    fn health(&self) -> f32;
    fn max_health(&self) -> f32;

    fn is_on_fire(&self) -> bool;
    fn is_in_lava(&self) -> bool;
    fn is_sprinting(&self) -> bool;

    /// Ticks left on the damage flash; positive right after being hurt
    fn hurt_time(&self) -> u32;

    fn air(&self) -> i32;
    fn max_air(&self) -> i32;

    /// Experience state, `None` for non-players
    fn experience(&self) -> Option<Experience>;
}

/// Entities that expose their worn equipment
pub trait Equipped {
    type Item;

    fn equipment(&self) -> EquipmentSnapshot<Self::Item>;
}
