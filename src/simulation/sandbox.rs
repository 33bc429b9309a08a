//! In-memory host used by the `trim_sim` binary and the test suites
//!
//! Plain structs with public fields stand in for the host's entity, world
//! and condition service.

use serde::{Deserialize, Serialize};

use crate::conditions::{ConditionGrant, ConditionKind, ConditionService, ConditionTracker};
use crate::core::types::{BlockKind, BlockPos, Dimension, EntityClass, EntityId};
use crate::environment::{EnvResult, EnvironmentError, Equipped, Experience, WearerView, WorldView};
use crate::equipment::{ArmorSlot, EquipmentSnapshot, TrimTag};

use super::dispatch::WearerActions;

pub const PLAYER_MAX_AIR: i32 = 300;

/// Scriptable wearer; every armor slot holds an optional trim material
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SandboxWearer {
    pub id: EntityId,
    pub removed: bool,
    pub is_player: bool,
    pub position: BlockPos,
    pub health: f32,
    pub max_health: f32,
    pub on_fire: bool,
    pub in_lava: bool,
    pub sprinting: bool,
    pub hurt_time: u32,
    pub air: i32,
    pub max_air: i32,
    pub experience: Option<Experience>,
    pub armor: Vec<Option<TrimTag>>,
}

impl Default for SandboxWearer {
    fn default() -> Self {
        Self {
            id: EntityId::new(),
            removed: false,
            is_player: true,
            position: BlockPos::new(0, 64, 0),
            health: 20.0,
            max_health: 20.0,
            on_fire: false,
            in_lava: false,
            sprinting: false,
            hurt_time: 0,
            air: PLAYER_MAX_AIR,
            max_air: PLAYER_MAX_AIR,
            experience: Some(Experience {
                progress: 0.0,
                next_level_points: 7,
            }),
            armor: vec![None; ArmorSlot::ALL.len()],
        }
    }
}

impl SandboxWearer {
    pub fn at(position: BlockPos) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Full armor set trimmed with one material
    pub fn wearing(material: &str) -> Self {
        Self {
            armor: vec![Some(TrimTag::new(material)); ArmorSlot::ALL.len()],
            ..Default::default()
        }
    }

    /// One entry per slot; `None` is an empty or untrimmed slot
    pub fn with_armor(armor: &[Option<&str>]) -> Self {
        Self {
            armor: armor.iter().map(|m| m.map(TrimTag::new)).collect(),
            ..Default::default()
        }
    }

    pub fn placed(mut self, position: BlockPos) -> Self {
        self.position = position;
        self
    }

    pub fn heal(&mut self, amount: f32) {
        self.health = (self.health + amount).min(self.max_health);
    }
}

impl WearerView for SandboxWearer {
    fn id(&self) -> EntityId {
        self.id
    }

    fn is_removed(&self) -> bool {
        self.removed
    }

    fn is_player(&self) -> bool {
        self.is_player
    }

    fn block_pos(&self) -> BlockPos {
        self.position
    }

    fn health(&self) -> f32 {
        self.health
    }

    fn max_health(&self) -> f32 {
        self.max_health
    }

    fn is_on_fire(&self) -> bool {
        self.on_fire
    }

    fn is_in_lava(&self) -> bool {
        self.in_lava
    }

    fn is_sprinting(&self) -> bool {
        self.sprinting
    }

    fn hurt_time(&self) -> u32 {
        self.hurt_time
    }

    fn air(&self) -> i32 {
        self.air
    }

    fn max_air(&self) -> i32 {
        self.max_air
    }

    fn experience(&self) -> Option<Experience> {
        if self.is_player {
            self.experience
        } else {
            None
        }
    }
}

impl Equipped for SandboxWearer {
    type Item = TrimTag;

    fn equipment(&self) -> EquipmentSnapshot<TrimTag> {
        self.armor.iter().cloned().collect()
    }
}

/// Scriptable world state around the wearers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SandboxWorld {
    /// `false` makes every query fail
    pub available: bool,
    pub dimension: Dimension,
    /// `None` simulates an unloaded chunk for light reads
    pub light: Option<u8>,
    pub thundering: bool,
    pub beacon: Option<BlockPos>,
    pub hostiles: Vec<BlockPos>,
    pub traders: Vec<BlockPos>,
}

impl Default for SandboxWorld {
    fn default() -> Self {
        Self {
            available: true,
            dimension: Dimension::Overworld,
            light: Some(15),
            thundering: false,
            beacon: None,
            hostiles: Vec::new(),
            traders: Vec::new(),
        }
    }
}

impl SandboxWorld {
    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Default::default()
        }
    }

    fn check(&self) -> EnvResult<()> {
        if self.available {
            Ok(())
        } else {
            Err(EnvironmentError::WorldUnavailable)
        }
    }
}

impl WorldView for SandboxWorld {
    fn dimension(&self) -> EnvResult<Dimension> {
        self.check()?;
        Ok(self.dimension)
    }

    fn light_level(&self, pos: BlockPos) -> EnvResult<u8> {
        self.check()?;
        self.light.ok_or(EnvironmentError::ChunkNotLoaded(pos))
    }

    fn is_thundering(&self) -> EnvResult<bool> {
        self.check()?;
        Ok(self.thundering)
    }

    fn count_nearby(&self, origin: BlockPos, class: EntityClass, radius: f64) -> EnvResult<usize> {
        self.check()?;
        let positions = match class {
            EntityClass::HostileFaction => &self.hostiles,
            EntityClass::TradeFaction => &self.traders,
        };
        Ok(positions.iter().filter(|p| origin.distance(p) <= radius).count())
    }

    fn has_block_within(&self, origin: BlockPos, kind: BlockKind, radius: i32) -> EnvResult<bool> {
        self.check()?;
        match kind {
            BlockKind::Beacon => Ok(self
                .beacon
                .is_some_and(|beacon| origin.chebyshev_distance(&beacon) <= radius)),
        }
    }
}

/// Condition service plus a record of the other host mutations
#[derive(Debug, Clone, Default)]
pub struct SandboxHost {
    pub conditions: ConditionTracker,
    pub healed: f32,
    pub experience_gained: u32,
    pub calm_requests: usize,
}

impl SandboxHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move recorded heals onto the wearer and reset the record
    pub fn settle(&mut self, wearer: &mut SandboxWearer) {
        if self.healed > 0.0 {
            wearer.heal(self.healed);
            self.healed = 0.0;
        }
    }
}

impl ConditionService for SandboxHost {
    fn apply(&mut self, entity: EntityId, grant: ConditionGrant) {
        self.conditions.apply(entity, grant);
    }

    fn remove(&mut self, entity: EntityId, kind: ConditionKind) {
        self.conditions.remove(entity, kind);
    }

    fn query(&self, entity: EntityId, kind: ConditionKind) -> Option<u8> {
        self.conditions.query(entity, kind)
    }
}

impl WearerActions for SandboxHost {
    fn heal(&mut self, _entity: EntityId, amount: f32) {
        self.healed += amount;
    }

    fn add_experience(&mut self, _entity: EntityId, points: u32) {
        self.experience_gained += points;
    }

    fn calm_hostiles(&mut self, _entity: EntityId, _radius: f64) -> usize {
        self.calm_requests += 1;
        1
    }
}
