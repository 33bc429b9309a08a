//! In-memory condition service
//!
//! Tracks active conditions per entity and counts their durations down.
//! Merging follows the usual status-effect rules: a higher level replaces
//! a lower one, an equal level keeps the longer remaining duration, and a
//! lower level never downgrades what is already active.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::core::types::EntityId;

use super::kind::{ConditionGrant, ConditionKind};
use super::service::ConditionService;

/// A condition currently held by an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveCondition {
    pub kind: ConditionKind,
    pub level: u8,
    pub remaining: u32,
    pub show_particles: bool,
    pub show_icon: bool,
}

impl From<ConditionGrant> for ActiveCondition {
    fn from(grant: ConditionGrant) -> Self {
        Self {
            kind: grant.kind,
            level: grant.level,
            remaining: grant.duration,
            show_particles: grant.show_particles,
            show_icon: grant.show_icon,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConditionTracker {
    active: AHashMap<EntityId, AHashMap<ConditionKind, ActiveCondition>>,
}

impl ConditionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, entity: EntityId, kind: ConditionKind) -> Option<&ActiveCondition> {
        self.active.get(&entity).and_then(|conditions| conditions.get(&kind))
    }

    /// Active conditions for an entity, sorted by kind
    pub fn conditions_of(&self, entity: EntityId) -> Vec<ActiveCondition> {
        let mut conditions: Vec<ActiveCondition> = self
            .active
            .get(&entity)
            .map(|c| c.values().copied().collect())
            .unwrap_or_default();
        conditions.sort_by_key(|c| c.kind);
        conditions
    }

    pub fn has_any(&self, entity: EntityId) -> bool {
        self.active.get(&entity).is_some_and(|c| !c.is_empty())
    }

    /// Count every duration down by `ticks`, dropping expired conditions
    ///
    /// Returns the kinds that expired per entity.
    pub fn advance(&mut self, ticks: u32) -> Vec<(EntityId, ConditionKind)> {
        let mut expired = Vec::new();
        for (entity, conditions) in self.active.iter_mut() {
            conditions.retain(|kind, condition| {
                condition.remaining = condition.remaining.saturating_sub(ticks);
                if condition.remaining == 0 {
                    expired.push((*entity, *kind));
                    false
                } else {
                    true
                }
            });
        }
        self.active.retain(|_, conditions| !conditions.is_empty());
        expired
    }
}

impl ConditionService for ConditionTracker {
    fn apply(&mut self, entity: EntityId, grant: ConditionGrant) {
        if grant.duration == 0 {
            return;
        }
        let conditions = self.active.entry(entity).or_default();
        match conditions.get_mut(&grant.kind) {
            None => {
                conditions.insert(grant.kind, grant.into());
            }
            Some(existing) if grant.level > existing.level => {
                *existing = grant.into();
            }
            Some(existing) if grant.level == existing.level => {
                existing.remaining = existing.remaining.max(grant.duration);
                existing.show_particles = grant.show_particles;
                existing.show_icon = grant.show_icon;
            }
            Some(_) => {}
        }
    }

    fn remove(&mut self, entity: EntityId, kind: ConditionKind) {
        if let Some(conditions) = self.active.get_mut(&entity) {
            conditions.remove(&kind);
            if conditions.is_empty() {
                self.active.remove(&entity);
            }
        }
    }

    fn query(&self, entity: EntityId, kind: ConditionKind) -> Option<u8> {
        self.get(entity, kind).map(|c| c.level)
    }
}
