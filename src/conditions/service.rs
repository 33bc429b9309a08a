//! Condition service seam
//!
//! The host owns condition state (levels, remaining durations). The engine
//! only asks it to apply, remove and report.

use crate::core::types::EntityId;

use super::kind::{ConditionEffect, ConditionGrant, ConditionKind};

pub trait ConditionService {
    /// Grant or refresh a condition; re-applying the same grant only
    /// refreshes its duration
    fn apply(&mut self, entity: EntityId, grant: ConditionGrant);

    /// Remove a condition; a no-op when it is not present
    fn remove(&mut self, entity: EntityId, kind: ConditionKind);

    /// Current level of a condition, `None` when absent
    fn query(&self, entity: EntityId, kind: ConditionKind) -> Option<u8>;

    /// Route a single condition effect
    fn execute(&mut self, entity: EntityId, effect: ConditionEffect) {
        match effect {
            ConditionEffect::Apply(grant) => self.apply(entity, grant),
            ConditionEffect::Remove(kind) => self.remove(entity, kind),
        }
    }
}
