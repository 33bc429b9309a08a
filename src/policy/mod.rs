//! Category policies
//!
//! Each recognized trim category maps to one stateless decision table that
//! reads the wearer and the world and returns the effects for this tick.
//! Unrecognized materials have no policy.

pub mod amethyst;
pub mod copper;
pub mod diamond;
pub mod emerald;
pub mod gold;
pub mod iron;
pub mod lapis;
pub mod netherite;
pub mod quartz;
pub mod redstone;

use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::conditions::{ConditionEffect, ConditionKind, ConditionService};
use crate::core::config::PolicyTuning;
use crate::environment::{WearerView, WorldView};
use crate::equipment::TrimCategory;

/// Side effect requested by a policy
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Effect {
    Condition(ConditionEffect),
    /// Restore health to the wearer
    Heal(f32),
    /// Add experience points to a player wearer
    GrantExperience(u32),
    /// Make hostile-faction members within `radius` stop targeting the wearer
    CalmHostiles { radius: f64 },
}

impl Effect {
    pub fn grant(kind: ConditionKind, duration: u32, level: u8) -> Self {
        Self::Condition(ConditionEffect::apply(kind, duration, level))
    }

    pub fn remove(kind: ConditionKind) -> Self {
        Self::Condition(ConditionEffect::Remove(kind))
    }

    /// Condition granted by this effect, if it is a grant
    pub fn granted_kind(&self) -> Option<ConditionKind> {
        match self {
            Self::Condition(ConditionEffect::Apply(grant)) => Some(grant.kind),
            _ => None,
        }
    }
}

/// Everything a policy may read during one evaluation
pub struct PolicyContext<'a> {
    pub wearer: &'a dyn WearerView,
    pub world: &'a dyn WorldView,
    /// Read-only view of current conditions (for level scaling)
    pub conditions: &'a dyn ConditionService,
    pub tuning: &'a PolicyTuning,
    pub rng: &'a mut dyn RngCore,
}

pub type CategoryPolicy = fn(&mut PolicyContext<'_>) -> Vec<Effect>;

/// Policy for a recognized category
pub fn policy_for(category: TrimCategory) -> CategoryPolicy {
    match category {
        TrimCategory::Diamond => diamond::apply,
        TrimCategory::Gold => gold::apply,
        TrimCategory::Amethyst => amethyst::apply,
        TrimCategory::Redstone => redstone::apply,
        TrimCategory::Quartz => quartz::apply,
        TrimCategory::Emerald => emerald::apply,
        TrimCategory::Lapis => lapis::apply,
        TrimCategory::Copper => copper::apply,
        TrimCategory::Iron => iron::apply,
        TrimCategory::Netherite => netherite::apply,
    }
}

/// Remove every condition kind any policy can grant
pub fn clear_all() -> Vec<Effect> {
    ConditionKind::GRANTED.into_iter().map(Effect::remove).collect()
}
