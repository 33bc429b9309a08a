//! Trim Effects - armor trim set bonuses evaluated once per tick
//!
//! Each evaluation extracts the trim material of every worn piece, decides
//! which materials are worn often enough to count as a set, and turns each
//! active set into status conditions through that material's policy. When
//! no set is active every condition the engine can grant is removed.

pub mod conditions;
pub mod core;
pub mod environment;
pub mod equipment;
pub mod policy;
pub mod rules;
pub mod simulation;

pub use crate::conditions::{ConditionEffect, ConditionGrant, ConditionKind, ConditionService, ConditionTracker};
pub use crate::core::{EngineConfig, Result, TrimError};
pub use crate::equipment::{EquipmentSnapshot, TrimCategory, TrimRegistry, TrimTag};
pub use crate::policy::Effect;
pub use crate::simulation::{TickReport, TrimEngine, WearerActions};
