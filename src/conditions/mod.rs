//! Status conditions: kinds, the host service seam, and an in-memory tracker

pub mod kind;
pub mod service;
pub mod tracker;

pub use kind::{ConditionEffect, ConditionGrant, ConditionKind};
pub use service::ConditionService;
pub use tracker::{ActiveCondition, ConditionTracker};
