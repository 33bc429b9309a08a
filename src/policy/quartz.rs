//! Silica-mineral set: sustain bundle inside the hostile dimension

use crate::conditions::ConditionKind;
use crate::core::types::Dimension;
use crate::environment::predicates::is_in_dimension;

use super::{Effect, PolicyContext};

pub fn apply(ctx: &mut PolicyContext<'_>) -> Vec<Effect> {
    if !is_in_dimension(ctx.wearer, ctx.world, Dimension::Nether) {
        return Vec::new();
    }

    let tuning = ctx.tuning;
    let t = &tuning.quartz;

    vec![
        Effect::grant(ConditionKind::Regeneration, t.duration, t.regeneration_level),
        Effect::grant(ConditionKind::Resistance, t.duration, t.resistance_level),
        Effect::grant(ConditionKind::Haste, t.duration, t.haste_level),
    ]
}
