//! Hard-mineral set: mining speed, with darkness vision underground and a
//! stronger boost near a beacon

use crate::conditions::ConditionKind;
use crate::environment::predicates::{is_in_cave, is_near_beacon};

use super::{Effect, PolicyContext};

pub fn apply(ctx: &mut PolicyContext<'_>) -> Vec<Effect> {
    let tuning = ctx.tuning;
    let t = &tuning.diamond;

    let mut effects = vec![Effect::grant(ConditionKind::Haste, t.duration, t.haste_level)];

    if is_in_cave(ctx.wearer, ctx.world, t.cave_depth, t.min_light) {
        tracing::debug!("Diamond trim: night vision for {} (in cave)", ctx.wearer.id());
        effects.push(Effect::grant(ConditionKind::NightVision, t.duration, t.night_vision_level));
    }

    if is_near_beacon(ctx.wearer, ctx.world, t.beacon_radius) {
        tracing::debug!("Diamond trim: beacon haste for {}", ctx.wearer.id());
        effects.push(Effect::grant(ConditionKind::Haste, t.duration, t.beacon_haste_level));
    }

    effects
}
