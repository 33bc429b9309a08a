//! Precious-metal set: luck, deep beacon haste, and calm hostile factions

use crate::conditions::ConditionKind;
use crate::core::types::EntityClass;
use crate::environment::predicates::{any_nearby, is_below, is_near_beacon};

use super::{Effect, PolicyContext};

pub fn apply(ctx: &mut PolicyContext<'_>) -> Vec<Effect> {
    let tuning = ctx.tuning;
    let t = &tuning.gold;

    let mut effects = vec![Effect::grant(ConditionKind::Luck, t.duration, t.luck_level)];

    if is_below(ctx.wearer, t.beacon_depth) && is_near_beacon(ctx.wearer, ctx.world, t.beacon_radius) {
        tracing::debug!("Gold trim: deep beacon haste for {}", ctx.wearer.id());
        effects.push(Effect::grant(ConditionKind::Haste, t.duration, t.beacon_haste_level));
    }

    // Only players provoke the hostile faction
    if ctx.wearer.is_player()
        && any_nearby(ctx.wearer, ctx.world, EntityClass::HostileFaction, t.calm_radius)
    {
        tracing::debug!("Gold trim: calming hostile faction near {}", ctx.wearer.id());
        effects.push(Effect::CalmHostiles { radius: t.calm_radius });
    }

    effects
}
