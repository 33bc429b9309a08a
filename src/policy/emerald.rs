//! Gem set: trader favor while trade-faction members are close

use crate::conditions::ConditionKind;
use crate::core::types::EntityClass;
use crate::environment::predicates::any_nearby;

use super::{Effect, PolicyContext};

pub fn apply(ctx: &mut PolicyContext<'_>) -> Vec<Effect> {
    let tuning = ctx.tuning;
    let t = &tuning.emerald;

    if !any_nearby(ctx.wearer, ctx.world, EntityClass::TradeFaction, t.trader_radius) {
        return Vec::new();
    }

    vec![
        Effect::grant(ConditionKind::HeroOfTheVillage, t.duration, t.hero_level),
        Effect::grant(ConditionKind::Resistance, t.duration, t.resistance_level),
    ]
}
