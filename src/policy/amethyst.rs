//! Decorative-mineral set: damage reduction, plus speed that climbs one
//! level per sprinting evaluation up to a cap

use crate::conditions::ConditionKind;

use super::{Effect, PolicyContext};

pub fn apply(ctx: &mut PolicyContext<'_>) -> Vec<Effect> {
    let tuning = ctx.tuning;
    let t = &tuning.amethyst;

    let mut effects = Vec::with_capacity(2);

    if ctx.wearer.is_sprinting() {
        let level = match ctx.conditions.query(ctx.wearer.id(), ConditionKind::Speed) {
            Some(current) => current.saturating_add(1).min(t.max_speed_level),
            None => t.base_speed_level.min(t.max_speed_level),
        };
        tracing::debug!("Amethyst trim: sprint speed level {} for {}", level, ctx.wearer.id());
        effects.push(Effect::grant(ConditionKind::Speed, t.duration, level));
    }

    effects.push(Effect::grant(ConditionKind::Resistance, t.duration, t.resistance_level));
    effects
}
