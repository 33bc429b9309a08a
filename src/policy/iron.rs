//! Common-metal set: support that kicks in at low health or underground

use crate::conditions::ConditionKind;
use crate::environment::predicates::{health_below, health_below_fraction, is_below};

use super::{Effect, PolicyContext};

pub fn apply(ctx: &mut PolicyContext<'_>) -> Vec<Effect> {
    let tuning = ctx.tuning;
    let t = &tuning.iron;

    let mut effects = Vec::new();

    if health_below(ctx.wearer, t.resistance_health) {
        effects.push(Effect::grant(ConditionKind::Resistance, t.duration, t.resistance_level));
    }

    if health_below_fraction(ctx.wearer, t.strength_health_fraction) {
        effects.push(Effect::grant(ConditionKind::Strength, t.duration, t.strength_level));
    }

    if is_below(ctx.wearer, t.underground_depth) {
        effects.push(Effect::grant(ConditionKind::Haste, t.haste_duration, t.haste_level));
    }

    effects
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::BlockPos;
    use crate::equipment::TrimCategory;
    use crate::policy::test_support::{grants, run};
    use crate::simulation::sandbox::{SandboxWearer, SandboxWorld};

    #[test]
    fn test_healthy_on_surface_nothing() {
        let wearer = SandboxWearer::at(BlockPos::new(0, 70, 0));
        assert!(run(TrimCategory::Iron, &wearer, &SandboxWorld::default()).is_empty());
    }

    #[test]
    fn test_below_half_health_strength_only() {
        let mut wearer = SandboxWearer::at(BlockPos::new(0, 70, 0));
        wearer.health = 8.0;

        let effects = run(TrimCategory::Iron, &wearer, &SandboxWorld::default());

        assert_eq!(grants(&effects), vec![(ConditionKind::Strength, 0, 300)]);
    }

    #[test]
    fn test_critical_health_underground_everything() {
        let mut wearer = SandboxWearer::at(BlockPos::new(0, 12, 0));
        wearer.health = 4.0;

        let effects = run(TrimCategory::Iron, &wearer, &SandboxWorld::default());

        assert_eq!(
            grants(&effects),
            vec![
                (ConditionKind::Resistance, 0, 300),
                (ConditionKind::Strength, 0, 300),
                (ConditionKind::Haste, 0, 200),
            ]
        );
    }
}
