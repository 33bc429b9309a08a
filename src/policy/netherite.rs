//! Dense-alloy set: recovery while burning or in lava

use crate::conditions::ConditionKind;
use crate::environment::predicates::is_in_hazard;

use super::{Effect, PolicyContext};

pub fn apply(ctx: &mut PolicyContext<'_>) -> Vec<Effect> {
    if !is_in_hazard(ctx.wearer) {
        return Vec::new();
    }

    let tuning = ctx.tuning;
    let t = &tuning.netherite;

    let mut effects = Vec::with_capacity(2);
    if t.heal_amount > 0.0 {
        effects.push(Effect::Heal(t.heal_amount));
    }
    effects.push(Effect::grant(ConditionKind::FireResistance, t.duration, t.fire_resistance_level));
    effects
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equipment::TrimCategory;
    use crate::policy::test_support::run;
    use crate::simulation::sandbox::{SandboxWearer, SandboxWorld};

    #[test]
    fn test_nothing_when_safe() {
        assert!(run(TrimCategory::Netherite, &SandboxWearer::default(), &SandboxWorld::default()).is_empty());
    }

    #[test]
    fn test_heal_and_fire_resistance_on_fire() {
        let mut wearer = SandboxWearer::default();
        wearer.on_fire = true;

        let effects = run(TrimCategory::Netherite, &wearer, &SandboxWorld::default());

        assert_eq!(
            effects,
            vec![
                Effect::Heal(1.0),
                Effect::grant(ConditionKind::FireResistance, 300, 0),
            ]
        );
    }

    #[test]
    fn test_lava_counts_as_hazard() {
        let mut wearer = SandboxWearer::default();
        wearer.in_lava = true;

        let effects = run(TrimCategory::Netherite, &wearer, &SandboxWorld::default());

        assert_eq!(effects.len(), 2);
    }
}
