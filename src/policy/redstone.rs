//! Reactive-mineral set: a short burst right after taking damage

use crate::conditions::ConditionKind;
use crate::environment::predicates::recently_hurt;

use super::{Effect, PolicyContext};

pub fn apply(ctx: &mut PolicyContext<'_>) -> Vec<Effect> {
    if !recently_hurt(ctx.wearer) {
        return Vec::new();
    }

    let tuning = ctx.tuning;
    let t = &tuning.redstone;
    tracing::debug!("Redstone trim: damage burst for {}", ctx.wearer.id());

    vec![
        Effect::grant(ConditionKind::Speed, t.duration, t.speed_level),
        Effect::grant(ConditionKind::Strength, t.duration, t.strength_level),
        Effect::grant(ConditionKind::Haste, t.duration, t.haste_level),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equipment::TrimCategory;
    use crate::policy::test_support::{grants, run};
    use crate::simulation::sandbox::{SandboxWearer, SandboxWorld};

    #[test]
    fn test_no_burst_without_damage() {
        let wearer = SandboxWearer::default();
        assert!(run(TrimCategory::Redstone, &wearer, &SandboxWorld::default()).is_empty());
    }

    #[test]
    fn test_burst_after_damage() {
        let mut wearer = SandboxWearer::default();
        wearer.hurt_time = 10;

        let effects = run(TrimCategory::Redstone, &wearer, &SandboxWorld::default());

        assert_eq!(
            grants(&effects),
            vec![
                (ConditionKind::Speed, 0, 300),
                (ConditionKind::Strength, 0, 300),
                (ConditionKind::Haste, 0, 300),
            ]
        );
    }
}
