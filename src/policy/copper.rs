//! Base-metal set: speed and haste, with a rare strength burst during
//! thunderstorms

use rand::Rng;

use crate::conditions::ConditionKind;
use crate::environment::predicates::is_storming;

use super::{Effect, PolicyContext};

pub fn apply(ctx: &mut PolicyContext<'_>) -> Vec<Effect> {
    let tuning = ctx.tuning;
    let t = &tuning.copper;

    let mut effects = vec![
        Effect::grant(ConditionKind::Speed, t.duration, t.speed_level),
        Effect::grant(ConditionKind::Haste, t.duration, t.haste_level),
    ];

    // The draw only happens during a storm
    if is_storming(ctx.wearer, ctx.world) && ctx.rng.gen::<f32>() < t.storm_strength_chance {
        tracing::debug!("Copper trim: storm strength for {}", ctx.wearer.id());
        effects.push(Effect::grant(ConditionKind::Strength, t.duration, t.storm_strength_level));
    }

    effects
}

#[cfg(test)]
mod tests {
    use rand::rngs::mock::StepRng;

    use super::*;
    use crate::conditions::ConditionTracker;
    use crate::core::config::PolicyTuning;
    use crate::equipment::TrimCategory;
    use crate::policy::test_support::{grants, run_with};
    use crate::simulation::sandbox::{SandboxWearer, SandboxWorld};

    fn run_copper(world: &SandboxWorld, rng: &mut StepRng) -> Vec<(ConditionKind, u8, u32)> {
        grants(&run_with(
            TrimCategory::Copper,
            &SandboxWearer::default(),
            world,
            &ConditionTracker::new(),
            &PolicyTuning::default(),
            rng,
        ))
    }

    #[test]
    fn test_storm_and_low_draw_adds_strength() {
        let mut world = SandboxWorld::default();
        world.thundering = true;

        let granted = run_copper(&world, &mut StepRng::new(0, 0));

        assert_eq!(
            granted,
            vec![
                (ConditionKind::Speed, 1, 600),
                (ConditionKind::Haste, 1, 600),
                (ConditionKind::Strength, 1, 600),
            ]
        );
    }

    #[test]
    fn test_storm_and_high_draw_no_strength() {
        let mut world = SandboxWorld::default();
        world.thundering = true;

        let granted = run_copper(&world, &mut StepRng::new(u64::MAX, 0));

        assert_eq!(
            granted,
            vec![(ConditionKind::Speed, 1, 600), (ConditionKind::Haste, 1, 600)]
        );
    }

    #[test]
    fn test_clear_weather_never_draws() {
        let world = SandboxWorld::default();
        let mut rng = StepRng::new(0, 1);

        let granted = run_copper(&world, &mut rng);

        assert_eq!(granted.len(), 2);
        // Untouched generator still yields its first value
        assert_eq!(rand::RngCore::next_u64(&mut rng), 0);
    }
}
