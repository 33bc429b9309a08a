//! Deep-blue-mineral set: luck, swimming while submerged, and an experience
//! trickle proportional to level progress

use crate::conditions::ConditionKind;
use crate::environment::predicates::is_underwater;
use crate::environment::Experience;

use super::{Effect, PolicyContext};

pub fn apply(ctx: &mut PolicyContext<'_>) -> Vec<Effect> {
    let tuning = ctx.tuning;
    let t = &tuning.lapis;

    let mut effects = vec![Effect::grant(ConditionKind::Luck, t.duration, t.luck_level)];

    if is_underwater(ctx.wearer) {
        effects.push(Effect::grant(ConditionKind::DolphinsGrace, t.duration, t.dolphins_grace_level));
    }

    if let Some(experience) = ctx.wearer.experience() {
        let bonus = experience_bonus(experience, t.experience_factor);
        if bonus > 0 {
            effects.push(Effect::GrantExperience(bonus));
        }
    }

    effects
}

/// `floor(progress * factor * next_level_points)`
pub fn experience_bonus(experience: Experience, factor: f32) -> u32 {
    let progress = experience.progress.clamp(0.0, 1.0);
    (progress * factor * experience.next_level_points as f32).floor() as u32
}
