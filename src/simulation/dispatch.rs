//! Effect dispatch: run the policies for the active categories, or clear
//! everything when none is active, and route the results to the host

use crate::conditions::ConditionService;
use crate::core::types::EntityId;
use crate::equipment::TrimCategory;
use crate::policy::{clear_all, policy_for, Effect, PolicyContext};

/// Host-side mutations that are not status conditions
pub trait WearerActions {
    fn heal(&mut self, entity: EntityId, amount: f32);

    fn add_experience(&mut self, entity: EntityId, points: u32);

    /// Make hostile-faction members within `radius` drop the wearer as a
    /// target; returns how many were calmed
    fn calm_hostiles(&mut self, entity: EntityId, radius: f64) -> usize;
}

/// Effects for this tick's active categories
///
/// With no active category, yields the clear-all removals when
/// `clear_when_unmatched` is set and nothing otherwise.
pub fn dispatch(
    active: &[TrimCategory],
    ctx: &mut PolicyContext<'_>,
    clear_when_unmatched: bool,
) -> Vec<Effect> {
    if active.is_empty() {
        if clear_when_unmatched {
            tracing::debug!("No active trim set on {}, clearing granted conditions", ctx.wearer.id());
            return clear_all();
        }
        return Vec::new();
    }

    let mut effects = Vec::new();
    for &category in active {
        let policy = policy_for(category);
        let produced = policy(ctx);
        tracing::debug!(
            "{} trim on {} produced {} effects",
            category,
            ctx.wearer.id(),
            produced.len()
        );
        effects.extend(produced);
    }
    effects
}

/// Send effects to the host in order
pub fn apply_effects<H>(entity: EntityId, effects: &[Effect], host: &mut H)
where
    H: ConditionService + WearerActions + ?Sized,
{
    for effect in effects {
        match *effect {
            Effect::Condition(condition) => host.execute(entity, condition),
            Effect::Heal(amount) => host.heal(entity, amount),
            Effect::GrantExperience(points) => host.add_experience(entity, points),
            Effect::CalmHostiles { radius } => {
                let calmed = host.calm_hostiles(entity, radius);
                if calmed > 0 {
                    tracing::debug!("Calmed {} hostiles around {}", calmed, entity);
                }
            }
        }
    }
}
