//! Per-tick driver: extract → evaluate → dispatch → apply
//!
//! Nothing is cached between ticks. Every evaluation re-reads the
//! equipment and the world, so the only durable state is whatever the
//! host's condition service keeps.

use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::conditions::ConditionService;
use crate::core::config::EngineConfig;
use crate::core::error::{Result, TrimError};
use crate::core::types::{EntityId, Tick};
use crate::environment::{Equipped, WearerView, WorldView};
use crate::equipment::{extract, TrimCategory, TrimRegistry, TrimTag};
use crate::policy::{Effect, PolicyContext};
use crate::rules::MatchResult;

use super::dispatch::{apply_effects, dispatch, WearerActions};

/// What one evaluation decided for one wearer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickReport {
    pub entity: EntityId,
    pub tick: Tick,
    /// Extracted tag per slot
    pub tags: Vec<Option<TrimTag>>,
    pub active: Vec<TrimCategory>,
    pub effects: Vec<Effect>,
    /// The clear-all removals were issued
    pub cleared: bool,
}

#[derive(Debug, Clone)]
pub struct TrimEngine {
    config: EngineConfig,
}

impl TrimEngine {
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate().map_err(TrimError::InvalidConfig)?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn is_evaluation_tick(&self, tick: Tick) -> bool {
        tick % self.config.evaluation_interval == 0
    }

    /// Recognized categories that reach the matching threshold
    pub fn active_categories(&self, tags: &[Option<TrimTag>]) -> Vec<TrimCategory> {
        let matched = MatchResult::from_tags(tags);

        if self.config.require_full_set && !matched.is_fully_trimmed() {
            return Vec::new();
        }

        matched
            .active(self.config.minimum_matching_trims)
            .iter()
            .filter_map(|tag| {
                let category = tag.category();
                if category.is_none() {
                    tracing::debug!("Trim {} is matched but has no policy", tag);
                }
                category
            })
            .collect()
    }

    /// Decide this tick's effects without touching the host
    pub fn plan<W, R>(
        &self,
        tick: Tick,
        wearer: &W,
        registry: &R,
        world: &dyn WorldView,
        conditions: &dyn ConditionService,
        rng: &mut dyn RngCore,
    ) -> Result<TickReport>
    where
        W: WearerView + Equipped,
        R: TrimRegistry<W::Item> + ?Sized,
    {
        if wearer.is_removed() {
            return Err(TrimError::WearerRemoved(wearer.id()));
        }

        let tags = extract(registry, &wearer.equipment());
        let active = self.active_categories(&tags);

        let mut ctx = PolicyContext {
            wearer,
            world,
            conditions,
            tuning: &self.config.policies,
            rng,
        };
        let effects = dispatch(&active, &mut ctx, self.config.clear_when_unmatched);
        let cleared = active.is_empty() && self.config.clear_when_unmatched;

        Ok(TickReport {
            entity: wearer.id(),
            tick,
            tags,
            active,
            effects,
            cleared,
        })
    }

    /// Evaluate one wearer and apply the result
    ///
    /// Returns `Ok(None)` on ticks skipped by the evaluation interval.
    pub fn run_tick<W, R, H>(
        &self,
        tick: Tick,
        wearer: &W,
        registry: &R,
        world: &dyn WorldView,
        host: &mut H,
        rng: &mut dyn RngCore,
    ) -> Result<Option<TickReport>>
    where
        W: WearerView + Equipped,
        R: TrimRegistry<W::Item> + ?Sized,
        H: ConditionService + WearerActions,
    {
        if !self.is_evaluation_tick(tick) {
            return Ok(None);
        }

        let report = self.plan(tick, wearer, registry, world, &*host, rng)?;
        apply_effects(report.entity, &report.effects, host);
        Ok(Some(report))
    }

    /// Evaluate wearers one after another
    ///
    /// A wearer whose evaluation fails is logged and skipped; the rest of
    /// the batch still runs.
    pub fn run_batch<W, R, H>(
        &self,
        tick: Tick,
        wearers: &[W],
        registry: &R,
        world: &dyn WorldView,
        host: &mut H,
        rng: &mut dyn RngCore,
    ) -> Vec<TickReport>
    where
        W: WearerView + Equipped,
        R: TrimRegistry<W::Item> + ?Sized,
        H: ConditionService + WearerActions,
    {
        let mut reports = Vec::with_capacity(wearers.len());
        for wearer in wearers {
            match self.run_tick(tick, wearer, registry, world, host, rng) {
                Ok(Some(report)) => reports.push(report),
                Ok(None) => {}
                Err(err) => {
                    tracing::warn!("Skipping trim evaluation for {} at tick {}: {}", wearer.id(), tick, err);
                }
            }
        }
        reports
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::mock::StepRng;

    use super::*;
    use crate::conditions::ConditionKind;
    use crate::core::types::BlockPos;
    use crate::equipment::InlineTrims;
    use crate::simulation::sandbox::{SandboxHost, SandboxWearer, SandboxWorld};

    fn engine(config: EngineConfig) -> TrimEngine {
        TrimEngine::new(config).unwrap()
    }

    #[test]
    fn test_invalid_config_rejected() {
        let result = TrimEngine::new(EngineConfig::default().with_threshold(0));
        assert!(matches!(result, Err(TrimError::InvalidConfig(_))));
    }

    #[test]
    fn test_unrecognized_set_has_no_active_category() {
        let engine = engine(EngineConfig::default());
        let tags = vec![Some(TrimTag::new("resin")); 4];
        assert!(engine.active_categories(&tags).is_empty());
    }

    #[test]
    fn test_require_full_set_blocks_partial_coverage() {
        let tags = vec![
            Some(TrimTag::new("gold")),
            Some(TrimTag::new("gold")),
            Some(TrimTag::new("gold")),
            None,
        ];

        let lenient = engine(EngineConfig::default().with_threshold(3));
        assert_eq!(lenient.active_categories(&tags), vec![TrimCategory::Gold]);

        let strict = engine(EngineConfig {
            require_full_set: true,
            ..EngineConfig::default().with_threshold(3)
        });
        assert!(strict.active_categories(&tags).is_empty());
    }

    #[test]
    fn test_evaluation_interval() {
        let engine = engine(EngineConfig {
            evaluation_interval: 20,
            ..Default::default()
        });
        assert!(engine.is_evaluation_tick(0));
        assert!(!engine.is_evaluation_tick(7));
        assert!(engine.is_evaluation_tick(40));
    }

    #[test]
    fn test_off_interval_tick_does_nothing() {
        let engine = engine(EngineConfig {
            evaluation_interval: 2,
            ..Default::default()
        });
        let wearer = SandboxWearer::wearing("diamond");
        let mut host = SandboxHost::new();

        let report = engine
            .run_tick(1, &wearer, &InlineTrims, &SandboxWorld::default(), &mut host, &mut StepRng::new(0, 0))
            .unwrap();

        assert!(report.is_none());
        assert!(!host.conditions.has_any(wearer.id));
    }

    #[test]
    fn test_removed_wearer_is_error() {
        let engine = engine(EngineConfig::default());
        let mut wearer = SandboxWearer::wearing("iron");
        wearer.removed = true;
        let mut host = SandboxHost::new();

        let result = engine.run_tick(0, &wearer, &InlineTrims, &SandboxWorld::default(), &mut host, &mut StepRng::new(0, 0));

        assert!(matches!(result, Err(TrimError::WearerRemoved(id)) if id == wearer.id));
    }

    #[test]
    fn test_batch_skips_failed_wearer() {
        let engine = engine(EngineConfig::default());
        let mut removed = SandboxWearer::wearing("gold");
        removed.removed = true;
        let healthy = SandboxWearer::wearing("gold");
        let mut host = SandboxHost::new();

        let reports = engine.run_batch(
            0,
            &[removed.clone(), healthy.clone()],
            &InlineTrims,
            &SandboxWorld::default(),
            &mut host,
            &mut StepRng::new(0, 0),
        );

        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].entity, healthy.id);
        assert_eq!(host.query(healthy.id, ConditionKind::Luck), Some(1));
        assert!(!host.conditions.has_any(removed.id));
    }

    #[test]
    fn test_plan_does_not_touch_host() {
        let engine = engine(EngineConfig::default());
        let wearer = SandboxWearer::wearing("diamond").placed(BlockPos::new(0, 30, 0));
        let host = SandboxHost::new();

        let report = engine
            .plan(0, &wearer, &InlineTrims, &SandboxWorld::default(), &host, &mut StepRng::new(0, 0))
            .unwrap();

        assert_eq!(report.active, vec![TrimCategory::Diamond]);
        assert!(!report.cleared);
        assert!(!host.conditions.has_any(wearer.id));
    }
}
