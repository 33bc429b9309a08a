//! Property tests for set matching and the clear-all fallback

use proptest::prelude::*;
use rand::rngs::mock::StepRng;

use trim_effects::conditions::{ConditionGrant, ConditionKind, ConditionService};
use trim_effects::equipment::InlineTrims;
use trim_effects::rules::{evaluate, MatchResult};
use trim_effects::simulation::{SandboxHost, SandboxWearer, SandboxWorld};
use trim_effects::{EngineConfig, TrimEngine, TrimTag};

const MATERIALS: [&str; 5] = ["diamond", "gold", "iron", "lapis", "resin"];

fn slot_strategy() -> impl Strategy<Value = Option<usize>> {
    prop::option::of(0..MATERIALS.len())
}

fn to_tags(slots: &[Option<usize>]) -> Vec<Option<TrimTag>> {
    slots.iter().map(|s| s.map(|i| TrimTag::new(MATERIALS[i]))).collect()
}

proptest! {
    /// With the threshold at the slot count, a tag is active exactly when
    /// every slot carries it
    #[test]
    fn test_full_threshold_needs_every_slot(slots in prop::collection::vec(slot_strategy(), 1..8)) {
        let tags = to_tags(&slots);
        let active = evaluate(&tags, tags.len());

        let uniform = match &tags[0] {
            Some(first) => tags.iter().all(|t| t.as_ref() == Some(first)),
            None => false,
        };

        if uniform {
            prop_assert_eq!(active, vec![tags[0].clone().unwrap()]);
        } else {
            prop_assert!(active.is_empty());
        }
    }

    /// Exactly `threshold` matching slots activate; one fewer does not
    #[test]
    fn test_threshold_boundary(threshold in 1usize..6, extra_empty in 0usize..3) {
        let mut tags = vec![Some(TrimTag::new("emerald")); threshold];
        tags.extend(std::iter::repeat(None).take(extra_empty));
        prop_assert_eq!(evaluate(&tags, threshold), vec![TrimTag::new("emerald")]);

        tags[0] = None;
        prop_assert!(evaluate(&tags, threshold).is_empty());
    }

    /// Group counts never exceed the slots and every counted tag is present
    #[test]
    fn test_group_counts_cover_tagged_slots(slots in prop::collection::vec(slot_strategy(), 0..8)) {
        let tags = to_tags(&slots);
        let matched = MatchResult::from_tags(&tags);

        let total: usize = matched.groups().iter().map(|g| g.count).sum();
        prop_assert_eq!(total + matched.untagged(), tags.len());
        prop_assert!(total <= matched.slot_count());

        for group in matched.groups() {
            prop_assert_eq!(tags[group.first_slot].as_ref(), Some(&group.tag));
        }
    }

    /// Whatever was granted before, a tick without an active set leaves no
    /// granted condition behind
    #[test]
    fn test_no_active_set_clears_all(
        slots in prop::collection::vec(slot_strategy(), 4),
        seeded in prop::collection::vec(0..ConditionKind::GRANTED.len(), 0..6),
    ) {
        let engine = TrimEngine::new(EngineConfig::default()).unwrap();
        let mut wearer = SandboxWearer::default();
        wearer.armor = to_tags(&slots);
        // Break any uniform set so nothing can reach the threshold
        wearer.armor[0] = None;

        let mut host = SandboxHost::new();
        for index in seeded {
            host.apply(wearer.id, ConditionGrant::new(ConditionKind::GRANTED[index], 300, 1));
        }

        let report = engine
            .run_tick(0, &wearer, &InlineTrims, &SandboxWorld::default(), &mut host, &mut StepRng::new(0, 0))
            .unwrap()
            .unwrap();

        prop_assert!(report.cleared);
        prop_assert!(!host.conditions.has_any(wearer.id));
    }

    /// Evaluating the same state twice leaves the same conditions
    #[test]
    fn test_repeat_evaluation_is_stable(material in 0..4usize, y in -64i32..200, hurt in 0u32..10) {
        let engine = TrimEngine::new(EngineConfig::default()).unwrap();
        let mut wearer = SandboxWearer::wearing(MATERIALS[material]);
        wearer.position.y = y;
        wearer.hurt_time = hurt;
        let world = SandboxWorld::default();
        let mut host = SandboxHost::new();

        engine
            .run_tick(0, &wearer, &InlineTrims, &world, &mut host, &mut StepRng::new(0, 0))
            .unwrap();
        let first = host.conditions.conditions_of(wearer.id);

        engine
            .run_tick(0, &wearer, &InlineTrims, &world, &mut host, &mut StepRng::new(0, 0))
            .unwrap();

        prop_assert_eq!(first, host.conditions.conditions_of(wearer.id));
    }
}
