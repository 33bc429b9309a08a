//! Condition kinds and the effects the engine issues for them

use serde::{Deserialize, Serialize};

/// Timed status modifiers the engine can grant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionKind {
    Haste,
    NightVision,
    Luck,
    Speed,
    Resistance,
    Strength,
    Regeneration,
    HeroOfTheVillage,
    DolphinsGrace,
    FireResistance,
}

impl ConditionKind {
    /// Every kind some policy can grant; the clear-all set
    pub const GRANTED: [ConditionKind; 10] = [
        ConditionKind::Haste,
        ConditionKind::NightVision,
        ConditionKind::Luck,
        ConditionKind::Speed,
        ConditionKind::Resistance,
        ConditionKind::Strength,
        ConditionKind::Regeneration,
        ConditionKind::HeroOfTheVillage,
        ConditionKind::DolphinsGrace,
        ConditionKind::FireResistance,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Haste => "haste",
            Self::NightVision => "night_vision",
            Self::Luck => "luck",
            Self::Speed => "speed",
            Self::Resistance => "resistance",
            Self::Strength => "strength",
            Self::Regeneration => "regeneration",
            Self::HeroOfTheVillage => "hero_of_the_village",
            Self::DolphinsGrace => "dolphins_grace",
            Self::FireResistance => "fire_resistance",
        }
    }
}

impl std::fmt::Display for ConditionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Request to grant or refresh one condition
///
/// `level` is zero-based (0 = level I).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConditionGrant {
    pub kind: ConditionKind,
    pub duration: u32,
    pub level: u8,
    pub show_particles: bool,
    pub show_icon: bool,
}

impl ConditionGrant {
    /// Grant with particles hidden and the icon shown
    pub fn new(kind: ConditionKind, duration: u32, level: u8) -> Self {
        Self {
            kind,
            duration,
            level,
            show_particles: false,
            show_icon: true,
        }
    }
}

/// Condition-level side effect produced by a policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConditionEffect {
    Apply(ConditionGrant),
    Remove(ConditionKind),
}

impl ConditionEffect {
    pub fn apply(kind: ConditionKind, duration: u32, level: u8) -> Self {
        Self::Apply(ConditionGrant::new(kind, duration, level))
    }

    pub fn kind(&self) -> ConditionKind {
        match self {
            Self::Apply(grant) => grant.kind,
            Self::Remove(kind) => *kind,
        }
    }
}
