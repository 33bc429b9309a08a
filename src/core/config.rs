//! Engine configuration with documented constants
//!
//! Every tunable number the category policies use lives here, grouped per
//! trim category. All of it is loadable from a TOML file where any missing
//! key falls back to the default listed below.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{Result, TrimError};

/// Top-level configuration for the trim engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    // === MATCHING ===
    /// Number of equipped slots that must share a trim material before that
    /// material counts as active
    ///
    /// Defaults to the armor slot count (4), so a set needs every piece.
    /// Lower values let partial sets activate and allow several categories
    /// to be active at once.
    pub minimum_matching_trims: usize,

    /// Disable every category while any slot is empty or untrimmed
    ///
    /// Off by default: matching is then a pure threshold comparison.
    pub require_full_set: bool,

    // === LIFECYCLE ===
    /// Remove every engine-granted condition on ticks where no category is
    /// active
    ///
    /// Turning this off leaves granted conditions to run out on their own.
    pub clear_when_unmatched: bool,

    /// Evaluate once every this many ticks (1 = every tick)
    pub evaluation_interval: u64,

    // === POLICIES ===
    #[serde(flatten)]
    pub policies: PolicyTuning,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            minimum_matching_trims: 4,
            require_full_set: false,
            clear_when_unmatched: true,
            evaluation_interval: 1,
            policies: PolicyTuning::default(),
        }
    }
}

impl EngineConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style override of the matching threshold
    pub fn with_threshold(mut self, minimum_matching_trims: usize) -> Self {
        self.minimum_matching_trims = minimum_matching_trims;
        self
    }

    /// Parse a TOML document; absent keys keep their defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: EngineConfig = toml::from_str(content)?;
        config.validate().map_err(TrimError::InvalidConfig)?;
        Ok(config)
    }

    /// Read and validate a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::info!(
            "Loaded trim config from {} (minimum matching trims: {})",
            path.display(),
            config.minimum_matching_trims
        );
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.minimum_matching_trims == 0 {
            return Err("minimum_matching_trims must be at least 1".into());
        }

        if self.evaluation_interval == 0 {
            return Err("evaluation_interval must be at least 1".into());
        }

        self.policies.validate()
    }
}

/// Numeric constants for every category policy
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyTuning {
    pub diamond: DiamondTuning,
    pub gold: GoldTuning,
    pub amethyst: AmethystTuning,
    pub redstone: RedstoneTuning,
    pub quartz: QuartzTuning,
    pub emerald: EmeraldTuning,
    pub lapis: LapisTuning,
    pub copper: CopperTuning,
    pub iron: IronTuning,
    pub netherite: NetheriteTuning,
}

impl PolicyTuning {
    pub fn validate(&self) -> std::result::Result<(), String> {
        let copper_chance = self.copper.storm_strength_chance;
        if !(0.0..=1.0).contains(&copper_chance) {
            return Err(format!(
                "copper.storm_strength_chance ({}) must be within [0, 1]",
                copper_chance
            ));
        }

        if self.lapis.experience_factor < 0.0 {
            return Err(format!(
                "lapis.experience_factor ({}) must not be negative",
                self.lapis.experience_factor
            ));
        }

        if self.netherite.heal_amount < 0.0 {
            return Err(format!(
                "netherite.heal_amount ({}) must not be negative",
                self.netherite.heal_amount
            ));
        }

        let radii = [
            ("gold.calm_radius", self.gold.calm_radius),
            ("emerald.trader_radius", self.emerald.trader_radius),
        ];
        for (name, radius) in radii {
            if radius < 0.0 {
                return Err(format!("{} ({}) must not be negative", name, radius));
            }
        }

        if self.diamond.beacon_radius < 0 || self.gold.beacon_radius < 0 {
            return Err("beacon search radii must not be negative".into());
        }

        if self.amethyst.max_speed_level < self.amethyst.base_speed_level {
            return Err(format!(
                "amethyst.max_speed_level ({}) must be >= base_speed_level ({})",
                self.amethyst.max_speed_level, self.amethyst.base_speed_level
            ));
        }

        Ok(())
    }
}

/// Hard-mineral set: mining speed, darkness vision, beacon boost
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiamondTuning {
    pub duration: u32,
    pub haste_level: u8,
    /// Wearers with block Y below this count as underground
    pub cave_depth: i32,
    /// Light levels below this count as a cave
    pub min_light: u8,
    pub night_vision_level: u8,
    /// Cube half-extent searched for a beacon block
    pub beacon_radius: i32,
    pub beacon_haste_level: u8,
}

impl Default for DiamondTuning {
    fn default() -> Self {
        Self {
            duration: 300,
            haste_level: 1,
            cave_depth: 45,
            min_light: 7,
            night_vision_level: 0,
            beacon_radius: 50,
            beacon_haste_level: 2,
        }
    }
}

/// Precious-metal set: luck and hostile-faction calming
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GoldTuning {
    pub duration: u32,
    pub luck_level: u8,
    /// Beacon haste only applies below this block Y
    pub beacon_depth: i32,
    pub beacon_radius: i32,
    pub beacon_haste_level: u8,
    pub calm_radius: f64,
}

impl Default for GoldTuning {
    fn default() -> Self {
        Self {
            duration: 300,
            luck_level: 1,
            beacon_depth: 0,
            beacon_radius: 50,
            beacon_haste_level: 3,
            calm_radius: 10.0,
        }
    }
}

/// Decorative-mineral set: damage reduction, sprint-scaled speed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AmethystTuning {
    pub duration: u32,
    pub resistance_level: u8,
    /// Speed level granted on the first sprinting tick
    pub base_speed_level: u8,
    /// Speed never climbs past this level
    pub max_speed_level: u8,
}

impl Default for AmethystTuning {
    fn default() -> Self {
        Self {
            duration: 300,
            resistance_level: 0,
            base_speed_level: 0,
            max_speed_level: 2,
        }
    }
}

/// Reactive-mineral set: burst after taking damage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RedstoneTuning {
    pub duration: u32,
    pub speed_level: u8,
    pub strength_level: u8,
    pub haste_level: u8,
}

impl Default for RedstoneTuning {
    fn default() -> Self {
        Self {
            duration: 300,
            speed_level: 0,
            strength_level: 0,
            haste_level: 0,
        }
    }
}

/// Silica-mineral set: bundle inside the hostile dimension
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuartzTuning {
    pub duration: u32,
    pub regeneration_level: u8,
    pub resistance_level: u8,
    pub haste_level: u8,
}

impl Default for QuartzTuning {
    fn default() -> Self {
        Self {
            duration: 300,
            regeneration_level: 0,
            resistance_level: 0,
            haste_level: 1,
        }
    }
}

/// Gem set: favor with nearby traders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmeraldTuning {
    pub duration: u32,
    pub trader_radius: f64,
    pub hero_level: u8,
    pub resistance_level: u8,
}

impl Default for EmeraldTuning {
    fn default() -> Self {
        Self {
            duration: 300,
            trader_radius: 10.0,
            hero_level: 0,
            resistance_level: 0,
        }
    }
}

/// Deep-blue-mineral set: luck, swimming, experience trickle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LapisTuning {
    pub duration: u32,
    pub luck_level: u8,
    pub dolphins_grace_level: u8,
    /// Share of the next level's experience, scaled by current progress,
    /// granted every evaluation
    pub experience_factor: f32,
}

impl Default for LapisTuning {
    fn default() -> Self {
        Self {
            duration: 300,
            luck_level: 1,
            dolphins_grace_level: 0,
            experience_factor: 0.5,
        }
    }
}

/// Base-metal set: speed, haste, storm strength roll
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CopperTuning {
    pub duration: u32,
    pub speed_level: u8,
    pub haste_level: u8,
    pub storm_strength_level: u8,
    /// Per-evaluation probability of the storm strength burst
    pub storm_strength_chance: f32,
}

impl Default for CopperTuning {
    fn default() -> Self {
        Self {
            duration: 600,
            speed_level: 1,
            haste_level: 1,
            storm_strength_level: 1,
            storm_strength_chance: 0.05,
        }
    }
}

/// Common-metal set: low-health and underground support
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IronTuning {
    pub duration: u32,
    /// Resistance applies below this absolute health
    pub resistance_health: f32,
    pub resistance_level: u8,
    /// Strength applies below this fraction of max health
    pub strength_health_fraction: f32,
    pub strength_level: u8,
    /// Haste applies below this block Y
    pub underground_depth: i32,
    pub haste_level: u8,
    pub haste_duration: u32,
}

impl Default for IronTuning {
    fn default() -> Self {
        Self {
            duration: 300,
            resistance_health: 6.0,
            resistance_level: 0,
            strength_health_fraction: 0.5,
            strength_level: 0,
            underground_depth: 64,
            haste_level: 0,
            haste_duration: 200,
        }
    }
}

/// Dense-alloy set: recovery while burning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetheriteTuning {
    pub duration: u32,
    pub heal_amount: f32,
    pub fire_resistance_level: u8,
}

impl Default for NetheriteTuning {
    fn default() -> Self {
        Self {
            duration: 300,
            heal_amount: 1.0,
            fire_resistance_level: 0,
        }
    }
}
