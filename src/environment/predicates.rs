//! Environment and entity predicates shared by the category policies
//!
//! World reads that fail count as "condition not met".

use crate::core::types::{BlockKind, Dimension, EntityClass};

use super::wearer::WearerView;
use super::world::{EnvResult, WorldView};

/// Unwrap a world read, degrading failures to `fallback`
fn read_or<T>(result: EnvResult<T>, fallback: T, what: &str, wearer: &dyn WearerView) -> T {
    match result {
        Ok(value) => value,
        Err(err) => {
            tracing::debug!("Skipping {} check for {}: {}", what, wearer.id(), err);
            fallback
        }
    }
}

/// Below the cave depth, or standing somewhere dark
pub fn is_in_cave(wearer: &dyn WearerView, world: &dyn WorldView, cave_depth: i32, min_light: u8) -> bool {
    if wearer.block_y() < cave_depth {
        return true;
    }
    let light = read_or(world.light_level(wearer.block_pos()).map(Some), None, "light level", wearer);
    light.is_some_and(|level| level < min_light)
}

pub fn is_below(wearer: &dyn WearerView, depth: i32) -> bool {
    wearer.block_y() < depth
}

pub fn is_near_beacon(wearer: &dyn WearerView, world: &dyn WorldView, radius: i32) -> bool {
    let found = read_or(
        world.has_block_within(wearer.block_pos(), BlockKind::Beacon, radius),
        false,
        "beacon proximity",
        wearer,
    );
    if found {
        tracing::debug!("Beacon detected within {} blocks of {}", radius, wearer.id());
    }
    found
}

pub fn any_nearby(wearer: &dyn WearerView, world: &dyn WorldView, class: EntityClass, radius: f64) -> bool {
    let count = read_or(
        world.count_nearby(wearer.block_pos(), class, radius),
        0,
        "nearby entity",
        wearer,
    );
    count > 0
}

pub fn is_in_dimension(wearer: &dyn WearerView, world: &dyn WorldView, dimension: Dimension) -> bool {
    read_or(world.dimension().map(|d| d == dimension), false, "dimension", wearer)
}

pub fn is_storming(wearer: &dyn WearerView, world: &dyn WorldView) -> bool {
    read_or(world.is_thundering(), false, "weather", wearer)
}

/// Burning or standing in lava
pub fn is_in_hazard(wearer: &dyn WearerView) -> bool {
    wearer.is_on_fire() || wearer.is_in_lava()
}

/// Air supply below maximum means the head is submerged
pub fn is_underwater(wearer: &dyn WearerView) -> bool {
    wearer.air() < wearer.max_air()
}

pub fn recently_hurt(wearer: &dyn WearerView) -> bool {
    wearer.hurt_time() > 0
}

pub fn health_below(wearer: &dyn WearerView, threshold: f32) -> bool {
    wearer.health() < threshold
}

pub fn health_below_fraction(wearer: &dyn WearerView, fraction: f32) -> bool {
    wearer.health() < wearer.max_health() * fraction
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::BlockPos;
    use crate::simulation::sandbox::{SandboxWearer, SandboxWorld};

    #[test]
    fn test_cave_by_depth_ignores_light_failure() {
        let wearer = SandboxWearer::at(BlockPos::new(0, 40, 0));
        let world = SandboxWorld::unavailable();
        assert!(is_in_cave(&wearer, &world, 45, 7));
    }

    #[test]
    fn test_cave_by_darkness() {
        let wearer = SandboxWearer::at(BlockPos::new(0, 70, 0));
        let mut world = SandboxWorld::default();

        world.light = Some(3);
        assert!(is_in_cave(&wearer, &world, 45, 7));

        world.light = Some(7);
        assert!(!is_in_cave(&wearer, &world, 45, 7));
    }

    #[test]
    fn test_light_failure_is_not_a_cave() {
        let wearer = SandboxWearer::at(BlockPos::new(0, 70, 0));
        let world = SandboxWorld::unavailable();
        assert!(!is_in_cave(&wearer, &world, 45, 7));
    }

    #[test]
    fn test_beacon_range() {
        let wearer = SandboxWearer::at(BlockPos::new(0, 64, 0));
        let mut world = SandboxWorld::default();

        world.beacon = Some(BlockPos::new(30, 60, -20));
        assert!(is_near_beacon(&wearer, &world, 50));
        assert!(!is_near_beacon(&wearer, &world, 10));

        world.beacon = None;
        assert!(!is_near_beacon(&wearer, &world, 50));
    }

    #[test]
    fn test_nearby_entities_within_radius() {
        let wearer = SandboxWearer::at(BlockPos::new(0, 64, 0));
        let mut world = SandboxWorld::default();
        world.traders.push(BlockPos::new(6, 64, 0));

        assert!(any_nearby(&wearer, &world, EntityClass::TradeFaction, 10.0));
        assert!(!any_nearby(&wearer, &world, EntityClass::TradeFaction, 5.0));
        assert!(!any_nearby(&wearer, &world, EntityClass::HostileFaction, 10.0));
    }

    #[test]
    fn test_dimension_failure_degrades() {
        let wearer = SandboxWearer::default();
        let world = SandboxWorld::unavailable();
        assert!(!is_in_dimension(&wearer, &world, Dimension::Overworld));
        assert!(!is_storming(&wearer, &world));
    }

    #[test]
    fn test_health_thresholds() {
        let mut wearer = SandboxWearer::default();
        wearer.max_health = 20.0;
        wearer.health = 9.0;

        assert!(health_below_fraction(&wearer, 0.5));
        assert!(!health_below(&wearer, 6.0));

        wearer.health = 5.5;
        assert!(health_below(&wearer, 6.0));
    }

    #[test]
    fn test_hazard_and_water() {
        let mut wearer = SandboxWearer::default();
        assert!(!is_in_hazard(&wearer));
        assert!(!is_underwater(&wearer));

        wearer.in_lava = true;
        assert!(is_in_hazard(&wearer));

        wearer.air = wearer.max_air - 1;
        assert!(is_underwater(&wearer));
    }
}
