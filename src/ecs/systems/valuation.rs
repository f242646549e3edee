//! Bounty valuation over the transport hierarchy.
//!
//! The credited bounty of a unit is a share of its own sell value. The
//! displayed bounty adds, recursively, the displayed bounties of every
//! passenger that carries an enabled bounty.

use bevy_ecs::entity::Entity;
use bevy_ecs::system::{Query, Res, SystemParam};

use crate::ecs::components::unit::sell_value;
use crate::ecs::components::{CustomSellValue, GivesBounty, Valued};
use crate::ecs::relationships::Passengers;
use crate::ecs::resources::BountyConfig;

/// `value * percentage / 100`, truncating toward zero.
pub fn percentage_of(value: i32, percentage: i32) -> i64 {
    i64::from(value) * i64::from(percentage) / 100
}

/// Read-only view used to value units for bounties.
#[derive(SystemParam)]
pub struct BountyValuator<'w, 's> {
    bounties: Query<'w, 's, &'static GivesBounty>,
    values: Query<'w, 's, (Option<&'static Valued>, Option<&'static CustomSellValue>)>,
    passengers: Query<'w, 's, &'static Passengers>,
    config: Res<'w, BountyConfig>,
}

impl BountyValuator<'_, '_> {
    /// Amount credited when `entity` dies. Never includes passengers.
    /// Zero for entities without a bounty.
    pub fn reward_value(&self, entity: Entity) -> i64 {
        let Ok(bounty) = self.bounties.get(entity) else {
            return 0;
        };
        let value = self
            .values
            .get(entity)
            .map_or(0, |(valued, custom)| sell_value(valued, custom));
        percentage_of(value, bounty.policy().percentage)
    }

    /// Amount announced when `entity` dies: its own reward plus the displayed
    /// value of every passenger with an enabled bounty, in cargo order.
    pub fn display_value(&self, entity: Entity) -> i64 {
        let mut ancestors = Vec::new();
        self.cascade(entity, &mut ancestors)
    }

    /// Displayed bounty for tooltips, or `None` if `entity` has no enabled bounty.
    pub fn preview(&self, entity: Entity) -> Option<i64> {
        let bounty = self.bounties.get(entity).ok()?;
        bounty.is_enabled().then(|| self.display_value(entity))
    }

    fn cascade(&self, entity: Entity, ancestors: &mut Vec<Entity>) -> i64 {
        let mut total = self.reward_value(entity);

        let Some(cargo) = self.bounties.get(entity).ok().and_then(GivesBounty::cargo) else {
            return total;
        };
        let Ok(passengers) = self.passengers.get(cargo) else {
            return total;
        };
        if ancestors.len() >= self.config.max_cargo_depth {
            tracing::warn!(
                "cargo nesting under {entity:?} exceeds {} levels; passengers not counted",
                self.config.max_cargo_depth
            );
            return total;
        }

        ancestors.push(entity);
        for &passenger in passengers.iter() {
            if ancestors.contains(&passenger) {
                tracing::warn!("{passenger:?} is carried inside itself; skipping");
                continue;
            }
            let enabled = self
                .bounties
                .get(passenger)
                .is_ok_and(GivesBounty::is_enabled);
            if enabled {
                total = total.saturating_add(self.cascade(passenger, ancestors));
            }
        }
        ancestors.pop();

        total
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use bevy_ecs::system::RunSystemOnce;
    use bevy_ecs::world::World;

    use super::*;
    use crate::ecs::components::Cargo;
    use crate::ecs::relationships::CarriedBy;
    use crate::model::BountyPolicy;

    fn policy(percentage: i32) -> Arc<BountyPolicy> {
        Arc::new(BountyPolicy {
            percentage,
            ..BountyPolicy::default()
        })
    }

    fn world() -> World {
        let mut world = World::new();
        world.insert_resource(BountyConfig::default());
        world
    }

    /// Spawn a unit with cost `cost`, an initialized bounty, and optional cargo.
    fn spawn(world: &mut World, cost: i32, percentage: i32, cargo: bool) -> Entity {
        let entity = world
            .spawn((Valued { cost }, GivesBounty::new(policy(percentage))))
            .id();
        if cargo {
            world.entity_mut(entity).insert(Cargo { capacity: 8 });
        }
        world
            .get_mut::<GivesBounty>(entity)
            .unwrap()
            .initialize(entity, cargo);
        entity
    }

    fn reward(world: &mut World, entity: Entity) -> i64 {
        world
            .run_system_once(move |v: BountyValuator| v.reward_value(entity))
            .unwrap()
    }

    fn display(world: &mut World, entity: Entity) -> i64 {
        world
            .run_system_once(move |v: BountyValuator| v.display_value(entity))
            .unwrap()
    }

    #[test]
    fn percentage_truncates_toward_zero() {
        assert_eq!(percentage_of(99, 10), 9);
        assert_eq!(percentage_of(500, 10), 50);
        assert_eq!(percentage_of(-99, 10), -9);
        assert_eq!(percentage_of(1, 0), 0);
        assert_eq!(percentage_of(i32::MAX, i32::MAX), 46_116_860_141_324_206);
    }

    #[test]
    fn reward_uses_custom_sell_value() {
        let mut world = world();
        let unit = spawn(&mut world, 1000, 10, false);
        assert_eq!(reward(&mut world, unit), 100);

        world.entity_mut(unit).insert(CustomSellValue { value: 450 });
        assert_eq!(reward(&mut world, unit), 45);
    }

    #[test]
    fn entity_without_bounty_is_worth_nothing() {
        let mut world = world();
        let rock = world.spawn(Valued { cost: 1000 }).id();
        assert_eq!(reward(&mut world, rock), 0);
        assert_eq!(display(&mut world, rock), 0);
    }

    #[test]
    fn display_without_cargo_equals_reward() {
        let mut world = world();
        let unit = spawn(&mut world, 990, 10, false);
        assert_eq!(display(&mut world, unit), reward(&mut world, unit));
    }

    #[test]
    fn display_adds_enabled_passengers() {
        let mut world = world();
        let apc = spawn(&mut world, 500, 10, true);
        let a = spawn(&mut world, 200, 10, false);
        let b = spawn(&mut world, 350, 10, false);
        world.entity_mut(a).insert(CarriedBy(apc));
        world.entity_mut(b).insert(CarriedBy(apc));

        assert_eq!(display(&mut world, apc), 105);
        assert_eq!(reward(&mut world, apc), 50);
    }

    #[test]
    fn disabled_passenger_contributes_nothing() {
        let mut world = world();
        let apc = spawn(&mut world, 500, 10, true);
        let a = spawn(&mut world, 200, 10, false);
        let b = spawn(&mut world, 9_000, 10, false);
        world.entity_mut(a).insert(CarriedBy(apc));
        world.entity_mut(b).insert(CarriedBy(apc));
        world.get_mut::<GivesBounty>(b).unwrap().set_enabled(false);

        assert_eq!(display(&mut world, apc), 70);
    }

    #[test]
    fn passenger_without_bounty_contributes_nothing() {
        let mut world = world();
        let apc = spawn(&mut world, 500, 10, true);
        let crate_ = world.spawn(Valued { cost: 10_000 }).id();
        world.entity_mut(crate_).insert(CarriedBy(apc));

        assert_eq!(display(&mut world, apc), 50);
    }

    #[test]
    fn nested_cargo_cascades() {
        let mut world = world();
        let ship = spawn(&mut world, 1000, 10, true);
        let apc = spawn(&mut world, 500, 10, true);
        let rifleman = spawn(&mut world, 100, 10, false);
        world.entity_mut(apc).insert(CarriedBy(ship));
        world.entity_mut(rifleman).insert(CarriedBy(apc));

        assert_eq!(display(&mut world, ship), 100 + 50 + 10);
        assert_eq!(display(&mut world, apc), 60);
    }

    #[test]
    fn cargo_capability_without_initialize_does_not_cascade() {
        let mut world = world();
        let apc = world
            .spawn((Valued { cost: 500 }, GivesBounty::new(policy(10)), Cargo { capacity: 4 }))
            .id();
        let a = spawn(&mut world, 200, 10, false);
        world.entity_mut(a).insert(CarriedBy(apc));

        assert_eq!(display(&mut world, apc), 50);
    }

    #[test]
    fn depth_guard_stops_descent() {
        let mut world = world();
        world.insert_resource(BountyConfig {
            max_cargo_depth: 1,
            ..BountyConfig::default()
        });
        let ship = spawn(&mut world, 1000, 10, true);
        let apc = spawn(&mut world, 500, 10, true);
        let rifleman = spawn(&mut world, 100, 10, false);
        world.entity_mut(apc).insert(CarriedBy(ship));
        world.entity_mut(rifleman).insert(CarriedBy(apc));

        assert_eq!(display(&mut world, ship), 150);
    }

    #[test]
    fn containment_cycle_terminates() {
        let mut world = world();
        let a = spawn(&mut world, 100, 10, true);
        let b = spawn(&mut world, 200, 10, true);
        // Bypasses the cargo applicator, which refuses cycles.
        world.entity_mut(b).insert(CarriedBy(a));
        world.entity_mut(a).insert(CarriedBy(b));

        assert_eq!(display(&mut world, a), 30);
    }

    #[test]
    fn preview_requires_enabled_bounty() {
        let mut world = world();
        let unit = spawn(&mut world, 300, 10, false);
        let preview = |world: &mut World| {
            world
                .run_system_once(move |v: BountyValuator| v.preview(unit))
                .unwrap()
        };
        assert_eq!(preview(&mut world), Some(30));
        world.get_mut::<GivesBounty>(unit).unwrap().set_enabled(false);
        assert_eq!(preview(&mut world), None);
    }
}
