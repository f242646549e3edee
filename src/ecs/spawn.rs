use std::sync::Arc;

use bevy_ecs::entity::Entity;
use bevy_ecs::world::World;

use crate::ecs::components::*;
use crate::ecs::relationships::OwnedBy;
use crate::ecs::resources::{EcsIdGenerator, SimEntityMap};
use crate::model::{BountyPolicy, Color, PolicyRules, WorldPos};

/// Allocate a sim id and register it for `entity`.
fn register(world: &mut World, entity: Entity) -> u64 {
    let id = world
        .get_resource_mut::<EcsIdGenerator>()
        .map_or(0, |mut id_gen| id_gen.0.next_id());
    if let Some(mut map) = world.get_resource_mut::<SimEntityMap>() {
        map.insert(id, entity);
    }
    id
}

/// Spawn an owner with a cash ledger.
pub fn spawn_player(world: &mut World, name: &str, color: Color, cash: i64) -> Entity {
    let entity = world
        .spawn((Player, PlayerColor(color), PlayerResources::with_cash(cash)))
        .id();
    let id = register(world, entity);
    world.entity_mut(entity).insert(SimEntity::new(id, name));
    entity
}

/// Everything needed to spawn a unit.
#[derive(Debug, Clone, Default)]
pub struct UnitSpec {
    pub name: String,
    pub cost: i32,
    pub custom_sell_value: Option<i32>,
    pub position: WorldPos,
    pub cargo_capacity: Option<usize>,
    pub bounty: Option<Arc<BountyPolicy>>,
}

impl UnitSpec {
    pub fn new(name: impl Into<String>, cost: i32) -> Self {
        Self {
            name: name.into(),
            cost,
            ..Self::default()
        }
    }

    /// Use the bounty policy `rules` define for this unit's type name, if any.
    pub fn with_rules(mut self, rules: &PolicyRules) -> Self {
        self.bounty = rules.get(&self.name);
        self
    }

    pub fn with_bounty(mut self, policy: Arc<BountyPolicy>) -> Self {
        self.bounty = Some(policy);
        self
    }

    pub fn with_cargo(mut self, capacity: usize) -> Self {
        self.cargo_capacity = Some(capacity);
        self
    }

    pub fn with_sell_value(mut self, value: i32) -> Self {
        self.custom_sell_value = Some(value);
        self
    }

    pub fn at(mut self, position: WorldPos) -> Self {
        self.position = position;
        self
    }
}

/// Spawn a unit owned by `owner`, placed in the live world.
pub fn spawn_unit(world: &mut World, owner: Entity, spec: UnitSpec) -> Entity {
    let entity = world
        .spawn((
            Unit,
            InWorld,
            Position(spec.position),
            Valued { cost: spec.cost },
            OwnedBy(owner),
        ))
        .id();
    let id = register(world, entity);

    let mut unit = world.entity_mut(entity);
    unit.insert(SimEntity::new(id, spec.name));
    if let Some(value) = spec.custom_sell_value {
        unit.insert(CustomSellValue { value });
    }
    if let Some(capacity) = spec.cargo_capacity {
        unit.insert(Cargo { capacity });
    }
    if let Some(policy) = spec.bounty {
        unit.insert(GivesBounty::new(policy));
    }
    entity
}
