use std::collections::BTreeMap;

use bevy_ecs::entity::Entity;
use bevy_ecs::resource::Resource;

/// Bidirectional mapping between simulation IDs (u64) and Bevy entities.
///
/// Audit records refer to entities by sim ID so they stay meaningful
/// outside the running `World`.
#[derive(Resource, Debug, Clone, Default)]
pub struct SimEntityMap {
    to_bevy: BTreeMap<u64, Entity>,
    to_sim: BTreeMap<Entity, u64>,
}

impl SimEntityMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a mapping. Returns false and leaves the map untouched if
    /// either side is already registered.
    pub fn insert(&mut self, sim_id: u64, entity: Entity) -> bool {
        if self.to_bevy.contains_key(&sim_id) || self.to_sim.contains_key(&entity) {
            return false;
        }
        self.to_bevy.insert(sim_id, entity);
        self.to_sim.insert(entity, sim_id);
        true
    }

    pub fn get_bevy(&self, sim_id: u64) -> Option<Entity> {
        self.to_bevy.get(&sim_id).copied()
    }

    pub fn get_sim(&self, entity: Entity) -> Option<u64> {
        self.to_sim.get(&entity).copied()
    }

    pub fn len(&self) -> usize {
        self.to_bevy.len()
    }

    pub fn is_empty(&self) -> bool {
        self.to_bevy.is_empty()
    }
}
