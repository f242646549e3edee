use std::collections::BTreeMap;

use bevy_ecs::entity::Entity;
use bevy_ecs::resource::Resource;

use crate::model::Stance;

/// Directional stances between owners.
///
/// Keyed by `(from, to)`: the stance `from` holds toward `to`. An owner is
/// always allied with itself; unset pairs are enemies.
/// BTreeMap for deterministic iteration.
#[derive(Resource, Debug, Clone, Default)]
pub struct Diplomacy {
    stances: BTreeMap<(Entity, Entity), Stance>,
}

impl Diplomacy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the stance `from` holds toward `to`. Self-stances are ignored.
    pub fn set_stance(&mut self, from: Entity, to: Entity, stance: Stance) {
        if from != to {
            self.stances.insert((from, to), stance);
        }
    }

    /// Set the same stance in both directions.
    pub fn set_mutual(&mut self, a: Entity, b: Entity, stance: Stance) {
        self.set_stance(a, b, stance);
        self.set_stance(b, a, stance);
    }

    pub fn stance(&self, from: Entity, to: Entity) -> Stance {
        if from == to {
            return Stance::Ally;
        }
        self.stances
            .get(&(from, to))
            .copied()
            .unwrap_or(Stance::Enemy)
    }

    /// Whether `owner` is allied with `other`. `None` (an observer with no
    /// player) counts as allied with everyone.
    pub fn is_allied_with(&self, owner: Entity, other: Option<Entity>) -> bool {
        other.is_none_or(|other| self.stance(owner, other) == Stance::Ally)
    }
}
